use axum::{
    extract::{DefaultBodyLimit, Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::shared::{load_shared_embedded, SharedCatalog};
use crate::cli::ServeArgs;
use crate::core::result::MatchResult;
use crate::core::types::CodeUpdate;
use crate::matching::engine::{Resolver, ResolverConfig, DEFAULT_THRESHOLD};
use crate::web::fhir::{Bundle, Condition, OperationOutcome};

/// Maximum accepted request body (the API only takes small JSON bodies)
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub catalog: SharedCatalog,
}

/// Query parameters for `/api/resolve`
#[derive(Deserialize)]
struct ResolveParams {
    disease: Option<String>,
    threshold: Option<f64>,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured.
///
/// IP rate limiting is layered on in [`run_server`], since it needs peer
/// addresses from the connection.
pub fn create_router(catalog: SharedCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/", get(index_handler))
        .route("/api/resolve", get(resolve_handler))
        .route("/api/catalog", get(catalog_handler))
        .route(
            "/api/catalog/{name}",
            axum::routing::put(update_handler).delete(delete_handler),
        )
        .fallback(fallback_handler)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Request timeout to prevent slow client attacks
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests
                .layer(ConcurrencyLimitLayer::new(100))
                // Limit request body size
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = load_shared_embedded()?;

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    let app = create_router(catalog).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    });

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting dx-solver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Resolve a disease name to a FHIR Condition.
///
/// Missing or blank `disease` is a 400, an unmatched query is a 404, and
/// both carry an `OperationOutcome` body.
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> Response {
    let query = params.disease.unwrap_or_default();
    let threshold = params.threshold.unwrap_or(DEFAULT_THRESHOLD);

    let catalog = state.catalog.read();
    let resolver = Resolver::with_config(&catalog, ResolverConfig { threshold });

    match resolver.resolve(&query) {
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(OperationOutcome::error("invalid", "No disease provided")),
        )
            .into_response(),
        Ok(MatchResult::Exact { name, entry }) => {
            Json(Condition::for_disease(name.as_str(), &entry, None)).into_response()
        }
        Ok(MatchResult::Fuzzy { name, entry, score }) => {
            tracing::debug!("fuzzy match for '{query}': '{name}' at {score:.1}");
            let note = format!("Did you mean '{name}'?");
            Json(Condition::for_disease(name.as_str(), &entry, Some(note))).into_response()
        }
        Ok(MatchResult::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(OperationOutcome::error("not-found", "Disease not found")),
        )
            .into_response(),
    }
}

/// Return the whole catalog as a FHIR Bundle. Never fails.
async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<Bundle> {
    let catalog = state.catalog.read();
    let conditions = catalog
        .entries()
        .iter()
        .map(|(name, entry)| Condition::for_disease(name.as_str(), entry, None))
        .collect();

    Json(Bundle::collection(conditions))
}

/// Apply a partial code update to an existing disease.
async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(update): Json<CodeUpdate>,
) -> Response {
    let result = state.catalog.write().update(&name, update);

    match result {
        Ok(_) => Json(OperationOutcome::information(
            "updated",
            format!("{name} updated successfully"),
        ))
        .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(OperationOutcome::error("not-found", "Disease not found")),
        )
            .into_response(),
    }
}

/// Remove a disease. A second delete of the same name is a 404.
async fn delete_handler(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Response {
    let result = state.catalog.write().delete(&name);

    match result {
        Ok(()) => Json(OperationOutcome::information(
            "deleted",
            format!("{name} deleted successfully"),
        ))
        .into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(OperationOutcome::error("not-found", "Disease not found")),
        )
            .into_response(),
    }
}

/// Catch-all for unknown routes
async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(OperationOutcome::error("not-found", "Resource not found")),
    )
        .into_response()
}
