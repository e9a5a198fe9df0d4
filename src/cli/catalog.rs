use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::DiseaseCatalog;
use crate::cli::OutputFormat;
use crate::core::types::CodeUpdate;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all diseases in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the codes for a specific disease
    Show {
        /// Canonical disease name (case-sensitive)
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Update the codes of an existing disease in a catalog file
    Update {
        /// Canonical disease name (case-sensitive)
        #[arg(required = true)]
        name: String,

        /// New ICD-11 code
        #[arg(long)]
        icd11: Option<String>,

        /// New TM2 code
        #[arg(long)]
        tm2: Option<String>,

        /// Catalog file to update in place
        #[arg(long, required = true)]
        catalog: PathBuf,
    },

    /// Delete a disease from a catalog file
    Delete {
        /// Canonical disease name (case-sensitive)
        #[arg(required = true)]
        name: String,

        /// Catalog file to update in place
        #[arg(long, required = true)]
        catalog: PathBuf,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog } => run_list(catalog.as_deref(), format, verbose),
        CatalogCommands::Show { name, catalog } => run_show(&name, catalog.as_deref(), format),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog.as_deref()),
        CatalogCommands::Update {
            name,
            icd11,
            tm2,
            catalog,
        } => run_update(&name, icd11, tm2, &catalog),
        CatalogCommands::Delete { name, catalog } => run_delete(&name, &catalog),
    }
}

fn load(catalog_path: Option<&Path>) -> anyhow::Result<DiseaseCatalog> {
    let catalog = if let Some(path) = catalog_path {
        DiseaseCatalog::load_from_file(path)?
    } else {
        DiseaseCatalog::load_embedded()?
    };
    Ok(catalog)
}

fn run_list(catalog_path: Option<&Path>, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    if verbose {
        eprintln!("Loaded catalog with {} diseases", catalog.len());
    }

    let entries = catalog.entries();

    match format {
        OutputFormat::Text => {
            let name_width = entries
                .iter()
                .map(|(name, _)| name.as_str().len())
                .max()
                .unwrap_or(7)
                .max(7);

            println!("Disease Catalog ({} diseases)\n", entries.len());
            println!("{:<name_width$} {:<8} {}", "Disease", "ICD-11", "TM2");
            println!("{}", "-".repeat(name_width + 8 + 9));

            for (name, entry) in &entries {
                let name = name.as_str();
                println!("{name:<name_width$} {:<8} {}", entry.icd11, entry.tm2);
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = entries
                .iter()
                .map(|(name, entry)| {
                    serde_json::json!({
                        "name": name.as_str(),
                        "icd11": entry.icd11,
                        "tm2": entry.tm2,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\ticd11\ttm2");
            for (name, entry) in &entries {
                println!("{name}\t{}\t{}", entry.icd11, entry.tm2);
            }
        }
    }

    Ok(())
}

fn run_show(name: &str, catalog_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    let entry = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Disease '{name}' not found"))?;

    match format {
        OutputFormat::Text => {
            println!("Disease: {name}\n");
            println!("ICD-11: {}", entry.icd11);
            println!("TM2:    {}", entry.tm2);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": name,
                "icd11": entry.icd11,
                "tm2": entry.tm2,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\ticd11\ttm2");
            println!("{name}\t{}\t{}", entry.icd11, entry.tm2);
        }
    }

    Ok(())
}

fn run_export(output: &Path, catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!("Exported {} diseases to {}", catalog.len(), output.display());

    Ok(())
}

fn run_update(
    name: &str,
    icd11: Option<String>,
    tm2: Option<String>,
    catalog_path: &Path,
) -> anyhow::Result<()> {
    if icd11.is_none() && tm2.is_none() {
        anyhow::bail!("Provide at least one of --icd11 or --tm2");
    }

    let mut catalog = DiseaseCatalog::load_from_file(catalog_path)?;
    let updated = catalog.update(name, CodeUpdate { icd11, tm2 })?;

    let json = catalog.to_json()?;
    std::fs::write(catalog_path, json)?;

    println!(
        "Updated '{name}' in {}: ICD-11 {}, TM2 {}",
        catalog_path.display(),
        updated.icd11,
        updated.tm2
    );

    Ok(())
}

fn run_delete(name: &str, catalog_path: &Path) -> anyhow::Result<()> {
    let mut catalog = DiseaseCatalog::load_from_file(catalog_path)?;
    catalog.delete(name)?;

    let json = catalog.to_json()?;
    std::fs::write(catalog_path, json)?;

    println!(
        "Deleted '{name}' from {} ({} diseases remain)",
        catalog_path.display(),
        catalog.len()
    );

    Ok(())
}
