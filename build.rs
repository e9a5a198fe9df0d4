use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/diseases.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    // Validate structure
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let diseases = catalog.get("diseases").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'diseases' field\n\
             The catalog must have a top-level 'diseases' object.\n"
        );
    });

    let entries = diseases.as_object().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'diseases' must be an object\n\
             Got: {diseases}\n"
        );
    });

    validate_disease_entries(entries);

    println!("cargo:warning=Validated catalog: {} diseases", entries.len());
}

fn validate_disease_entries(entries: &serde_json::Map<String, serde_json::Value>) {
    for (name, entry) in entries {
        assert!(
            !name.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Disease name must not be blank\n"
        );
        validate_disease_codes(name, entry);
    }
}

fn validate_disease_codes(name: &str, entry: &serde_json::Value) {
    for field in ["icd11", "tm2"] {
        let code = entry.get(field).unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Disease '{name}' missing '{field}' field\n")
        });

        let code = code.as_str().unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Disease '{name}' field '{field}' must be a string\n\
                 Got: {code}\n"
            )
        });

        assert!(
            !code.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Disease '{name}' has an empty '{field}' code\n\
             Codes must be non-empty strings.\n"
        );
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/diseases.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
