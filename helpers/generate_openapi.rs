//! Writes the MeowMatch OpenAPI document to disk without starting the server.
//!
//! ```bash
//! cargo run --bin generate_openapi -- docs/openapi.json
//! ```
//!
//! The output path defaults to `openapi.json`. Missing parent directories are
//! created, and the command fails if the document has no catalog paths.
use std::{env, fs, path::PathBuf};

use eyre::{ensure, WrapErr};
use meowmatch::openapi::ApiDoc;
use utoipa::OpenApi;

const DEFAULT_OUTPUT: &str = "openapi.json";

fn main() -> eyre::Result<()> {
    let output_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }

    let openapi = ApiDoc::openapi();
    ensure!(
        openapi.paths.paths.contains_key("/api/v1/cats"),
        "OpenAPI document is missing the catalog endpoints"
    );

    let json = openapi
        .to_pretty_json()
        .wrap_err("Failed to serialize OpenAPI document")?;
    fs::write(&output_path, json)
        .wrap_err_with(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "Wrote {} paths to {}",
        openapi.paths.paths.len(),
        output_path.display()
    );
    Ok(())
}
