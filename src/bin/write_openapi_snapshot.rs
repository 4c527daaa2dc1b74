// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    feedpress_core::presentation::http::openapi::write_openapi_snapshot()?;
    println!(
        "OpenAPI snapshot written to {}",
        feedpress_core::presentation::http::openapi::snapshot_path()
    );
    Ok(())
}
