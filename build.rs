//! Build script for spotmax.
//!
//! Copies the `.env.example` configuration template into the platform's local
//! data directory (`spotmax/.env.example`) so a fresh install has a template
//! next to the location where [`config::load_env`] looks for the real `.env`.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// # Destination
///
/// - Linux: `~/.local/share/spotmax/.env.example`
/// - macOS: `~/Library/Application Support/spotmax/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotmax/.env.example`
///
/// A missing template only produces a cargo warning; directory creation or
/// write failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotmax");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
