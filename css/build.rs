use std::{env, fs, path::Path};

use anyhow::Context;
use token_sync_core::{load_tokens, render};

fn main() -> anyhow::Result<()> {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?;
    let source = Path::new(&manifest_dir).join("../tokens/raw/tokens.json");
    let artifacts = render(&load_tokens(&source)?)?;

    let out_dir = env::var_os("OUT_DIR").context("OUT_DIR is not set")?;
    let dest_path = Path::new(&out_dir).join("tokens.css");
    fs::write(&dest_path, artifacts.stylesheet)
        .with_context(|| format!("failed to write {}", dest_path.display()))?;

    println!("cargo:rerun-if-changed={}", source.display());
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
