use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    css::render_stylesheet,
    document::{load_tokens, Layer, TokenDocument},
    error::{Result, TokenError},
    flatten::FlatLayers,
    json::render_json_mirror,
    typescript::render_typed_source,
};

pub const DEFAULT_INPUT: &str = "tokens/raw/tokens.json";
pub const DEFAULT_OUT_DIR: &str = "tokens/dist";

pub const STYLESHEET_FILE: &str = "tokens.css";
pub const TYPED_SOURCE_FILE: &str = "tokens.ts";
pub const JSON_MIRROR_FILE: &str = "tokens.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Token document exported from the design tool.
    pub input: PathBuf,
    /// Directory receiving the three generated files.
    pub out_dir: PathBuf,
}
impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub stylesheet: String,
    pub typed_source: String,
    pub json_mirror: String,
    pub counts: LayerCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerCounts {
    pub primitive: usize,
    pub light: usize,
    pub dark: usize,
}
impl LayerCounts {
    pub fn get(&self, layer: Layer) -> usize {
        match layer {
            Layer::Primitive => self.primitive,
            Layer::Light => self.light,
            Layer::Dark => self.dark,
        }
    }
    pub fn total(&self) -> usize {
        self.primitive + self.light + self.dark
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub counts: LayerCounts,
    pub written: Vec<PathBuf>,
}

/// Flattens every layer and renders the three artifacts. No I/O.
pub fn render(document: &TokenDocument) -> Result<GeneratedArtifacts> {
    let layers = FlatLayers::from_document(document)?;
    Ok(GeneratedArtifacts {
        stylesheet: render_stylesheet(&layers),
        typed_source: render_typed_source(&layers),
        json_mirror: render_json_mirror(&layers)?,
        counts: LayerCounts {
            primitive: layers.primitive.len(),
            light: layers.light.len(),
            dark: layers.dark.len(),
        },
    })
}

/// Regenerates the stylesheet, typed source and JSON mirror from the input
/// document, overwriting whatever is in the output directory.
///
/// Files are written one after another; a failed write leaves the files
/// written before it in place.
pub fn sync(config: &SyncConfig) -> Result<SyncReport> {
    info!(input = %config.input.display(), "loading token document");
    let document = load_tokens(&config.input)?;
    let artifacts = render(&document)?;
    for layer in Layer::ALL {
        info!(%layer, count = artifacts.counts.get(layer), "processed token set");
    }

    fs::create_dir_all(&config.out_dir).map_err(|source| TokenError::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;
    let written = [
        (STYLESHEET_FILE, &artifacts.stylesheet),
        (TYPED_SOURCE_FILE, &artifacts.typed_source),
        (JSON_MIRROR_FILE, &artifacts.json_mirror),
    ]
    .into_iter()
    .map(|(name, contents)| write_artifact(&config.out_dir.join(name), contents))
    .collect::<Result<Vec<_>>>()?;

    Ok(SyncReport {
        counts: artifacts.counts,
        written,
    })
}

fn write_artifact(path: &Path, contents: &str) -> Result<PathBuf> {
    fs::write(path, contents).map_err(|source| TokenError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "generated");
    Ok(path.to_path_buf())
}
