//! Converts a Tokens Studio export into a custom-property stylesheet, a
//! TypeScript token module and a flat JSON mirror.

pub mod case;
pub mod css;
pub mod document;
pub mod error;
pub mod flatten;
pub mod json;
pub mod sync;
pub mod token_type;
pub mod typescript;
pub mod units;

pub use document::{load_tokens, Layer, TokenDocument, TokenGroup, TokenLeaf, TokenNode};
pub use error::{Result, TokenError};
pub use flatten::{flatten, FlatLayers, FlatToken, FlatTokenSet};
pub use sync::{render, sync, GeneratedArtifacts, LayerCounts, SyncConfig, SyncReport};
pub use token_type::TokenType;

pub(crate) const GENERATED_HEADER: &str =
    "/* Auto-generated from Figma Tokens Studio */\n/* Do not edit manually */\n";
