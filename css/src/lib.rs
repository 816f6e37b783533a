//! The repository's token stylesheet, rendered from `tokens/raw/tokens.json`
//! at build time.

pub const STYLESHEET: &str = include_str!(concat!(env!("OUT_DIR"), "/tokens.css"));
