use crate::{
    error::{Result, TokenError},
    flatten::FlatLayers,
};

/// Pretty-printed copy of the flattened layers, for inspection.
pub fn render_json_mirror(layers: &FlatLayers) -> Result<String> {
    let mut json = serde_json::to_string_pretty(layers).map_err(TokenError::Serialize)?;
    json.push('\n');
    Ok(json)
}
