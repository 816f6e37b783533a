use itertools::Itertools;

use crate::{
    flatten::{FlatLayers, FlatTokenSet},
    units::css_value,
    GENERATED_HEADER,
};

/// Set on the document root by the theme toggle. Outranks `:root`, so dark
/// values win regardless of source order.
pub const DARK_THEME_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Primitive defaults, light defaults, then the dark override block.
pub fn render_stylesheet(layers: &FlatLayers) -> String {
    let blocks = [
        css_block(":root", &layers.primitive),
        css_block(":root", &layers.light),
        css_block(DARK_THEME_SELECTOR, &layers.dark),
    ];
    format!("{GENERATED_HEADER}\n{}", blocks.iter().join("\n"))
}

fn css_block(selector: &str, tokens: &FlatTokenSet) -> String {
    let body = tokens
        .iter()
        .map(|(key, token)| format!("  --{key}: {};\n", css_value(token)))
        .join("");
    format!("{selector} {{\n{body}}}\n")
}
