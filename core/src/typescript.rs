use indexmap::IndexMap;
use itertools::Itertools;
use tracing::warn;

use crate::{
    case::{to_hyphenated, to_identifier_style},
    flatten::{FlatLayers, FlatTokenSet},
    GENERATED_HEADER,
};

pub const LIGHT_THEME_EXPORT: &str = "lightTheme";
pub const DARK_THEME_EXPORT: &str = "darkTheme";
pub const TOKENS_EXPORT: &str = "tokens";

/// Export name -> member name -> `var(--flat-key)`.
type CategoryGroups = IndexMap<String, IndexMap<String, String>>;

/// Renders the token module. Every member is a `var()` reference into the
/// stylesheet, so the active theme is resolved by CSS, not by this module.
pub fn render_typed_source(layers: &FlatLayers) -> String {
    let categories = group_by_category(&layers.primitive);

    let category_exports = categories.iter().map(|(category, members)| {
        format!(
            "export const {category} = {{\n{}}} as const;\n",
            render_members(members, 1)
        )
    });
    let theme_exports = [
        (LIGHT_THEME_EXPORT, &layers.light),
        (DARK_THEME_EXPORT, &layers.dark),
    ]
    .into_iter()
    .map(|(name, tokens)| {
        let body = group_by_category(tokens)
            .iter()
            .map(|(category, members)| {
                format!(
                    "  {}: {{\n{}  }},\n",
                    property_key(category),
                    render_members(members, 2)
                )
            })
            .join("");
        format!("export const {name} = {{\n{body}}} as const;\n")
    });
    let aggregate = categories
        .keys()
        .map(String::as_str)
        .chain([LIGHT_THEME_EXPORT, DARK_THEME_EXPORT])
        .map(|name| format!("  {name},\n"))
        .join("");
    let aggregate_export = format!("export const {TOKENS_EXPORT} = {{\n{aggregate}}} as const;\n");

    let sections = category_exports
        .chain(theme_exports)
        .chain(std::iter::once(aggregate_export))
        .join("\n");
    format!("{GENERATED_HEADER}\n{sections}")
}

fn group_by_category(tokens: &FlatTokenSet) -> CategoryGroups {
    let groups = tokens
        .iter()
        .fold(CategoryGroups::new(), |mut groups, (key, token)| {
            let category = to_hyphenated(token.token_type.category());
            let member = member_name(key, &category);
            let members = groups.entry(to_identifier_style(&category)).or_default();
            if let Some(previous) = members.insert(member.clone(), format!("var(--{key})")) {
                warn!(%member, %previous, "token member redefined within its category");
            }
            groups
        });
    if let Some(members) = groups.get("") {
        // Tokens without `$type` land here; the export has no usable name.
        warn!(
            count = members.len(),
            "uncategorized tokens produce an unnamed export"
        );
    }
    groups
}

/// `color-blue-500` in `color` -> `blue500`. The category prefix is kept when
/// stripping it would leave nothing.
fn member_name(key: &str, category: &str) -> String {
    let short = key
        .strip_prefix(category)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(key);
    to_identifier_style(short)
}

fn render_members(members: &IndexMap<String, String>, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    members
        .iter()
        .map(|(name, reference)| format!("{indent}{}: '{reference}',\n", property_key(name)))
        .join("")
}

/// Object keys are quoted when they contain `-` or start with a digit.
fn property_key(name: &str) -> String {
    if name.contains('-') || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("'{name}'")
    } else {
        name.to_string()
    }
}
