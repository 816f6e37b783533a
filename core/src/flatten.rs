use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::{
    case::to_hyphenated,
    document::{Layer, TokenDocument, TokenGroup, TokenLeaf, TokenNode},
    error::{Result, TokenError},
    token_type::TokenType,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatToken {
    pub value: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}
impl From<&TokenLeaf> for FlatToken {
    fn from(leaf: &TokenLeaf) -> Self {
        FlatToken {
            value: leaf.value.clone(),
            token_type: leaf.token_type.clone(),
        }
    }
}

/// Flat key (`color-blue-500`) to token, in depth-first document order.
pub type FlatTokenSet = IndexMap<String, FlatToken>;

/// The flattened primitive, light and dark sets of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatLayers {
    pub primitive: FlatTokenSet,
    pub light: FlatTokenSet,
    pub dark: FlatTokenSet,
}
impl FlatLayers {
    pub fn from_document(document: &TokenDocument) -> Result<Self> {
        Ok(FlatLayers {
            primitive: flatten(document.layer(Layer::Primitive), Layer::Primitive)?,
            light: flatten(document.layer(Layer::Light), Layer::Light)?,
            dark: flatten(document.layer(Layer::Dark), Layer::Dark)?,
        })
    }
    pub fn layer(&self, layer: Layer) -> &FlatTokenSet {
        match layer {
            Layer::Primitive => &self.primitive,
            Layer::Light => &self.light,
            Layer::Dark => &self.dark,
        }
    }
    pub fn total(&self) -> usize {
        self.primitive.len() + self.light.len() + self.dark.len()
    }
}

/// Reduces a token tree to one flat set, keyed by the hyphenated path of each
/// leaf. Fails if two paths produce the same key.
pub fn flatten(group: &TokenGroup, layer: Layer) -> Result<FlatTokenSet> {
    let tokens = flatten_group(group, "", layer)?;
    debug!(%layer, count = tokens.len(), "flattened layer");
    Ok(tokens)
}

fn flatten_group(group: &TokenGroup, prefix: &str, layer: Layer) -> Result<FlatTokenSet> {
    group
        .iter()
        .try_fold(FlatTokenSet::new(), |mut tokens, (segment, node)| {
            let key = join_key(prefix, segment);
            match node {
                TokenNode::Leaf(leaf) => insert_unique(&mut tokens, key, leaf.into(), layer)?,
                TokenNode::Group(children) => {
                    for (key, token) in flatten_group(children, &key, layer)? {
                        insert_unique(&mut tokens, key, token, layer)?;
                    }
                }
            }
            Ok(tokens)
        })
}

fn join_key(prefix: &str, segment: &str) -> String {
    let segment = to_hyphenated(segment);
    if prefix.is_empty() {
        segment
    } else {
        format!("{prefix}-{segment}")
    }
}

fn insert_unique(
    tokens: &mut FlatTokenSet,
    key: String,
    token: FlatToken,
    layer: Layer,
) -> Result<()> {
    if tokens.contains_key(&key) {
        return Err(TokenError::DuplicateKey { layer, key });
    }
    tokens.insert(key, token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: &str) -> TokenDocument {
        TokenDocument::from_json(json).unwrap()
    }

    #[test]
    fn joins_hyphenated_paths() {
        let doc = document(
            r##"{
                "primitive": {
                    "color": {
                        "blue500": { "$value": "#3b82f6", "$type": "color" },
                        "textPrimary": { "$value": "#111111", "$type": "color" }
                    },
                    "borderRadius": { "md": { "$value": "8", "$type": "borderRadius" } }
                },
                "light": {},
                "dark": {}
            }"##,
        );
        let flat = flatten(&doc.primitive, Layer::Primitive).unwrap();
        let keys: Vec<_> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["color-blue-500", "color-text-primary", "border-radius-md"]
        );
        assert_eq!(
            flat["border-radius-md"],
            FlatToken {
                value: "8".to_string(),
                token_type: TokenType::BorderRadius,
            }
        );
    }

    #[test]
    fn top_level_leaf_has_bare_key() {
        let doc = document(
            r##"{ "primitive": {}, "light": { "surface": { "$value": "#fff", "$type": "color" } }, "dark": {} }"##,
        );
        let flat = flatten(&doc.light, Layer::Light).unwrap();
        assert!(flat.contains_key("surface"));
    }

    #[test]
    fn negative_steps_keep_their_own_key() {
        let doc = document(
            r#"{
                "primitive": {
                    "spacing": {
                        "1": { "$value": "4", "$type": "spacing" },
                        "-1": { "$value": "-4", "$type": "spacing" }
                    }
                },
                "light": {},
                "dark": {}
            }"#,
        );
        let flat = flatten(&doc.primitive, Layer::Primitive).unwrap();
        let keys: Vec<_> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, ["spacing-1", "spacing--1"]);
        assert_eq!(flat["spacing--1"].value, "-4");
    }

    #[test]
    fn colliding_paths_fail() {
        let doc = document(
            r#"{
                "primitive": {
                    "fontSize": { "$value": "12", "$type": "fontSize" },
                    "font": { "size": { "$value": "14", "$type": "fontSize" } }
                },
                "light": {},
                "dark": {}
            }"#,
        );
        let err = flatten(&doc.primitive, Layer::Primitive).unwrap_err();
        match err {
            TokenError::DuplicateKey { layer, key } => {
                assert_eq!(layer, Layer::Primitive);
                assert_eq!(key, "font-size");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn layers_are_independent() {
        let doc = document(
            r##"{
                "primitive": { "gap": { "$value": "4", "$type": "spacing" } },
                "light": { "surface": { "$value": "#ffffff", "$type": "color" } },
                "dark": { "surface": { "$value": "#0f172a", "$type": "color" } }
            }"##,
        );
        let layers = FlatLayers::from_document(&doc).unwrap();
        assert_eq!(layers.total(), 3);
        assert_eq!(layers.light["surface"].value, "#ffffff");
        assert_eq!(layers.dark["surface"].value, "#0f172a");
        assert!(!layers.primitive.contains_key("surface"));
    }
}
