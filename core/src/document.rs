use std::{fmt, fs, path::Path};

use indexmap::IndexMap;
use serde::{
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::warn;

use crate::{
    error::{Result, TokenError},
    token_type::TokenType,
};

/// Reads and parses a token document exported from Tokens Studio.
pub fn load_tokens(path: impl AsRef<Path>) -> Result<TokenDocument> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| TokenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    TokenDocument::from_json(&data).map_err(|source| TokenError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Primitive,
    Light,
    Dark,
}
impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Primitive, Layer::Light, Layer::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Primitive => "primitive",
            Layer::Light => "light",
            Layer::Dark => "dark",
        }
    }
}
impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three token sets of a document. All of them are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenDocument {
    pub primitive: TokenGroup,
    pub light: TokenGroup,
    pub dark: TokenGroup,
}
impl TokenDocument {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
    pub fn layer(&self, layer: Layer) -> &TokenGroup {
        match layer {
            Layer::Primitive => &self.primitive,
            Layer::Light => &self.light,
            Layer::Dark => &self.dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    pub value: String,
    pub token_type: TokenType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(TokenGroup),
}

/// Named children of a group, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenGroup(IndexMap<String, TokenNode>);
impl TokenGroup {
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TokenNode> {
        self.0.iter()
    }
    pub fn get(&self, segment: &str) -> Option<&TokenNode> {
        self.0.get(segment)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl FromIterator<(String, TokenNode)> for TokenGroup {
    fn from_iter<I: IntoIterator<Item = (String, TokenNode)>>(iter: I) -> Self {
        TokenGroup(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a TokenGroup {
    type Item = (&'a String, &'a TokenNode);
    type IntoIter = indexmap::map::Iter<'a, String, TokenNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for TokenGroup {
    fn deserialize<D>(deserializer: D) -> Result<TokenGroup, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GroupVisitor)
    }
}

struct GroupVisitor;

impl<'de> Visitor<'de> for GroupVisitor {
    type Value = TokenGroup;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a token group object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        match NodeVisitor.visit_map(map)? {
            TokenNode::Group(group) => Ok(group),
            TokenNode::Leaf(_) => Err(de::Error::custom(
                "expected a token group, found a single token",
            )),
        }
    }
}

/// Decides leaf versus group once, while the object is being read: an object
/// carrying `$value` is a leaf. A missing `$type` leaves the category empty.
struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = TokenNode;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a token or a token group")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut value = None;
        let mut token_type = None;
        let mut children = IndexMap::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == "$value" {
                value = Some(map.next_value::<ScalarText>()?.0);
            } else if key == "$type" {
                token_type = Some(map.next_value::<String>()?);
            } else if key.starts_with('$') {
                // $description, $extensions, $metadata, ...
                map.next_value::<IgnoredAny>()?;
            } else if let Child(Some(node)) = map.next_value::<Child>()? {
                children.insert(key, node);
            }
        }
        match (value, token_type) {
            (Some(value), Some(label)) => Ok(TokenNode::Leaf(TokenLeaf {
                value,
                token_type: TokenType::from(label.as_str()),
            })),
            (Some(value), None) => {
                warn!(%value, "token has a `$value` but no `$type`, keeping it uncategorized");
                Ok(TokenNode::Leaf(TokenLeaf {
                    value,
                    token_type: TokenType::Other(String::new()),
                }))
            }
            _ => Ok(TokenNode::Group(TokenGroup(children))),
        }
    }
}

/// A group entry. Scalars and arrays carry no tokens and are dropped.
struct Child(Option<TokenNode>);

impl<'de> Deserialize<'de> for Child {
    fn deserialize<D>(deserializer: D) -> Result<Child, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ChildVisitor)
    }
}

struct ChildVisitor;

impl<'de> Visitor<'de> for ChildVisitor {
    type Value = Child;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a token, a token group or a scalar")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        NodeVisitor.visit_map(map).map(|node| Child(Some(node)))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Child(None))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Child(None))
    }
}

/// `$value` as text. Numbers go through `to_string`, so `8.0` reads as `8`
/// and `1e2` as `100`.
struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<ScalarText, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarTextVisitor)
    }
}

struct ScalarTextVisitor;

impl<'de> Visitor<'de> for ScalarTextVisitor {
    type Value = ScalarText;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or number token value")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(ScalarText(value.to_string()))
    }
    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(ScalarText(value.to_string()))
    }
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(ScalarText(value.to_string()))
    }
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(ScalarText(value.to_string()))
    }
}
