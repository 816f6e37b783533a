use std::fmt;

use serde::{Serialize, Serializer};

/// Category label carried by every token leaf (`$type`).
///
/// Known labels get their own variant; anything else is kept verbatim in
/// `Other` so it still flows through grouping and the JSON mirror.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Color,
    Spacing,
    BorderRadius,
    FontSize,
    FontFamily,
    FontWeight,
    LineHeight,
    Other(String),
}
impl TokenType {
    /// The label as written in the source document.
    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Spacing => "spacing",
            TokenType::BorderRadius => "borderRadius",
            TokenType::FontSize => "fontSize",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::LineHeight => "lineHeight",
            TokenType::Other(label) => label,
        }
    }
    /// Name the category is exported under in the typed source module.
    pub fn category(&self) -> &str {
        match self {
            TokenType::BorderRadius => "radius",
            other => other.as_str(),
        }
    }
    /// Length-valued categories receive a pixel unit in the stylesheet.
    pub fn is_length(&self) -> bool {
        match self {
            TokenType::Spacing | TokenType::BorderRadius | TokenType::FontSize => true,
            TokenType::Color
            | TokenType::FontFamily
            | TokenType::FontWeight
            | TokenType::LineHeight
            | TokenType::Other(_) => false,
        }
    }
}

impl From<&str> for TokenType {
    fn from(label: &str) -> Self {
        match label {
            "color" => TokenType::Color,
            "spacing" => TokenType::Spacing,
            "borderRadius" => TokenType::BorderRadius,
            "fontSize" => TokenType::FontSize,
            "fontFamily" => TokenType::FontFamily,
            "fontWeight" => TokenType::FontWeight,
            "lineHeight" => TokenType::LineHeight,
            other => TokenType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for label in ["color", "spacing", "borderRadius", "fontSize", "boxShadow", ""] {
            assert_eq!(TokenType::from(label).as_str(), label);
        }
    }

    #[test]
    fn border_radius_is_exported_as_radius() {
        assert_eq!(TokenType::BorderRadius.category(), "radius");
        assert_eq!(TokenType::Color.category(), "color");
        assert_eq!(TokenType::from("opacity").category(), "opacity");
    }

    #[test]
    fn length_categories() {
        assert!(TokenType::Spacing.is_length());
        assert!(TokenType::BorderRadius.is_length());
        assert!(TokenType::FontSize.is_length());
        assert!(!TokenType::Color.is_length());
        assert!(!TokenType::from("sizing").is_length());
    }
}
