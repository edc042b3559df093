//! Black and white cards.
//!
//! Card text arrives with HTML entities and tags; `sanitize` rewrites it
//! into chat markdown before a card is shown.

use serde::{Deserialize, Serialize};

/// Substitutions applied to card text, in order.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("&reg;", ""),
    ("&trade;", ""),
    ("_", "\\_\\_\\_\\_\\_\\_\\_\\_\\_"),
    ("<br/>", "\n"),
    ("</br>", "\n"),
    ("<br>", "\n"),
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("<i>", "*"),
    ("</i>", "*"),
    ("&uarr;", ":arrow_up: "),
    ("&darr;", ":arrow_down: "),
    ("&larr;", ":arrow_left: "),
    ("&rarr;", ":arrow_right: "),
];

/// Rewrite HTML entities and tags into chat-renderable text.
#[must_use]
pub fn sanitize(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// A prompt card. The judge reads it; players answer with `pick` white cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlackCard {
    pub text: String,
    #[serde(default = "default_pick")]
    pub pick: u8,
}

fn default_pick() -> u8 {
    1
}

impl BlackCard {
    pub fn new(text: impl Into<String>, pick: u8) -> Self {
        Self {
            text: text.into(),
            pick: pick.max(1),
        }
    }

    /// Number of white cards each player submits.
    #[must_use]
    pub fn pick(&self) -> usize {
        usize::from(self.pick.max(1))
    }

    /// Display text.
    #[must_use]
    pub fn display(&self) -> String {
        sanitize(&self.text)
    }
}

/// An answer card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhiteCard(pub String);

impl WhiteCard {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Display text.
    #[must_use]
    pub fn display(&self) -> String {
        sanitize(&self.0)
    }
}

impl std::fmt::Display for WhiteCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Both decks, as fetched from a card source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CahContent {
    pub black: Vec<BlackCard>,
    pub white: Vec<WhiteCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Tom&reg; &amp; Jerry&trade;"), "Tom & Jerry");
        assert_eq!(sanitize("<i>Why</i> me?<br>Why?"), "*Why* me?\nWhy?");
        assert_eq!(sanitize("&quot;Up&quot; &uarr;"), "\"Up\" :arrow_up: ");
        assert_eq!(sanitize("I like _."), "I like \\_\\_\\_\\_\\_\\_\\_\\_\\_.");
    }

    #[test]
    fn test_pick_never_zero() {
        assert_eq!(BlackCard::new("?", 0).pick(), 1);
        let card: BlackCard = serde_json::from_str(r#"{"text": "_ and _", "pick": 2}"#).unwrap();
        assert_eq!(card.pick(), 2);
        let card: BlackCard = serde_json::from_str(r#"{"text": "_?"}"#).unwrap();
        assert_eq!(card.pick(), 1);
    }

    #[test]
    fn test_white_card_serde() {
        let content: CahContent = serde_json::from_str(r#"{"black": [], "white": ["A <i>horse</i>."]}"#).unwrap();
        assert_eq!(content.white[0].to_string(), "A *horse*.");
    }
}
