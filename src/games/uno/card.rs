//! Uno cards and the standard deck.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// One-letter code used in card emoji names.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// What a card does. Numbers run 1 to 9; the bot's deck has no zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Face {
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Face::Wild | Face::WildDrawFour)
    }

    /// Cards the next player must take.
    #[must_use]
    pub const fn penalty(self) -> usize {
        match self {
            Face::DrawTwo => 2,
            Face::WildDrawFour => 4,
            _ => 0,
        }
    }
}

/// A card. Wild cards in a hand have no color; once played, the top of the
/// pile carries the color its player chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnoCard {
    pub color: Option<Color>,
    pub face: Face,
}

impl UnoCard {
    #[must_use]
    pub const fn colored(color: Color, face: Face) -> Self {
        Self {
            color: Some(color),
            face,
        }
    }

    #[must_use]
    pub const fn number(color: Color, n: u8) -> Self {
        Self::colored(color, Face::Number(n))
    }

    #[must_use]
    pub const fn wild() -> Self {
        Self {
            color: None,
            face: Face::Wild,
        }
    }

    #[must_use]
    pub const fn wild_draw_four() -> Self {
        Self {
            color: None,
            face: Face::WildDrawFour,
        }
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.face.is_wild()
    }

    /// Can this card go on `top`? Wilds always can; anything else needs a
    /// matching color or face.
    #[must_use]
    pub fn plays_on(&self, top: &UnoCard) -> bool {
        self.is_wild() || self.color == top.color || self.face == top.face
    }

    /// This card as it sits on the pile after its color was picked.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Emoji code, e.g. `R7`, `GS` (skip), `BR` (reverse), `YP` (+2), `W4`, `WR`.
    #[must_use]
    pub fn code(&self) -> String {
        match (self.face, self.color) {
            (Face::Wild, _) => "WR".to_string(),
            (Face::WildDrawFour, _) => "W4".to_string(),
            (face, color) => {
                let c = color.map_or('W', Color::code);
                let f = match face {
                    Face::Number(n) => char::from(b'0' + n.min(9)),
                    Face::Skip => 'S',
                    Face::Reverse => 'R',
                    _ => 'P',
                };
                format!("{c}{f}")
            }
        }
    }
}

impl std::fmt::Display for UnoCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = match self.face {
            Face::Number(n) => n.to_string(),
            Face::Skip => "Skip".to_string(),
            Face::Reverse => "Reverse".to_string(),
            Face::DrawTwo => "+2".to_string(),
            Face::Wild => "Wild".to_string(),
            Face::WildDrawFour => "Wild +4".to_string(),
        };
        match (self.color, self.is_wild()) {
            (Some(c), true) => write!(f, "{face} ({c})"),
            (Some(c), false) => write!(f, "{c} {face}"),
            (None, _) => f.write_str(&face),
        }
    }
}

/// The bot's deck: per color two each of 1-9, Skip, Reverse and +2, plus two
/// Wild and two Wild +4.
#[must_use]
pub fn standard_deck() -> Vec<UnoCard> {
    let faces = (1..=9).map(Face::Number).chain([Face::Skip, Face::Reverse, Face::DrawTwo]);
    let colored: Vec<UnoCard> = Color::ALL
        .iter()
        .flat_map(|&color| faces.clone().map(move |face| UnoCard::colored(color, face)))
        .collect();

    let mut deck = Vec::with_capacity(colored.len() * 2 + 4);
    deck.extend_from_slice(&colored);
    deck.extend_from_slice(&colored);
    deck.extend([UnoCard::wild_draw_four(), UnoCard::wild(), UnoCard::wild_draw_four(), UnoCard::wild()]);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 100);
        assert_eq!(deck.iter().filter(|c| c.is_wild()).count(), 4);
        assert_eq!(deck.iter().filter(|c| c.face == Face::Skip).count(), 8);
        assert_eq!(deck.iter().filter(|c| **c == UnoCard::number(Color::Blue, 9)).count(), 2);
        assert!(!deck.iter().any(|c| c.face == Face::Number(0)));
    }

    #[test]
    fn test_plays_on() {
        let top = UnoCard::number(Color::Red, 5);
        assert!(UnoCard::number(Color::Red, 2).plays_on(&top));
        assert!(UnoCard::number(Color::Blue, 5).plays_on(&top));
        assert!(!UnoCard::number(Color::Blue, 4).plays_on(&top));
        assert!(UnoCard::wild().plays_on(&top));

        let skip = UnoCard::colored(Color::Green, Face::Skip);
        assert!(UnoCard::colored(Color::Yellow, Face::Skip).plays_on(&skip));
    }

    #[test]
    fn test_played_wild_takes_color() {
        let top = UnoCard::wild_draw_four().with_color(Color::Blue);
        assert!(UnoCard::number(Color::Blue, 1).plays_on(&top));
        assert!(!UnoCard::number(Color::Red, 1).plays_on(&top));
    }

    #[test]
    fn test_code_and_display() {
        assert_eq!(UnoCard::number(Color::Red, 7).code(), "R7");
        assert_eq!(UnoCard::colored(Color::Yellow, Face::DrawTwo).code(), "YP");
        assert_eq!(UnoCard::wild().with_color(Color::Red).code(), "WR");
        assert_eq!(UnoCard::colored(Color::Green, Face::Reverse).to_string(), "Green Reverse");
        assert_eq!(UnoCard::wild_draw_four().to_string(), "Wild +4");
        assert_eq!(UnoCard::wild().with_color(Color::Blue).to_string(), "Wild (Blue)");
    }
}
