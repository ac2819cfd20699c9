use std::fmt;
use std::str::FromStr;

/// Card ranks from Ace (low, 1) to King (13).
///
/// Bartok only ever compares ranks for equality and sorts hands by them, so
/// the Ace sits at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for a numeric value in `1..=13`.
    ///
    /// ```
    /// use bartok_rs::cards::Rank;
    ///
    /// assert_eq!(Rank::from_value(1), Some(Rank::Ace));
    /// assert_eq!(Rank::from_value(13), Some(Rank::King));
    /// assert_eq!(Rank::from_value(14), None);
    /// ```
    pub const fn from_value(v: u8) -> Option<Rank> {
        if v >= 1 && v <= 13 {
            Some(Rank::ALL[(v - 1) as usize])
        } else {
            None
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Four suits. Order is fixed (C < D < H < S) but carries no game meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use bartok_rs::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Hearts);
/// assert_eq!(card.to_string(), "Qh");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Bartok matching rule: same rank or same suit.
    pub fn matches(self, other: Card) -> bool {
        self.rank == other.rank || self.suit == other.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid card {0:?}: expected rank then suit, like \"Qh\" or \"10d\"")]
pub struct CardParseError(String);

impl FromStr for Card {
    type Err = CardParseError;

    /// Short notation: rank (`A`, `2`..`10`, `T`, `J`, `Q`, `K`) followed by
    /// a suit letter (`c`, `d`, `h`, `s`). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CardParseError(s.to_string());
        let t = s.trim();
        let mut chars = t.chars();
        let suit_ch = chars.next_back().ok_or_else(bad)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|su| su.to_char() == suit_ch.to_ascii_lowercase())
            .ok_or_else(bad)?;
        let rank = match chars.as_str().to_ascii_uppercase().as_str() {
            "10" => Rank::Ten,
            r => {
                let mut rc = r.chars();
                let found = match (rc.next(), rc.next()) {
                    (Some(c), None) => Rank::ALL.into_iter().find(|rk| rk.to_char() == c),
                    _ => None,
                };
                found.ok_or_else(bad)?
            }
        };
        Ok(Card::new(rank, suit))
    }
}
