//! Card types and deck utilities.
//!
//! Big Two orders ranks from 3 (lowest) up to 2 (highest), and breaks ties
//! between equal ranks by suit: Diamonds < Clubs < Hearts < Spades.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Diamonds, the lowest suit.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades, the highest suit.
    Spades,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Returns the tie-breaking rank of the suit (Diamonds = 0 ... Spades = 3).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Diamonds => 0,
            Self::Clubs => 1,
            Self::Hearts => 2,
            Self::Spades => 3,
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Parses a suit from its letter (`D`, `C`, `H`, `S`, any case) or symbol.
    ///
    /// ```
    /// use bigtwo::Suit;
    ///
    /// assert_eq!(Suit::from_char('s'), Some(Suit::Spades));
    /// assert_eq!(Suit::from_char('♦'), Some(Suit::Diamonds));
    /// assert_eq!(Suit::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' | '♦' => Some(Self::Diamonds),
            'C' | '♣' => Some(Self::Clubs),
            'H' | '♥' => Some(Self::Hearts),
            'S' | '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ordered by Big Two strength (3 lowest, 2 highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// 2, the highest rank.
    Two,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Self; 13] = [
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Two,
    ];

    /// Returns the strength of the rank (3 = 3 ... K = 13, A = 14, 2 = 15).
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
            Self::Two => 15,
        }
    }

    /// Returns the face label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::Two => "2",
        }
    }

    /// Parses a rank from its face label. `T` is accepted for ten.
    ///
    /// ```
    /// use bigtwo::Rank;
    ///
    /// assert_eq!(Rank::from_label("10"), Some(Rank::Ten));
    /// assert_eq!(Rank::from_label("q"), Some(Rank::Queen));
    /// assert_eq!(Rank::from_label("1"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let rank = match label {
            "3" => Self::Three,
            "4" => Self::Four,
            "5" => Self::Five,
            "6" => Self::Six,
            "7" => Self::Seven,
            "8" => Self::Eight,
            "9" => Self::Nine,
            "10" | "T" | "t" => Self::Ten,
            "J" | "j" => Self::Jack,
            "Q" | "q" => Self::Queen,
            "K" | "k" => Self::King,
            "A" | "a" => Self::Ace,
            "2" => Self::Two,
            _ => return None,
        };
        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A playing card.
///
/// A deck holds every suit and rank pair exactly once, so two equal cards
/// are the same physical card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// The Diamonds-3, which must be part of the opening play.
    pub const OPENING: Self = Self::new(Suit::Diamonds, Rank::Three);

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the comparable value of the card: `strength * 4 + suit rank`.
    ///
    /// ```
    /// use bigtwo::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Diamonds, Rank::Three).value(), 12);
    /// assert_eq!(Card::new(Suit::Spades, Rank::Two).value(), 63);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.strength() * 4 + self.suit.rank()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank label followed by a suit letter or symbol.
    ///
    /// ```
    /// use bigtwo::{Card, Rank, Suit};
    ///
    /// let card: Card = "10s".parse().unwrap();
    /// assert_eq!(card, Card::new(Suit::Spades, Rank::Ten));
    /// assert_eq!("3♦".parse::<Card>().unwrap(), Card::OPENING);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (split, suit_char) = s.char_indices().last().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::InvalidSuit)?;
        let rank = Rank::from_label(&s[..split]).ok_or(ParseCardError::InvalidRank)?;
        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns an unshuffled deck, ordered by suit and then by rank.
#[must_use]
pub fn full_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::OPENING; DECK_SIZE];
    for (slot, (suit, rank)) in deck.iter_mut().zip(
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| (suit, rank))),
    ) {
        *slot = Card::new(suit, rank);
    }
    deck
}
