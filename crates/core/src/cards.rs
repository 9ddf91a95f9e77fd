use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn code(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.code() == code)
            .ok_or_else(|| CardError::InvalidArgument(format!("suit code {code} out of range")))
    }

    /// Case-insensitive name prefix lookup; the prefix must single out one suit.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        resolve_prefix(name, &Self::ALL, |suit| suit.name())
    }

    pub fn resolve(arg: &SuitArg) -> Result<Self, CardError> {
        match arg {
            SuitArg::Code(code) => Self::from_code(*code),
            SuitArg::Name(name) => Self::from_name(name),
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// The two suits of the opposite color.
    pub fn alternates(self) -> [Suit; 2] {
        if self.is_red() {
            [Suit::Spades, Suit::Clubs]
        } else {
            [Suit::Hearts, Suit::Diamonds]
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
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

    pub fn code(self) -> u8 {
        match self {
            Rank::Ace => 0,
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
            Rank::Six => 5,
            Rank::Seven => 6,
            Rank::Eight => 7,
            Rank::Nine => 8,
            Rank::Ten => 9,
            Rank::Jack => 10,
            Rank::Queen => 11,
            Rank::King => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }

    pub fn from_code(code: u8) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.code() == code)
            .ok_or_else(|| CardError::InvalidArgument(format!("rank code {code} out of range")))
    }

    /// Case-insensitive name prefix lookup; the prefix must single out one rank.
    pub fn from_name(name: &str) -> Result<Self, CardError> {
        resolve_prefix(name, &Self::ALL, |rank| rank.name())
    }

    pub fn resolve(arg: &RankArg) -> Result<Self, CardError> {
        match arg {
            RankArg::Code(code) => Self::from_code(*code),
            RankArg::Name(name) => Self::from_name(name),
        }
    }

    /// One step higher, None above King.
    pub fn succ(self) -> Option<Rank> {
        Self::ALL.get(self.code() as usize + 1).copied()
    }
}

fn resolve_prefix<T: Copy>(
    input: &str,
    all: &[T],
    name_of: impl Fn(T) -> &'static str,
) -> Result<T, CardError> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Err(CardError::InvalidArgument("empty name".to_string()));
    }
    let mut matches = all.iter().copied().filter(|v| name_of(*v).starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(CardError::InvalidArgument(format!(
            "ambiguous name prefix: {input}"
        ))),
        (None, _) => Err(CardError::InvalidArgument(format!(
            "unrecognized name: {input}"
        ))),
    }
}

/// A suit given either as its numeric code or as a name prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuitArg {
    Code(u8),
    Name(String),
}

/// A rank given either as its numeric code or as a name prefix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RankArg {
    Code(u8),
    Name(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Facing {
    Up,
    Down,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Up => Facing::Down,
            Facing::Down => Facing::Up,
        }
    }
}

/// Stable identity of one of the 52 (rank, suit) pairs.
pub type CardId = u8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    facing: Facing,
    /// Tail identities this card has rested on after a whole-stack move.
    #[serde(default)]
    rested_on: HashSet<CardId>,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            facing: Facing::Down,
            rested_on: HashSet::new(),
        }
    }

    pub fn id(&self) -> CardId {
        self.suit.code() * Rank::ALL.len() as u8 + self.rank.code()
    }

    pub fn set_suit(&mut self, arg: &SuitArg) -> Result<(), CardError> {
        self.suit = Suit::resolve(arg)?;
        Ok(())
    }

    pub fn set_rank(&mut self, arg: &RankArg) -> Result<(), CardError> {
        self.rank = Rank::resolve(arg)?;
        Ok(())
    }

    pub fn flip(&mut self) {
        self.facing = self.facing.flipped();
    }

    pub fn turn(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_face_up(&self) -> bool {
        self.facing == Facing::Up
    }

    pub fn alternate_suits(&self) -> [Suit; 2] {
        self.suit.alternates()
    }

    pub fn record_rest(&mut self, tail: CardId) {
        self.rested_on.insert(tail);
    }

    pub fn has_rested_on(&self, tail: CardId) -> bool {
        self.rested_on.contains(&tail)
    }
}
