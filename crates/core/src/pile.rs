use crate::{Card, Facing, RngState};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PileError {
    #[error("pile is full (limit {limit})")]
    Full { limit: usize },
    #[error("pile is empty")]
    Empty,
}

/// Orientation forced onto cards as they enter a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingPolicy {
    ForceUp,
    ForceDown,
}

impl FacingPolicy {
    fn facing(self) -> Facing {
        match self {
            FacingPolicy::ForceUp => Facing::Up,
            FacingPolicy::ForceDown => Facing::Down,
        }
    }
}

/// A bounded, ordered stack of cards. Head is the oldest insertion, tail the
/// newest; tableau legality reads the tail, whole-stack moves read the head.
#[derive(Debug, Clone)]
pub struct Pile {
    cards: VecDeque<Card>,
    limit: usize,
    policy: FacingPolicy,
}

impl Pile {
    pub fn new(limit: usize, policy: FacingPolicy) -> Self {
        Self {
            cards: VecDeque::with_capacity(limit),
            limit,
            policy,
        }
    }

    /// Append at the tail. The capacity check happens before any mutation so
    /// an over-limit state is never observable.
    pub fn put(&mut self, mut card: Card) -> Result<(), PileError> {
        if self.cards.len() >= self.limit {
            return Err(PileError::Full { limit: self.limit });
        }
        card.turn(self.policy.facing());
        self.cards.push_back(card);
        Ok(())
    }

    /// Remove and return the tail card.
    pub fn take(&mut self) -> Result<Card, PileError> {
        self.cards.pop_back().ok_or(PileError::Empty)
    }

    pub fn peek_head(&self) -> Result<&Card, PileError> {
        self.cards.front().ok_or(PileError::Empty)
    }

    pub fn peek_tail(&self) -> Result<&Card, PileError> {
        self.cards.back().ok_or(PileError::Empty)
    }

    /// Remove every card, head first, preserving pile order.
    pub fn drain_run(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(self.cards.make_contiguous());
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
