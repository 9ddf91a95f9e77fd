use crate::{Card, Pile, Rank, Suit};
use serde::{Deserialize, Serialize};

/// What an observer may learn about one card: facing gates disclosure, so a
/// face-down card never leaks its identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardView {
    Hidden,
    Visible { rank: Rank, suit: Suit },
}

impl CardView {
    pub fn of(card: &Card) -> Self {
        if card.is_face_up() {
            CardView::Visible {
                rank: card.rank,
                suit: card.suit,
            }
        } else {
            CardView::Hidden
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PileView {
    pub cards: Vec<CardView>,
}

impl PileView {
    pub fn of(pile: &Pile) -> Self {
        Self {
            cards: pile.iter().map(CardView::of).collect(),
        }
    }

    /// Buried half first, visible run on top.
    pub fn stacked(hidden: &Pile, exposed: &Pile) -> Self {
        Self {
            cards: hidden
                .iter()
                .chain(exposed.iter())
                .map(CardView::of)
                .collect(),
        }
    }
}

/// Read-only snapshot of the whole table, ordered bottom-to-top per pile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableView {
    pub stock: PileView,
    pub waste: PileView,
    pub foundations: Vec<PileView>,
    pub tableaus: Vec<PileView>,
}
