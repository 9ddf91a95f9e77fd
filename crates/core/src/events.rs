use crate::{Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    TableauDealt {
        tableau: usize,
        hidden: usize,
    },
    CardRevealed {
        tableau: usize,
        rank: Rank,
        suit: Suit,
    },
    StackMoved {
        from: usize,
        to: usize,
        count: usize,
    },
    TableauToFoundation {
        tableau: usize,
        foundation: usize,
    },
    WasteToTableau {
        tableau: usize,
    },
    WasteToFoundation {
        foundation: usize,
    },
    Drew {
        count: usize,
    },
    Redealt {
        recycled: usize,
        redeals_left: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
