use crate::{Card, Pile, PileError, PilePair, Rank};

pub const TABLEAU_RUN_SIZE: usize = 13;

/// One of the seven in-play piles: a descending, alternating-color visible
/// run over a buried face-down stack whose depth is fixed at construction.
#[derive(Debug, Clone)]
pub struct Tableau {
    pair: PilePair,
}

impl Tableau {
    pub fn new(depth: usize) -> Self {
        Self {
            pair: PilePair::new(TABLEAU_RUN_SIZE, depth),
        }
    }

    /// Pure legality check: King on empty, otherwise the exposed tail must be
    /// the opposite color, one rank above, and not a tail this card has
    /// already rested on (keeps runs from trading places forever).
    pub fn accepts(&self, card: &Card) -> bool {
        match self.pair.up().peek_tail() {
            Err(_) => card.rank == Rank::King,
            Ok(tail) => {
                card.alternate_suits().contains(&tail.suit)
                    && card.rank.succ() == Some(tail.rank)
                    && !card.has_rested_on(tail.id())
            }
        }
    }

    /// Append one card to the visible run.
    pub fn place(&mut self, card: Card) -> Result<(), PileError> {
        self.pair.up_mut().put(card)
    }

    /// Bury one card in the face-down stack (dealing only).
    pub fn bury(&mut self, card: Card) -> Result<(), PileError> {
        self.pair.down_mut().put(card)
    }

    /// Turn the next hidden card face-up once the visible run is gone.
    pub fn flip_top(&mut self) -> Result<bool, PileError> {
        self.pair.reveal()
    }

    /// Remove the entire visible run, bottom card first.
    pub fn take_run(&mut self) -> Vec<Card> {
        self.pair.up_mut().drain_run()
    }

    /// Lay a run down in order onto the visible half.
    pub fn place_run(&mut self, run: Vec<Card>) -> Result<(), PileError> {
        for card in run {
            self.pair.up_mut().put(card)?;
        }
        Ok(())
    }

    /// Remove the exposed tail card.
    pub fn take_exposed(&mut self) -> Result<Card, PileError> {
        self.pair.up_mut().take()
    }

    pub fn exposed(&self) -> &Pile {
        self.pair.up()
    }

    pub fn hidden(&self) -> &Pile {
        self.pair.down()
    }

    pub fn is_cleared(&self) -> bool {
        self.pair.is_empty()
    }
}
