use crate::{Card, Pile, PileError, PilePair, Rank, RngState, Suit, TableConfig};

pub const DECK_SIZE: usize = 52;

/// The stock (face-down draw pile) and waste (face-up discard) plus the
/// bounded redeal counter.
#[derive(Debug, Clone)]
pub struct Deck {
    pub(crate) pair: PilePair,
    redeals_used: u32,
    max_redeals: u32,
}

impl Deck {
    /// A full 52-card stock in canonical order, waste empty.
    pub fn standard52(config: &TableConfig) -> Self {
        let mut pair = PilePair::new(DECK_SIZE, DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                // limits allow the whole deck; a put cannot fail here
                let _ = pair.down_mut().put(Card::new(suit, rank));
            }
        }
        Self {
            pair,
            redeals_used: 0,
            max_redeals: config.max_redeals,
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        self.pair.down_mut().shuffle(rng);
    }

    /// Deal one card off the stock (dealing only; bypasses the waste).
    pub fn take_stock(&mut self) -> Result<Card, PileError> {
        self.pair.down_mut().take()
    }

    /// Flip the next stock card onto the waste. Unlike a tableau reveal this
    /// is never gated on the waste being empty.
    pub fn draw_one(&mut self) -> Result<bool, PileError> {
        self.pair.reveal_top()
    }

    /// Recycle the waste into the stock, consuming one unit of the redeal
    /// budget. Returns how many cards were recycled; zero once the budget is
    /// spent or the waste is empty.
    pub fn redeal(&mut self) -> Result<usize, PileError> {
        if !self.can_redeal() || self.pair.up().is_empty() {
            return Ok(0);
        }
        let moved = self.pair.reset()?;
        self.redeals_used += 1;
        Ok(moved)
    }

    pub fn can_redeal(&self) -> bool {
        self.redeals_used < self.max_redeals
    }

    pub fn redeals_left(&self) -> u32 {
        self.max_redeals - self.redeals_used
    }

    pub fn take_waste(&mut self) -> Result<Card, PileError> {
        self.pair.up_mut().take()
    }

    pub fn waste_tail(&self) -> Option<&Card> {
        self.pair.up().peek_tail().ok()
    }

    pub fn stock(&self) -> &Pile {
        self.pair.down()
    }

    pub fn waste(&self) -> &Pile {
        self.pair.up()
    }

    pub fn is_empty(&self) -> bool {
        self.pair.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(max_redeals: u32) -> Deck {
        Deck::standard52(&TableConfig {
            draw_count: 3,
            max_redeals,
        })
    }

    #[test]
    fn standard52_fills_the_stock() {
        let deck = deck(3);
        assert_eq!(deck.stock().len(), 52);
        assert!(deck.waste().is_empty());
        assert!(deck.stock().iter().all(|card| !card.is_face_up()));
    }

    #[test]
    fn drawing_stacks_the_waste_without_gating() {
        let mut deck = deck(3);
        assert!(deck.draw_one().unwrap());
        assert!(deck.draw_one().unwrap());
        assert_eq!(deck.waste().len(), 2);
        assert!(deck.waste().iter().all(|card| card.is_face_up()));
    }

    #[test]
    fn redeal_budget_is_enforced() {
        let mut deck = deck(1);
        while deck.draw_one().unwrap() {}
        assert!(deck.stock().is_empty());

        assert!(deck.can_redeal());
        assert_eq!(deck.redeal().unwrap(), 52);
        assert_eq!(deck.stock().len(), 52);
        assert!(deck.waste().is_empty());

        while deck.draw_one().unwrap() {}
        assert!(!deck.can_redeal());
        assert_eq!(deck.redeal().unwrap(), 0);
        assert_eq!(deck.waste().len(), 52);
    }

    #[test]
    fn redeal_preserves_the_draw_order() {
        let mut deck = deck(2);
        let mut first_pass = Vec::new();
        while deck.draw_one().unwrap() {
            first_pass.push(deck.waste_tail().unwrap().id());
        }
        deck.redeal().unwrap();
        let mut second_pass = Vec::new();
        while deck.draw_one().unwrap() {
            second_pass.push(deck.waste_tail().unwrap().id());
        }
        assert_eq!(first_pass, second_pass);
    }
}
