use crate::{FacingPolicy, Pile, PileError};

/// A face-up half over a face-down half. Foundations, tableaus and the deck
/// are all views over this pair with their own acceptance rules.
#[derive(Debug, Clone)]
pub struct PilePair {
    up: Pile,
    down: Pile,
}

impl PilePair {
    pub fn new(up_limit: usize, down_limit: usize) -> Self {
        Self {
            up: Pile::new(up_limit, FacingPolicy::ForceUp),
            down: Pile::new(down_limit, FacingPolicy::ForceDown),
        }
    }

    pub fn up(&self) -> &Pile {
        &self.up
    }

    pub fn up_mut(&mut self) -> &mut Pile {
        &mut self.up
    }

    pub fn down(&self) -> &Pile {
        &self.down
    }

    pub fn down_mut(&mut self) -> &mut Pile {
        &mut self.down
    }

    /// Expose the next hidden card, only once the up half has been cleared.
    /// Returns whether anything changed.
    pub fn reveal(&mut self) -> Result<bool, PileError> {
        if !self.up.is_empty() {
            return Ok(false);
        }
        self.reveal_top()
    }

    /// Ungated reveal: the down tail moves onto the up half regardless of
    /// what is already exposed. The deck draws through this.
    pub fn reveal_top(&mut self) -> Result<bool, PileError> {
        if self.down.is_empty() {
            return Ok(false);
        }
        let card = self.down.take()?;
        self.up.put(card)?;
        Ok(true)
    }

    /// Recycle the up half into the down half, tail first, so the next
    /// reveal sequence repeats the original draw order.
    pub fn reset(&mut self) -> Result<usize, PileError> {
        let mut moved = 0;
        while !self.up.is_empty() {
            let card = self.up.take()?;
            self.down.put(card)?;
            moved += 1;
        }
        Ok(moved)
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}
