use crate::{
    Deck, Event, EventBus, Foundation, PileError, PileView, Rank, RngState, TableConfig,
    TableView, Tableau,
};
use thiserror::Error;

pub const TOTAL_FOUNDATIONS: usize = 4;
pub const TOTAL_TABLEAUS: usize = 7;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("pile error: {0}")]
    Pile(#[from] PileError),
}

/// One game's worth of piles. Constructed once, dealt once, then mutated
/// only through the five move primitives until no primitive succeeds.
#[derive(Debug)]
pub struct Table {
    pub config: TableConfig,
    foundations: [Foundation; TOTAL_FOUNDATIONS],
    tableaus: [Tableau; TOTAL_TABLEAUS],
    deck: Deck,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            foundations: std::array::from_fn(|_| Foundation::new()),
            tableaus: std::array::from_fn(Tableau::new),
            deck: Deck::standard52(&config),
        }
    }

    /// Shuffle the stock and lay out the seven tableaus: tableau `i` gets
    /// one visible card and `i` hidden ones. 24 cards stay in the stock.
    pub fn deal(&mut self, rng: &mut RngState, events: &mut EventBus) -> Result<(), TableError> {
        self.deck.shuffle(rng);
        for i in 0..TOTAL_TABLEAUS {
            let card = self.deck.take_stock()?;
            self.tableaus[i].place(card)?;
            for _ in 0..i {
                let card = self.deck.take_stock()?;
                self.tableaus[i].bury(card)?;
            }
            events.push(Event::TableauDealt {
                tableau: i,
                hidden: i,
            });
        }
        Ok(())
    }

    /// Expose up to `draw_count` stock cards, or recycle the waste when the
    /// stock is out and budget remains. Reports whether anything changed.
    pub fn draw(&mut self, events: &mut EventBus) -> Result<bool, TableError> {
        if self.deck.stock().is_empty() {
            if self.deck.waste().is_empty() || !self.deck.can_redeal() {
                return Ok(false);
            }
            let recycled = self.deck.redeal()?;
            events.push(Event::Redealt {
                recycled,
                redeals_left: self.deck.redeals_left(),
            });
            return Ok(true);
        }
        let mut drawn = 0;
        for _ in 0..self.config.draw_count {
            if self.deck.draw_one()? {
                drawn += 1;
            } else {
                break;
            }
        }
        if drawn > 0 {
            events.push(Event::Drew { count: drawn });
        }
        Ok(drawn > 0)
    }

    /// Left to right, turn the first uncovered hidden card face-up.
    pub fn flip_tableaus(&mut self, events: &mut EventBus) -> Result<bool, TableError> {
        for (i, tableau) in self.tableaus.iter_mut().enumerate() {
            if tableau.flip_top()? {
                let card = tableau.exposed().peek_tail()?;
                events.push(Event::CardRevealed {
                    tableau: i,
                    rank: card.rank,
                    suit: card.suit,
                });
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Relocate the first movable whole visible run onto the first tableau
    /// that accepts its bottom card. A King run over an empty hidden stack
    /// stays put; moving it frees nothing. Every moved card remembers the
    /// tail it lands on so the run cannot come back to it later.
    pub fn move_whole_tableau_stack(&mut self, events: &mut EventBus) -> Result<bool, TableError> {
        for src in 0..TOTAL_TABLEAUS {
            let head = match self.tableaus[src].exposed().peek_head() {
                Ok(card) => card.clone(),
                Err(_) => continue,
            };
            if head.rank == Rank::King && self.tableaus[src].hidden().is_empty() {
                continue;
            }
            for dst in 0..TOTAL_TABLEAUS {
                if dst == src || !self.tableaus[dst].accepts(&head) {
                    continue;
                }
                let covered = self.tableaus[dst]
                    .exposed()
                    .peek_tail()
                    .ok()
                    .map(|card| card.id());
                let mut run = self.tableaus[src].take_run();
                if let Some(tail) = covered {
                    for card in &mut run {
                        card.record_rest(tail);
                    }
                }
                let count = run.len();
                self.tableaus[dst].place_run(run)?;
                events.push(Event::StackMoved {
                    from: src,
                    to: dst,
                    count,
                });
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Move the first tableau tail card a foundation will take.
    pub fn move_onto_foundation(&mut self, events: &mut EventBus) -> Result<bool, TableError> {
        for ti in 0..TOTAL_TABLEAUS {
            let tail = match self.tableaus[ti].exposed().peek_tail() {
                Ok(card) => card.clone(),
                Err(_) => continue,
            };
            for fi in 0..TOTAL_FOUNDATIONS {
                if self.foundations[fi].accepts(&tail) {
                    let card = self.tableaus[ti].take_exposed()?;
                    self.foundations[fi].push(card)?;
                    events.push(Event::TableauToFoundation {
                        tableau: ti,
                        foundation: fi,
                    });
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Offer the waste tail to every tableau, then every foundation.
    pub fn move_from_deck(&mut self, events: &mut EventBus) -> Result<bool, TableError> {
        let tail = match self.deck.waste_tail() {
            Some(card) => card.clone(),
            None => return Ok(false),
        };
        for ti in 0..TOTAL_TABLEAUS {
            if self.tableaus[ti].accepts(&tail) {
                let card = self.deck.take_waste()?;
                self.tableaus[ti].place(card)?;
                events.push(Event::WasteToTableau { tableau: ti });
                return Ok(true);
            }
        }
        for fi in 0..TOTAL_FOUNDATIONS {
            if self.foundations[fi].accepts(&tail) {
                let card = self.deck.take_waste()?;
                self.foundations[fi].push(card)?;
                events.push(Event::WasteToFoundation { foundation: fi });
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Won iff the deck and every tableau are empty and all four
    /// foundations are complete.
    pub fn is_won(&self) -> bool {
        self.deck.is_empty()
            && self.tableaus.iter().all(Tableau::is_cleared)
            && self.foundations.iter().all(Foundation::is_complete)
    }

    pub fn view(&self) -> TableView {
        TableView {
            stock: PileView::of(self.deck.stock()),
            waste: PileView::of(self.deck.waste()),
            foundations: self
                .foundations
                .iter()
                .map(|f| PileView::of(f.exposed()))
                .collect(),
            tableaus: self
                .tableaus
                .iter()
                .map(|t| PileView::stacked(t.hidden(), t.exposed()))
                .collect(),
        }
    }

    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Tableau] {
        &self.tableaus
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card_count(&self) -> usize {
        self.deck.stock().len()
            + self.deck.waste().len()
            + self
                .tableaus
                .iter()
                .map(|t| t.hidden().len() + t.exposed().len())
                .sum::<usize>()
            + self
                .foundations
                .iter()
                .map(|f| f.exposed().len())
                .sum::<usize>()
    }
}
