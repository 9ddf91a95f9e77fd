use serde::{Deserialize, Serialize};

/// The five candidate moves, in the fixed order the engine tries them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    FlipTableau,
    MoveStack,
    MoveToFoundation,
    MoveFromWaste,
    Draw,
}

impl AutoAction {
    pub const PRIORITY: [AutoAction; 5] = [
        AutoAction::FlipTableau,
        AutoAction::MoveStack,
        AutoAction::MoveToFoundation,
        AutoAction::MoveFromWaste,
        AutoAction::Draw,
    ];

    pub fn stable_key(self) -> &'static str {
        match self {
            Self::FlipTableau => "flip_tableau",
            Self::MoveStack => "move_stack",
            Self::MoveToFoundation => "move_to_foundation",
            Self::MoveFromWaste => "move_from_waste",
            Self::Draw => "draw",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Self::FlipTableau => "flip",
            Self::MoveStack => "stack",
            Self::MoveToFoundation => "foundation",
            Self::MoveFromWaste => "waste",
            Self::Draw => "draw",
        }
    }
}
