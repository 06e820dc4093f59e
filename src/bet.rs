//! Bet-size choices and the game phase that gates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two size bets offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSize {
    Big,
    Small,
}

impl BetSize {
    /// Render order, left to right.
    pub const ALL: [BetSize; 2] = [BetSize::Big, BetSize::Small];

    /// Key the parent stores as the bet type.
    pub fn internal_key(self) -> &'static str {
        match self {
            BetSize::Big => "big",
            BetSize::Small => "small",
        }
    }

    /// Key the parent uses when displaying the bet.
    pub fn display_key(self) -> &'static str {
        self.internal_key()
    }

    pub fn label(self) -> &'static str {
        match self {
            BetSize::Big => "Big (5-9)",
            BetSize::Small => "Small (0-4)",
        }
    }

    /// The selection reported to the parent when this button is clicked.
    pub fn selection(self) -> BetSelection {
        BetSelection {
            bet_type: self.internal_key().to_string(),
            display_type: self.display_key().to_string(),
            label: self.label().to_string(),
        }
    }
}

impl fmt::Display for BetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A bet chosen by the player, held by the parent component.
///
/// `bet_type` is a plain string because the parent may hold bets from
/// other selectors too; the size selector only ever matches "big" or "small".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetSelection {
    pub bet_type: String,
    pub display_type: String,
    pub label: String,
}

/// Round phase, owned by the parent. Only `Betting` accepts bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Betting,
    Locked,
    Drawing,
    Settled,
}

impl GamePhase {
    pub fn accepts_bets(self) -> bool {
        self == GamePhase::Betting
    }
}

/// Render state of a single size button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeButtonState {
    pub size: BetSize,
    pub selected: bool,
    pub disabled: bool,
}

/// Compute the selected/disabled flags of both size buttons, in render order.
pub fn size_button_states(selected: Option<&BetSelection>, phase: GamePhase) -> [SizeButtonState; 2] {
    let disabled = !phase.accepts_bets();
    BetSize::ALL.map(|size| SizeButtonState {
        size,
        selected: selected.is_some_and(|bet| bet.bet_type == size.internal_key()),
        disabled,
    })
}
