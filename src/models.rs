use serde::{Deserialize, Serialize};

/// One mutually exclusive race result and the net result of every bet placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub original_bet: f64,
    pub hedge_bet: f64,
    pub profit: f64, // Total payout minus total stake
}

impl Outcome {
    pub fn new(name: impl Into<String>, original_bet: f64, hedge_bet: f64, profit: f64) -> Self {
        Self {
            name: name.into(),
            original_bet,
            hedge_bet,
            profit,
        }
    }
}

/// Win bet on a single horse at odds-to-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinBet {
    pub horse: u8,
    pub stake: f64,
    pub odds: f64,
}

impl WinBet {
    pub fn new(horse: u8, stake: f64, odds: f64) -> Self {
        Self { horse, stake, odds }
    }

    /// Winnings at odds-to-1, stake not returned
    pub fn winnings(&self) -> f64 {
        self.stake * self.odds
    }
}

/// Horse covered by a Dutch book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DutchSelection {
    pub horse: u8,
    pub odds: f64,
}

/// Exotic bet types, by number of finishing positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExoticKind {
    Exacta,
    Trifecta,
    Superfecta,
}

impl ExoticKind {
    pub fn positions(&self) -> usize {
        match self {
            ExoticKind::Exacta => 2,
            ExoticKind::Trifecta => 3,
            ExoticKind::Superfecta => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExoticKind::Exacta => "exacta",
            ExoticKind::Trifecta => "trifecta",
            ExoticKind::Superfecta => "superfecta",
        }
    }
}

/// Format a finishing order as "3-5" / "2-5-8"
pub fn format_combination(horses: &[u8]) -> String {
    horses
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
