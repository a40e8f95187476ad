//! Dutch Betting
//!
//! Stakes are spread over several horses so every covered winner pays the same:
//!     stake_i  = target / odds_i
//!     profit_i = stake_i * odds_i - total_stake = target - total_stake
//!
//! Odds are odds-to-1 and the stake is not returned, so `target` is the
//! winnings each covered horse pays out before the book's cost is taken off.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validate_not_empty, validate_odds, validate_stake, Result};
use crate::models::{DutchSelection, Outcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutchParams {
    pub selections: Vec<DutchSelection>,
    pub target_profit: f64,
}

impl Default for DutchParams {
    fn default() -> Self {
        Self {
            selections: vec![
                DutchSelection { horse: 1, odds: 3.0 },
                DutchSelection { horse: 4, odds: 5.0 },
                DutchSelection { horse: 6, odds: 9.0 },
            ],
            target_profit: 100.0,
        }
    }
}

/// Per-horse stakes, in selection order
///
/// # Examples
/// ```
/// use hedgecalc::core::dutch::{dutch_stakes, DutchParams};
/// let stakes = dutch_stakes(&DutchParams::default()).unwrap();
/// assert!((stakes[1] - 20.0).abs() < 1e-9); // 100 / 5
/// ```
pub fn dutch_stakes(params: &DutchParams) -> Result<Vec<f64>> {
    validate_not_empty("Dutch selections", &params.selections)?;
    validate_stake("target profit", params.target_profit)?;
    for s in &params.selections {
        validate_odds(&format!("odds on horse #{}", s.horse), s.odds)?;
    }

    Ok(params
        .selections
        .iter()
        .map(|s| params.target_profit / s.odds)
        .collect())
}

/// Outcomes of a Dutch book: one per covered horse, then an uncovered winner
pub fn dutch_betting(params: &DutchParams) -> Result<Vec<Outcome>> {
    let stakes = dutch_stakes(params)?;
    let total_stake: f64 = stakes.iter().sum();

    debug!(total_stake, horses = stakes.len(), "Dutch book");

    let mut outcomes: Vec<Outcome> = params
        .selections
        .iter()
        .zip(&stakes)
        .map(|(s, stake)| {
            Outcome::new(
                format!("Horse #{} wins at {}-1 odds", s.horse, s.odds),
                0.0,
                total_stake,
                stake * s.odds - total_stake,
            )
        })
        .collect();

    outcomes.push(Outcome::new(
        "A different horse wins (not covered)",
        0.0,
        total_stake,
        -total_stake,
    ));

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dutch_stakes() {
        let stakes = dutch_stakes(&DutchParams::default()).unwrap();
        assert!((stakes[0] - 100.0 / 3.0).abs() < 1e-9);
        assert!((stakes[1] - 20.0).abs() < 1e-9);
        assert!((stakes[2] - 100.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_dutch_equal_profit_for_every_covered_horse() {
        let params = DutchParams::default();
        let outcomes = dutch_betting(&params).unwrap();
        assert_eq!(outcomes.len(), 4);

        let total = 100.0 / 3.0 + 20.0 + 100.0 / 9.0;
        for o in &outcomes[..3] {
            assert!((o.profit - outcomes[0].profit).abs() < 1e-9);
            assert!((o.profit - (params.target_profit - total)).abs() < 1e-9);
            assert_eq!(o.original_bet, 0.0);
            assert!((o.hedge_bet - total).abs() < 1e-9);
        }

        assert_eq!(outcomes[3].name, "A different horse wins (not covered)");
        assert!((outcomes[3].profit + total).abs() < 1e-9);
    }

    #[test]
    fn test_dutch_names() {
        let outcomes = dutch_betting(&DutchParams::default()).unwrap();
        assert_eq!(outcomes[0].name, "Horse #1 wins at 3-1 odds");
        assert_eq!(outcomes[2].name, "Horse #6 wins at 9-1 odds");
    }

    #[test]
    fn test_dutch_fractional_odds() {
        let params = DutchParams {
            selections: vec![
                DutchSelection { horse: 2, odds: 2.5 },
                DutchSelection { horse: 9, odds: 12.0 },
            ],
            target_profit: 60.0,
        };
        let outcomes = dutch_betting(&params).unwrap();
        // 24 + 5 staked
        assert!((outcomes[0].profit - 31.0).abs() < 1e-9);
        assert!((outcomes[1].profit - 31.0).abs() < 1e-9);
        assert_eq!(outcomes[0].name, "Horse #2 wins at 2.5-1 odds");
    }

    #[test]
    fn test_dutch_rejects_bad_input() {
        let params = DutchParams {
            selections: Vec::new(),
            ..Default::default()
        };
        assert!(dutch_betting(&params).is_err());

        let mut params = DutchParams::default();
        params.selections[0].odds = 0.0;
        assert!(dutch_betting(&params).is_err());
    }
}
