//! Lay betting and each-way betting

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validate_fraction, validate_odds, validate_stake, Result};
use crate::models::Outcome;

/// Back bet hedged by laying the same horse on an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayBetParams {
    pub stake: f64,
    pub back_odds: f64,
    /// Amount owed on the exchange if the horse wins
    pub lay_liability: f64,
    pub lay_odds: f64,
}

impl Default for LayBetParams {
    fn default() -> Self {
        Self {
            stake: 100.0,
            back_odds: 5.0, // Morning line
            lay_liability: 200.0,
            lay_odds: 2.0, // Current price
        }
    }
}

impl LayBetParams {
    /// Exchange stake actually risked, shown as the hedge bet
    ///
    /// Display only: profits are computed from the liability.
    pub fn exchange_stake(&self) -> f64 {
        self.lay_liability / self.lay_odds
    }
}

/// Each-way bet: equal win and place parts, place part paid at a fraction of the odds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EachWayParams {
    /// Stake per part, so the outlay is twice this
    pub stake: f64,
    pub odds: f64,
    pub place_fraction: f64,
    /// Applied to stakes and profits, e.g. pounds to dollars
    pub currency_multiplier: f64,
}

impl Default for EachWayParams {
    fn default() -> Self {
        Self {
            stake: 10.0,
            odds: 10.0,
            place_fraction: 0.25,
            currency_multiplier: 1.25,
        }
    }
}

/// Outcomes of backing a horse and laying it back at shorter odds
pub fn hedge_lay_bet(params: &LayBetParams) -> Result<Vec<Outcome>> {
    validate_stake("back stake", params.stake)?;
    validate_odds("back odds", params.back_odds)?;
    validate_stake("lay liability", params.lay_liability)?;
    validate_odds("lay odds", params.lay_odds)?;

    let stake = params.stake;
    let exchange_stake = params.exchange_stake();

    let win_profit = stake * params.back_odds - stake - params.lay_liability;
    let lose_profit = -stake + params.lay_liability;

    debug!(exchange_stake, win_profit, lose_profit, "Lay bet hedge");

    Ok(vec![
        Outcome::new("Horse wins", stake, exchange_stake, win_profit),
        Outcome::new("Horse loses", stake, exchange_stake, lose_profit),
    ])
}

/// Outcomes of an each-way bet: wins, places, or finishes out of the places
pub fn hedge_each_way(params: &EachWayParams) -> Result<Vec<Outcome>> {
    validate_stake("each-way stake", params.stake)?;
    validate_odds("each-way odds", params.odds)?;
    validate_fraction("place fraction", params.place_fraction)?;
    validate_odds("currency multiplier", params.currency_multiplier)?;

    let stake = params.stake;
    let outlay = stake * 2.0;

    let win_return = stake * params.odds + stake;
    let place_return = stake * (params.odds * params.place_fraction) + stake;

    let outcomes = [
        ("Horse wins (1st place)", win_return + place_return - outlay),
        ("Horse places (2nd or 3rd)", place_return - outlay),
        ("Horse doesn't place", -outlay),
    ];

    let m = params.currency_multiplier;
    Ok(outcomes
        .into_iter()
        .map(|(name, profit)| Outcome::new(name, outlay * m, 0.0, profit * m))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lay_bet_default() {
        let outcomes = hedge_lay_bet(&LayBetParams::default()).unwrap();
        assert_eq!(outcomes.len(), 2);

        // 100 * 5 - 100 - 200
        assert_eq!(outcomes[0].name, "Horse wins");
        assert!((outcomes[0].profit - 200.0).abs() < 1e-9);

        // -100 + 200
        assert_eq!(outcomes[1].name, "Horse loses");
        assert!((outcomes[1].profit - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lay_bet_exchange_stake_is_display_only() {
        let params = LayBetParams {
            lay_odds: 4.0,
            ..Default::default()
        };
        let outcomes = hedge_lay_bet(&params).unwrap();

        // Hedge column shows liability / lay odds...
        assert!((outcomes[0].hedge_bet - 50.0).abs() < 1e-9);
        // ...but profits still use the full liability
        assert!((outcomes[0].profit - 200.0).abs() < 1e-9);
        assert!((outcomes[1].profit - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_lay_bet_rejects_zero_lay_odds() {
        let params = LayBetParams {
            lay_odds: 0.0,
            ..Default::default()
        };
        assert!(hedge_lay_bet(&params).is_err());
    }

    #[test]
    fn test_each_way_default() {
        let outcomes = hedge_each_way(&EachWayParams::default()).unwrap();
        assert_eq!(outcomes.len(), 3);

        // (110 + 35 - 20) * 1.25
        assert!((outcomes[0].profit - 156.25).abs() < 1e-9);
        // (35 - 20) * 1.25
        assert!((outcomes[1].profit - 18.75).abs() < 1e-9);
        assert!((outcomes[2].profit + 25.0).abs() < 1e-9);

        for o in &outcomes {
            assert!((o.original_bet - 25.0).abs() < 1e-9);
            assert_eq!(o.hedge_bet, 0.0);
        }
    }

    #[test]
    fn test_each_way_without_conversion() {
        let params = EachWayParams {
            currency_multiplier: 1.0,
            place_fraction: 0.2,
            ..Default::default()
        };
        let outcomes = hedge_each_way(&params).unwrap();
        // place part: 10 * 2 + 10 = 30
        assert!((outcomes[1].profit - 10.0).abs() < 1e-9);
        assert!((outcomes[0].original_bet - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_each_way_rejects_bad_fraction() {
        let params = EachWayParams {
            place_fraction: 0.0,
            ..Default::default()
        };
        assert!(hedge_each_way(&params).is_err());
    }
}
