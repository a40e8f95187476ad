//! Win-bet hedges: covering rival horses, in-running cover and parlay final legs
//!
//! Odds are odds-to-1 and, as in every demonstration here, a winning bet pays
//! `stake * odds` without returning the stake.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validate_not_empty, validate_odds, validate_stake, Result};
use crate::models::{Outcome, WinBet};

/// Win bets on several horses in the same race
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultipleHorsesParams {
    pub primary: WinBet,
    pub hedges: Vec<WinBet>,
}

impl Default for MultipleHorsesParams {
    fn default() -> Self {
        Self {
            primary: WinBet::new(3, 100.0, 4.0),
            hedges: vec![WinBet::new(7, 50.0, 8.0)],
        }
    }
}

/// Live bet on the new leader after the original selection falls behind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InRunningParams {
    pub original_stake: f64,
    pub original_odds: f64,
    pub hedge_stake: f64,
    pub new_leader_odds: f64,
}

impl Default for InRunningParams {
    fn default() -> Self {
        Self {
            original_stake: 100.0,
            original_odds: 1.0, // Even money
            hedge_stake: 30.0,
            new_leader_odds: 1.0,
        }
    }
}

/// Parlay alive to its final leg, with cover spread across the rest of the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParlayParams {
    pub parlay_stake: f64,
    pub potential_payout: f64,
    pub hedge_stake: f64,
    /// Expected return when one of the covering horses wins
    pub hedge_return: f64,
}

impl Default for ParlayParams {
    fn default() -> Self {
        Self {
            parlay_stake: 10.0,
            potential_payout: 1000.0,
            hedge_stake: 200.0,
            hedge_return: 300.0,
        }
    }
}

fn validate_win_bet(bet: &WinBet) -> Result<()> {
    validate_stake(&format!("stake on horse #{}", bet.horse), bet.stake)?;
    validate_odds(&format!("odds on horse #{}", bet.horse), bet.odds)
}

/// Outcomes of backing a primary horse and hedging with win bets on rivals
///
/// One outcome per backed horse, then one for the rest of the field.
///
/// # Examples
/// ```
/// use hedgecalc::core::straight::{hedge_multiple_horses, MultipleHorsesParams};
/// let outcomes = hedge_multiple_horses(&MultipleHorsesParams::default()).unwrap();
/// assert_eq!(outcomes[0].profit, 250.0);  // 100 * 4 - 150
/// assert_eq!(outcomes[2].profit, -150.0);
/// ```
pub fn hedge_multiple_horses(params: &MultipleHorsesParams) -> Result<Vec<Outcome>> {
    validate_win_bet(&params.primary)?;
    validate_not_empty("hedge bets", &params.hedges)?;
    for bet in &params.hedges {
        validate_win_bet(bet)?;
    }

    let original_bet = params.primary.stake;
    let hedge_bet: f64 = params.hedges.iter().map(|b| b.stake).sum();
    let total_investment = original_bet + hedge_bet;

    debug!(original_bet, hedge_bet, "Multiple horses hedge");

    let mut outcomes: Vec<Outcome> = std::iter::once(&params.primary)
        .chain(params.hedges.iter())
        .map(|bet| {
            Outcome::new(
                format!("Horse #{} wins ({}-1 odds)", bet.horse, bet.odds),
                original_bet,
                hedge_bet,
                bet.winnings() - total_investment,
            )
        })
        .collect();

    let none_name = if params.hedges.len() == 1 {
        "Neither horse wins"
    } else {
        "None of the backed horses wins"
    };
    outcomes.push(Outcome::new(
        none_name,
        original_bet,
        hedge_bet,
        -total_investment,
    ));

    Ok(outcomes)
}

/// Outcomes of an in-running hedge on the new leader
pub fn hedge_in_running(params: &InRunningParams) -> Result<Vec<Outcome>> {
    validate_stake("original stake", params.original_stake)?;
    validate_odds("original odds", params.original_odds)?;
    validate_stake("hedge stake", params.hedge_stake)?;
    validate_odds("new leader odds", params.new_leader_odds)?;

    let original = params.original_stake;
    let hedge = params.hedge_stake;

    let original_wins = original * params.original_odds - original - hedge;
    let leader_wins = hedge * params.new_leader_odds - hedge - original;

    Ok(vec![
        Outcome::new("Original horse recovers and wins", original, hedge, original_wins),
        Outcome::new("New leader wins", original, hedge, leader_wins),
    ])
}

/// Outcomes of hedging the final leg of a parlay/accumulator
pub fn hedge_parlay(params: &ParlayParams) -> Result<Vec<Outcome>> {
    validate_stake("parlay stake", params.parlay_stake)?;
    validate_stake("potential payout", params.potential_payout)?;
    validate_stake("hedge stake", params.hedge_stake)?;
    validate_stake("hedge return", params.hedge_return)?;

    let parlay = params.parlay_stake;
    let hedge = params.hedge_stake;

    Ok(vec![
        Outcome::new(
            "Parlay horse wins final leg",
            parlay,
            hedge,
            params.potential_payout - parlay - hedge,
        ),
        Outcome::new(
            "Parlay horse loses, hedge wins",
            parlay,
            hedge,
            params.hedge_return - hedge - parlay,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HedgeError;

    #[test]
    fn test_multiple_horses_default() {
        let outcomes = hedge_multiple_horses(&MultipleHorsesParams::default()).unwrap();
        assert_eq!(outcomes.len(), 3);

        assert_eq!(outcomes[0].name, "Horse #3 wins (4-1 odds)");
        assert!((outcomes[0].profit - 250.0).abs() < 1e-9);

        // 50 * 8 - 150
        assert_eq!(outcomes[1].name, "Horse #7 wins (8-1 odds)");
        assert!((outcomes[1].profit - 250.0).abs() < 1e-9);

        assert_eq!(outcomes[2].name, "Neither horse wins");
        assert!((outcomes[2].profit + 150.0).abs() < 1e-9);

        for o in &outcomes {
            assert_eq!(o.original_bet, 100.0);
            assert_eq!(o.hedge_bet, 50.0);
        }
    }

    #[test]
    fn test_multiple_horses_several_hedges() {
        let params = MultipleHorsesParams {
            primary: WinBet::new(1, 60.0, 2.0),
            hedges: vec![WinBet::new(2, 20.0, 5.0), WinBet::new(3, 10.0, 10.0)],
        };
        let outcomes = hedge_multiple_horses(&params).unwrap();
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].hedge_bet, 30.0);
        assert!((outcomes[0].profit - 30.0).abs() < 1e-9);
        assert!((outcomes[2].profit - 10.0).abs() < 1e-9);
        assert_eq!(outcomes[3].name, "None of the backed horses wins");
        assert!((outcomes[3].profit + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_horses_rejects_bad_input() {
        let mut params = MultipleHorsesParams::default();
        params.primary.odds = 0.0;
        assert!(matches!(
            hedge_multiple_horses(&params),
            Err(HedgeError::InvalidParameter(_))
        ));

        let mut params = MultipleHorsesParams::default();
        params.hedges[0].stake = -5.0;
        assert!(hedge_multiple_horses(&params).is_err());

        let mut params = MultipleHorsesParams::default();
        params.hedges.clear();
        assert!(hedge_multiple_horses(&params).is_err());
    }

    #[test]
    fn test_in_running_default() {
        let outcomes = hedge_in_running(&InRunningParams::default()).unwrap();
        assert_eq!(outcomes.len(), 2);
        // 100 * 1 - 100 - 30
        assert!((outcomes[0].profit + 30.0).abs() < 1e-9);
        // 30 * 1 - 30 - 100
        assert!((outcomes[1].profit + 100.0).abs() < 1e-9);
        assert_eq!(outcomes[1].hedge_bet, 30.0);
    }

    #[test]
    fn test_in_running_rejects_zero_odds() {
        let params = InRunningParams {
            new_leader_odds: 0.0,
            ..Default::default()
        };
        assert!(hedge_in_running(&params).is_err());
    }

    #[test]
    fn test_parlay_default() {
        let outcomes = hedge_parlay(&ParlayParams::default()).unwrap();
        assert!((outcomes[0].profit - 790.0).abs() < 1e-9);
        assert!((outcomes[1].profit - 90.0).abs() < 1e-9);
        assert_eq!(outcomes[0].original_bet, 10.0);
        assert_eq!(outcomes[0].hedge_bet, 200.0);
    }

    #[test]
    fn test_parlay_rejects_negative_stake() {
        let params = ParlayParams {
            hedge_stake: -1.0,
            ..Default::default()
        };
        assert!(hedge_parlay(&params).is_err());
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: ParlayParams = serde_json::from_str(r#"{"hedge_stake": 150.0}"#).unwrap();
        assert_eq!(params.hedge_stake, 150.0);
        assert_eq!(params.potential_payout, 1000.0);
    }
}
