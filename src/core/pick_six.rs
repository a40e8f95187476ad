//! Pick 6 hedging: alive to the final leg, win bets on the main rivals

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validate_not_empty, validate_odds, validate_stake, Result};
use crate::models::{Outcome, WinBet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickSixParams {
    /// Cost of the Pick 6 ticket
    pub investment: f64,
    /// Estimated payout if the ticket hits
    pub potential_payout: f64,
    /// Horse the ticket is alive with in the final leg
    pub alive_horse: u8,
    pub hedges: Vec<WinBet>,
}

impl Default for PickSixParams {
    fn default() -> Self {
        Self {
            investment: 48.0,
            potential_payout: 10_000.0,
            alive_horse: 3,
            hedges: vec![
                WinBet::new(1, 300.0, 4.0),
                WinBet::new(5, 200.0, 7.0),
                WinBet::new(8, 100.0, 15.0),
            ],
        }
    }
}

/// Outcomes of hedging the final leg of a live Pick 6 ticket
pub fn hedge_pick_six(params: &PickSixParams) -> Result<Vec<Outcome>> {
    validate_stake("Pick 6 investment", params.investment)?;
    validate_stake("potential payout", params.potential_payout)?;
    validate_not_empty("final leg hedges", &params.hedges)?;
    for bet in &params.hedges {
        validate_stake(&format!("stake on horse #{}", bet.horse), bet.stake)?;
        validate_odds(&format!("odds on horse #{}", bet.horse), bet.odds)?;
    }

    let investment = params.investment;
    let total_hedge: f64 = params.hedges.iter().map(|b| b.stake).sum();

    debug!(investment, total_hedge, "Pick 6 final leg hedge");

    let mut outcomes = Vec::with_capacity(params.hedges.len() + 2);

    outcomes.push(Outcome::new(
        format!("Horse #{} wins (original Pick 6 hits)", params.alive_horse),
        investment,
        total_hedge,
        params.potential_payout - investment - total_hedge,
    ));

    for bet in &params.hedges {
        outcomes.push(Outcome::new(
            format!("Horse #{} wins at {}-1 odds", bet.horse, bet.odds),
            investment,
            total_hedge,
            bet.winnings() - investment - total_hedge,
        ));
    }

    outcomes.push(Outcome::new(
        "A different horse wins (not covered by any bet)",
        investment,
        total_hedge,
        -(investment + total_hedge),
    ));

    Ok(outcomes)
}
