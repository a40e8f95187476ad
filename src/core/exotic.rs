//! Exotic Bet Hedging (exacta / trifecta / superfecta)
//!
//! A straight ticket on one finishing order is hedged by a box or part-wheel
//! that buys every covered combination at a fixed cost per combination:
//!     hedge cost    = cost_per_combination * valid combinations
//!     hedge payout  = cost_per_combination * hedge_odds (only one combination can hit)
//!
//! Outcomes reported, in order:
//!     original hits  = straight payout + hedge payout (if covered) - total cost
//!     alternate hits = hedge payout - total cost
//!     nothing hits   = -total cost

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::combinations::{has_repeat, Coverage};
use crate::error::{validate_odds, validate_stake, HedgeError, Result};
use crate::models::{format_combination, ExoticKind, Outcome};

/// Straight exotic ticket plus its covering box or wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExoticHedgeParams {
    pub kind: ExoticKind,
    /// Finishing order of the straight ticket
    pub selection: Vec<u8>,
    pub straight_stake: f64,
    pub straight_odds: f64,
    pub coverage: Coverage,
    pub cost_per_combination: f64,
    pub hedge_odds: f64,
    /// Covered combination named as the example in the alternate outcome.
    /// Defaults to the first covered combination other than the selection.
    #[serde(default)]
    pub alternate: Option<Vec<u8>>,
}

impl ExoticHedgeParams {
    /// $20 exacta 3-5 at 25-1, hedged by a $5 box on 3, 5, 7 paying 18-1
    pub fn exacta() -> Self {
        Self {
            kind: ExoticKind::Exacta,
            selection: vec![3, 5],
            straight_stake: 20.0,
            straight_odds: 25.0,
            coverage: Coverage::Box {
                horses: vec![3, 5, 7],
            },
            cost_per_combination: 5.0,
            hedge_odds: 18.0,
            alternate: Some(vec![5, 3]),
        }
    }

    /// $10 trifecta 2-5-8 at 180-1, hedged by a $1 part-wheel 2 / 5,8,9 / 5,8,9,10 paying 60-1
    pub fn trifecta() -> Self {
        Self {
            kind: ExoticKind::Trifecta,
            selection: vec![2, 5, 8],
            straight_stake: 10.0,
            straight_odds: 180.0,
            coverage: Coverage::PartWheel {
                key: 2,
                legs: vec![vec![5, 8, 9], vec![5, 8, 9, 10]],
            },
            cost_per_combination: 1.0,
            hedge_odds: 60.0,
            alternate: None,
        }
    }

    /// $5 superfecta 4-7-2-9 at 1200-1, hedged by $2 on 4-7-2 with 9 or 11 last, paying 600-1
    pub fn superfecta() -> Self {
        Self {
            kind: ExoticKind::Superfecta,
            selection: vec![4, 7, 2, 9],
            straight_stake: 5.0,
            straight_odds: 1200.0,
            coverage: Coverage::PartWheel {
                key: 4,
                legs: vec![vec![7], vec![2], vec![9, 11]],
            },
            cost_per_combination: 2.0,
            hedge_odds: 600.0,
            alternate: None,
        }
    }
}

/// Outcomes of hedging a straight exotic ticket
///
/// # Examples
/// ```
/// use hedgecalc::core::exotic::{hedge_exotic, ExoticHedgeParams};
/// let outcomes = hedge_exotic(&ExoticHedgeParams::exacta()).unwrap();
/// // 20 * 25 + 5 * 18 - (20 + 30)
/// assert_eq!(outcomes[0].profit, 540.0);
/// assert_eq!(outcomes[0].hedge_bet, 30.0);
/// ```
pub fn hedge_exotic(params: &ExoticHedgeParams) -> Result<Vec<Outcome>> {
    let positions = params.kind.positions();
    let label = params.kind.label();

    validate_stake("straight stake", params.straight_stake)?;
    validate_odds("straight odds", params.straight_odds)?;
    validate_stake("cost per combination", params.cost_per_combination)?;
    validate_odds("hedge odds", params.hedge_odds)?;
    validate_selection(label, &params.selection, positions)?;

    let covered = params.coverage.enumerate(positions)?;
    if covered.count() == 0 {
        return Err(HedgeError::InvalidParameter(format!(
            "{} hedge covers no valid combination",
            label
        )));
    }

    let hedge_total = params.cost_per_combination * covered.count() as f64;
    let total_cost = params.straight_stake + hedge_total;
    let straight_payout = params.straight_stake * params.straight_odds;
    let hedge_payout = params.cost_per_combination * params.hedge_odds;

    debug!(
        kind = label,
        combinations = covered.count(),
        excluded = covered.excluded,
        hedge_total,
        "Exotic hedge cost"
    );

    let original_hit_payout = if covered.contains(&params.selection) {
        straight_payout + hedge_payout
    } else {
        straight_payout
    };

    let alternate = match &params.alternate {
        Some(combo) => {
            if combo == &params.selection || !covered.contains(combo) {
                return Err(HedgeError::InvalidParameter(format!(
                    "Alternate {} {} is not a covered combination",
                    label,
                    format_combination(combo)
                )));
            }
            Some(combo.clone())
        }
        None => covered
            .combinations
            .iter()
            .find(|c| **c != params.selection)
            .cloned(),
    };

    let stake = params.straight_stake;
    let mut outcomes = vec![Outcome::new(
        format!(
            "Horses finish {} (original {} hits)",
            format_combination(&params.selection),
            label
        ),
        stake,
        hedge_total,
        original_hit_payout - total_cost,
    )];

    if let Some(combo) = alternate {
        outcomes.push(Outcome::new(
            alternate_name(&params.coverage, params.kind, &combo),
            stake,
            hedge_total,
            hedge_payout - total_cost,
        ));
    }

    outcomes.push(Outcome::new(
        "No covered combination hits",
        stake,
        hedge_total,
        -total_cost,
    ));

    Ok(outcomes)
}

fn validate_selection(label: &str, selection: &[u8], positions: usize) -> Result<()> {
    if selection.len() != positions {
        return Err(HedgeError::InvalidParameter(format!(
            "A straight {} needs {} horses, got {}",
            label,
            positions,
            selection.len()
        )));
    }
    if has_repeat(selection) {
        return Err(HedgeError::InvalidParameter(format!(
            "Straight {} {} names a horse twice",
            label,
            format_combination(selection)
        )));
    }
    Ok(())
}

fn alternate_name(coverage: &Coverage, kind: ExoticKind, combo: &[u8]) -> String {
    let example = format_combination(combo);
    match (coverage, kind) {
        (Coverage::Box { .. }, ExoticKind::Exacta) => format!(
            "Horses finish in a different order covered by the box (e.g., {})",
            example
        ),
        (Coverage::Box { .. }, _) => format!("Different box combination hits (e.g., {})", example),
        (Coverage::PartWheel { .. }, ExoticKind::Superfecta) => {
            format!("Different box combination hits (e.g., {})", example)
        }
        (Coverage::PartWheel { .. }, _) => {
            format!("Different wheel combination hits (e.g., {})", example)
        }
    }
}
