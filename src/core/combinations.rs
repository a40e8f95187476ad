//! Box and Part-Wheel Combination Counting
//!
//! Exotic bets cover several finishing orders at once:
//!     box:        every ordered arrangement of `positions` horses drawn from a set
//!     part-wheel: a key horse fixed in first, one horse per leg for each following position
//!
//! A combination is only bettable when every position holds a different horse.
//! Both helpers walk the raw combinations and count the collisions they drop,
//! since the overlap between legs decides how many tickets are actually bought.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{validate_not_empty, HedgeError, Result};

/// What an exotic hedge covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// All arrangements of the boxed horses
    Box { horses: Vec<u8> },
    /// `key` to win, then one horse from each leg in order
    PartWheel { key: u8, legs: Vec<Vec<u8>> },
}

/// Enumerated combinations plus the raw combinations dropped for reusing a horse
#[derive(Debug, Clone, PartialEq)]
pub struct CoveredCombinations {
    pub combinations: Vec<Vec<u8>>,
    pub excluded: usize,
}

impl CoveredCombinations {
    pub fn count(&self) -> usize {
        self.combinations.len()
    }

    pub fn contains(&self, selection: &[u8]) -> bool {
        self.combinations.iter().any(|c| c.as_slice() == selection)
    }

    /// Raw combinations before exclusions
    pub fn raw_count(&self) -> usize {
        self.combinations.len() + self.excluded
    }
}

impl Coverage {
    /// Enumerate the combinations covered for a bet with `positions` places
    pub fn enumerate(&self, positions: usize) -> Result<CoveredCombinations> {
        match self {
            Coverage::Box { horses } => box_permutations(horses, positions),
            Coverage::PartWheel { key, legs } => {
                if legs.len() + 1 != positions {
                    return Err(HedgeError::InvalidParameter(format!(
                        "Part-wheel needs {} legs after the key horse, got {}",
                        positions.saturating_sub(1),
                        legs.len()
                    )));
                }
                part_wheel_combinations(*key, legs)
            }
        }
    }
}

/// Ordered arrangements of `positions` horses drawn from `horses`
///
/// # Examples
/// ```
/// use hedgecalc::core::combinations::box_permutations;
/// let covered = box_permutations(&[3, 5, 7], 2).unwrap();
/// assert_eq!(covered.count(), 6);
/// assert!(covered.contains(&[5, 3]));
/// ```
pub fn box_permutations(horses: &[u8], positions: usize) -> Result<CoveredCombinations> {
    validate_not_empty("box horses", horses)?;
    if positions == 0 {
        return Err(HedgeError::InvalidParameter(
            "Box must cover at least one position".to_string(),
        ));
    }

    // Boxing a horse twice buys nothing extra
    let mut seen = HashSet::new();
    let field: Vec<u8> = horses.iter().copied().filter(|h| seen.insert(*h)).collect();

    let legs: Vec<Vec<u8>> = vec![field.clone(); positions];
    let covered = enumerate_legs(&[], &legs);

    debug!(
        horses = field.len(),
        positions,
        valid = covered.count(),
        excluded = covered.excluded,
        "Enumerated box permutations"
    );

    Ok(covered)
}

/// Combinations of a part-wheel with `key` fixed in first place
///
/// # Examples
/// ```
/// use hedgecalc::core::combinations::part_wheel_combinations;
/// let covered = part_wheel_combinations(2, &[vec![5, 8, 9], vec![5, 8, 9, 10]]).unwrap();
/// assert_eq!(covered.count(), 9);
/// assert_eq!(covered.excluded, 3);
/// ```
pub fn part_wheel_combinations(key: u8, legs: &[Vec<u8>]) -> Result<CoveredCombinations> {
    validate_not_empty("wheel legs", legs)?;
    for (i, leg) in legs.iter().enumerate() {
        validate_not_empty(&format!("wheel leg {}", i + 1), leg)?;
    }

    let covered = enumerate_legs(&[key], legs);

    debug!(
        key,
        legs = legs.len(),
        valid = covered.count(),
        excluded = covered.excluded,
        "Enumerated part-wheel combinations"
    );

    Ok(covered)
}

/// Walk every raw combination of `legs` after `prefix`, keeping those without repeats
fn enumerate_legs(prefix: &[u8], legs: &[Vec<u8>]) -> CoveredCombinations {
    let mut raw: Vec<Vec<u8>> = vec![prefix.to_vec()];

    for leg in legs {
        let mut next = Vec::with_capacity(raw.len() * leg.len());
        for partial in &raw {
            for &horse in leg {
                let mut combo = partial.clone();
                combo.push(horse);
                next.push(combo);
            }
        }
        raw = next;
    }

    let mut kept: HashSet<Vec<u8>> = HashSet::with_capacity(raw.len());
    let mut combinations = Vec::new();
    let mut excluded = 0;
    for combo in raw {
        if has_repeat(&combo) {
            excluded += 1;
        } else if kept.insert(combo.clone()) {
            combinations.push(combo);
        }
    }

    CoveredCombinations {
        combinations,
        excluded,
    }
}

/// True when a horse occupies more than one position
pub(crate) fn has_repeat(combo: &[u8]) -> bool {
    combo
        .iter()
        .enumerate()
        .any(|(i, h)| combo[i + 1..].contains(h))
}
