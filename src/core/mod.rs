//! Core business logic modules

pub mod combinations;
pub mod dutch;
pub mod exchange;
pub mod exotic;
pub mod pick_six;
pub mod straight;

// Re-export commonly used types
pub use combinations::{box_permutations, part_wheel_combinations, Coverage, CoveredCombinations};
pub use dutch::{dutch_betting, dutch_stakes, DutchParams};
pub use exchange::{hedge_each_way, hedge_lay_bet, EachWayParams, LayBetParams};
pub use exotic::{hedge_exotic, ExoticHedgeParams};
pub use pick_six::{hedge_pick_six, PickSixParams};
pub use straight::{
    hedge_in_running, hedge_multiple_horses, hedge_parlay, InRunningParams, MultipleHorsesParams,
    ParlayParams,
};
