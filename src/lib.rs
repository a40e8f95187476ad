//! Hedgecalc - Horse racing hedge strategy calculator
//!
//! This library provides:
//! - Profit outcomes for win, lay, each-way, in-running and parlay hedges
//! - Exacta, trifecta and superfecta hedging with box and part-wheel coverage
//! - Pick 6 final-leg hedging and Dutch betting
//! - A table reporter with ROI per scenario
//!
//! # Example
//!
//! ```
//! use hedgecalc::core::exotic::{hedge_exotic, ExoticHedgeParams};
//! use hedgecalc::report::Reporter;
//!
//! let outcomes = hedge_exotic(&ExoticHedgeParams::exacta()).unwrap();
//! let table = Reporter::default()
//!     .render("Exacta Hedging Results", &outcomes)
//!     .unwrap();
//! assert!(table.contains("+$540.00"));
//! ```

pub mod core;
pub mod error;
pub mod models;
pub mod report;
pub mod showcase;

// Re-export commonly used types
pub use error::{HedgeError, Result};
pub use models::{DutchSelection, ExoticKind, Outcome, WinBet};
pub use report::{format_currency, Reporter};
pub use showcase::{all_suites, ShowcaseConfig, Suite};
