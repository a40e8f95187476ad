//! Demonstration suites
//!
//! Two fixed walkthroughs: general hedging strategies, then exotic bet hedging.
//! Each section is computed up front so a bad parameter set fails before
//! anything is printed.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{
    dutch_betting, hedge_each_way, hedge_exotic, hedge_in_running, hedge_lay_bet,
    hedge_multiple_horses, hedge_parlay, hedge_pick_six, DutchParams, EachWayParams,
    ExoticHedgeParams, InRunningParams, LayBetParams, MultipleHorsesParams, ParlayParams,
    PickSixParams,
};
use crate::error::Result;
use crate::models::Outcome;
use crate::report::Reporter;

/// Parameters for every demonstration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub multiple_horses: MultipleHorsesParams,
    pub lay_bet: LayBetParams,
    pub each_way: EachWayParams,
    pub in_running: InRunningParams,
    pub parlay: ParlayParams,
    pub exacta: ExoticHedgeParams,
    pub trifecta: ExoticHedgeParams,
    pub pick_six: PickSixParams,
    pub superfecta: ExoticHedgeParams,
    pub dutch: DutchParams,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            multiple_horses: MultipleHorsesParams::default(),
            lay_bet: LayBetParams::default(),
            each_way: EachWayParams::default(),
            in_running: InRunningParams::default(),
            parlay: ParlayParams::default(),
            exacta: ExoticHedgeParams::exacta(),
            trifecta: ExoticHedgeParams::trifecta(),
            pick_six: PickSixParams::default(),
            superfecta: ExoticHedgeParams::superfecta(),
            dutch: DutchParams::default(),
        }
    }
}

/// One numbered section: heading, strategy line and results table
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: &'static str,
    pub strategy: &'static str,
    pub title: &'static str,
    pub outcomes: Vec<Outcome>,
}

impl Section {
    fn new(
        heading: &'static str,
        strategy: &'static str,
        title: &'static str,
        outcomes: Vec<Outcome>,
    ) -> Self {
        Self {
            heading,
            strategy,
            title,
            outcomes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Suite {
    pub banner: &'static str,
    pub banner_rule: usize,
    pub reporter: Reporter,
    pub sections: Vec<Section>,
    pub summary: Vec<&'static str>,
}

impl Suite {
    /// Render the whole suite as printed text, without colour
    pub fn render(&self) -> Result<String> {
        self.compose(false)
    }

    /// Print the suite to stdout, headings highlighted
    pub fn display(&self) -> Result<()> {
        info!(banner = self.banner, sections = self.sections.len(), "Running suite");
        print!("{}", self.compose(true)?);
        Ok(())
    }

    /// Banner, numbered sections and summary; colour only touches the banner and headings
    fn compose(&self, highlight: bool) -> Result<String> {
        let banner = if highlight {
            self.banner.cyan().bold().to_string()
        } else {
            self.banner.to_string()
        };

        let mut out = format!("\n{}\n{}\n", banner, "=".repeat(self.banner_rule));
        for (i, section) in self.sections.iter().enumerate() {
            let heading = format!("{}. {}", i + 1, section.heading);
            let heading = if highlight {
                heading.yellow().bold().to_string()
            } else {
                heading
            };
            out.push_str(&format!("\n{}\n", heading));
            out.push_str(&format!("Strategy: {}\n", section.strategy));
            out.push_str(&self.reporter.render(section.title, &section.outcomes)?);
        }
        for line in &self.summary {
            out.push_str(line);
            out.push('\n');
        }
        Ok(out)
    }
}

/// Multiple horses, lay, each-way, in-running and parlay hedges
pub fn hedging_suite(config: &ShowcaseConfig) -> Result<Suite> {
    let sections = vec![
        Section::new(
            "HEDGING ACROSS MULTIPLE HORSES",
            "Betting on multiple horses in the same race",
            "Multiple Horses Hedge Results",
            hedge_multiple_horses(&config.multiple_horses)?,
        ),
        Section::new(
            "LAY BETTING",
            "Betting against your original selection on a betting exchange",
            "Lay Betting Hedge Results",
            hedge_lay_bet(&config.lay_bet)?,
        ),
        Section::new(
            "EACH-WAY BETTING",
            "Placing one bet to win and another for the horse to place",
            "Each-Way Betting Results",
            hedge_each_way(&config.each_way)?,
        ),
        Section::new(
            "IN-RUNNING/LIVE BETTING",
            "Placing additional bets during the race",
            "In-Running Betting Hedge Results",
            hedge_in_running(&config.in_running)?,
        ),
        Section::new(
            "HEDGING ACROSS MULTIPLE BETS (PARLAY/ACCUMULATOR)",
            "Hedging the final leg of a multi-race bet",
            "Parlay/Accumulator Hedge Results",
            hedge_parlay(&config.parlay)?,
        ),
    ];

    Ok(Suite {
        banner: "HORSE RACING HEDGING STRATEGIES SIMULATOR",
        banner_rule: 42,
        reporter: Reporter::new(80),
        sections,
        summary: vec![
            "\nSummary:",
            "Hedging is a risk management strategy that can protect against losses or secure profits",
            "The optimal hedging strategy depends on your risk tolerance and specific betting situation",
            "While hedging reduces potential maximum returns, it increases your chances of a positive outcome",
        ],
    })
}

/// Exacta, trifecta, Pick 6, superfecta and Dutch betting
pub fn exotic_suite(config: &ShowcaseConfig) -> Result<Suite> {
    let sections = vec![
        Section::new(
            "HEDGING AN EXACTA BET",
            "Using an exacta box to hedge a straight exacta bet",
            "Exacta Hedging Results",
            hedge_exotic(&config.exacta)?,
        ),
        Section::new(
            "HEDGING A TRIFECTA BET",
            "Using a part-wheel to hedge a straight trifecta bet",
            "Trifecta Hedging Results",
            hedge_exotic(&config.trifecta)?,
        ),
        Section::new(
            "HEDGING A PICK 6 BET",
            "Hedging the final leg of a Pick 6 when first 5 legs have hit",
            "Pick 6 Hedging Results",
            hedge_pick_six(&config.pick_six)?,
        ),
        Section::new(
            "HEDGING A SUPERFECTA BET",
            "Hedging a straight superfecta with a smaller superfecta box",
            "Superfecta Hedging Results",
            hedge_exotic(&config.superfecta)?,
        ),
        Section::new(
            "DUTCH BETTING",
            "Betting on multiple horses in proportions that guarantee the same return",
            "Dutch Betting Results",
            dutch_betting(&config.dutch)?,
        ),
    ];

    Ok(Suite {
        banner: "EXOTIC HORSE RACING BET HEDGING STRATEGIES",
        banner_rule: 41,
        reporter: Reporter::new(90),
        sections,
        summary: vec![
            "\nSummary of Exotic Bet Hedging:",
            "1. Exacta hedging: Use box bets to cover multiple finish orders",
            "2. Trifecta hedging: Use part-wheels to protect key horses",
            "3. Pick 6 hedging: Secure profit when alive to final leg",
            "4. Superfecta hedging: Cover additional combinations for 4th position",
            "5. Dutch betting: Distribute stakes to achieve equal return regardless of outcome",
            "\nExotic bet hedging requires careful stake calculation and understanding of bet structures",
            "The optimal strategy balances coverage against cost while managing potential returns",
        ],
    })
}

/// Both suites in running order
pub fn all_suites(config: &ShowcaseConfig) -> Result<Vec<Suite>> {
    Ok(vec![hedging_suite(config)?, exotic_suite(config)?])
}
