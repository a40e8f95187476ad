//! Outcome Reporting
//!
//! Renders outcome records as a titled grid table with ROI per scenario.

use tabled::{
    settings::{style::HorizontalLine, Style},
    Table, Tabled,
};

use crate::error::{validate_finite, validate_not_empty, Result};
use crate::models::Outcome;

/// Rule width used by the exotic suite
pub const DEFAULT_RULE_WIDTH: usize = 90;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Scenario")]
    scenario: String,
    #[tabled(rename = "Original Bet")]
    original_bet: String,
    #[tabled(rename = "Hedge Bet")]
    hedge_bet: String,
    #[tabled(rename = "Net Profit")]
    net_profit: String,
    #[tabled(rename = "ROI %")]
    roi: String,
}

/// Format amount as currency, positive values signed: `+$5.50`, `$-5.50`, `$0.00`
pub fn format_currency(amount: f64) -> String {
    if amount > 0.0 {
        format!("+${:.2}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_roi(roi: f64) -> String {
    format!("{:.1}%", roi)
}

/// Stake plus hedge
pub fn total_investment(outcome: &Outcome) -> f64 {
    outcome.original_bet + outcome.hedge_bet
}

/// ROI in percent, 0 when nothing was invested
pub fn calculate_roi(profit: f64, total_investment: f64) -> f64 {
    if total_investment > 0.0 {
        profit / total_investment * 100.0
    } else {
        0.0
    }
}

/// Table reporter shared by every strategy
#[derive(Debug, Clone)]
pub struct Reporter {
    pub rule_width: usize,
}

impl Reporter {
    pub fn new(rule_width: usize) -> Self {
        Self { rule_width }
    }

    /// Render the title, rule and table
    pub fn render(&self, title: &str, outcomes: &[Outcome]) -> Result<String> {
        validate_not_empty("scenario list", outcomes)?;

        let mut rows = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            validate_finite("original bet", outcome.original_bet)?;
            validate_finite("hedge bet", outcome.hedge_bet)?;
            validate_finite("profit", outcome.profit)?;

            let roi = calculate_roi(outcome.profit, total_investment(outcome));
            rows.push(ReportRow {
                scenario: outcome.name.clone(),
                original_bet: format!("${:.2}", outcome.original_bet),
                hedge_bet: format!("${:.2}", outcome.hedge_bet),
                net_profit: format_currency(outcome.profit),
                roi: format_roi(roi),
            });
        }

        // Grid style, `=` under the header
        let style = Style::ascii().horizontals([(1, HorizontalLine::full('=', '+', '+', '+'))]);
        let table = Table::new(rows).with(style).to_string();

        Ok(format!(
            "\n{}\n{}\n{}\n\n\n",
            title,
            "=".repeat(self.rule_width),
            table
        ))
    }

    /// Print the report to stdout
    pub fn display(&self, title: &str, outcomes: &[Outcome]) -> Result<()> {
        let report = self.render(title, outcomes)?;
        print!("{}", report);
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_RULE_WIDTH)
    }
}
