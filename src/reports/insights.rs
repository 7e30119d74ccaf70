//! Insights Report
//!
//! Plain-language findings for one category selection.

use std::io::Write;

use crate::display::format::{double_separator, format_rate, wrap};
use crate::error::AnalyticsResult;
use crate::models::CategoryFilter;
use crate::services::insights::{CategorySensitivity, ConversionTrap, PricingStrategy};
use crate::services::{AnalyticsService, Insights};

/// Insights Report
#[derive(Debug, Clone)]
pub struct InsightsReport {
    pub filter: CategoryFilter,
    /// `None` when the selection has no chart rows
    pub insights: Option<Insights>,
}

fn strategy_text(strategy: &PricingStrategy, currency: &str) -> String {
    let mut text = format!(
        "The {} bin earns the most revenue ({}).",
        strategy.revenue_leader,
        strategy.revenue.format_grouped(currency)
    );
    if strategy.volume_misleads() {
        text.push_str(&format!(
            " Unit sales peak at {} ({} sales), so volume alone would pick the wrong discount.",
            strategy.volume_leader, strategy.sales
        ));
    } else {
        text.push_str(&format!(
            " It also sells the most units ({} sales).",
            strategy.sales
        ));
    }
    text
}

fn trap_text(trap: &ConversionTrap) -> String {
    if trap.detected() {
        format!(
            "{} converts best ({}) but earns only {:.2} per view, while {} earns {:.2} per view. \
             Chasing conversions gives away margin.",
            trap.conversion_leader,
            format_rate(trap.conversion_rate),
            trap.conversion_leader_rpv,
            trap.rpv_leader,
            trap.rpv
        )
    } else {
        format!(
            "{} converts best ({}) and is also the most efficient per view ({:.2}).",
            trap.conversion_leader,
            format_rate(trap.conversion_rate),
            trap.rpv
        )
    }
}

fn sensitivity_text(sensitivity: &CategorySensitivity) -> String {
    if sensitivity.least_sensitive == sensitivity.most_sensitive {
        return format!(
            "Only {} has traffic at {}, converting at {}.",
            sensitivity.least_sensitive.label(),
            sensitivity.baseline,
            format_rate(sensitivity.least_sensitive_rate)
        );
    }
    format!(
        "At {}, {} converts best ({}) and needs the least discounting. {} converts worst ({}) \
         and is the most price sensitive.",
        sensitivity.baseline,
        sensitivity.least_sensitive.label(),
        format_rate(sensitivity.least_sensitive_rate),
        sensitivity.most_sensitive.label(),
        format_rate(sensitivity.most_sensitive_rate)
    )
}

impl InsightsReport {
    pub fn generate(service: &AnalyticsService<'_>, filter: CategoryFilter) -> Self {
        Self {
            filter,
            insights: service.insights(filter),
        }
    }

    /// Titled paragraphs, in display order
    pub fn sections(&self, currency: &str) -> Vec<(&'static str, String)> {
        let Some(insights) = &self.insights else {
            return Vec::new();
        };

        let mut sections = vec![
            ("Pricing Strategy", strategy_text(&insights.strategy, currency)),
            ("Conversion Trap", trap_text(&insights.trap)),
        ];
        if let Some(sensitivity) = &insights.sensitivity {
            sections.push(("Category Sensitivity", sensitivity_text(sensitivity)));
        }
        sections
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Insights: {}\n", self.filter.selector_label()));
        output.push_str(&double_separator(80));
        output.push('\n');

        let sections = self.sections(currency);
        if sections.is_empty() {
            output.push_str("No data for this selection.\n");
            return output;
        }

        for (title, body) in sections {
            output.push_str(&format!("\n{}\n", title.to_uppercase()));
            for line in wrap(&body, 76) {
                output.push_str(&format!("  {}\n", line));
            }
        }

        output
    }

    /// Export the underlying figures to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Insight", "Subject", "Value"])?;

        if let Some(insights) = &self.insights {
            let strategy = &insights.strategy;
            let trap = &insights.trap;
            csv_writer.write_record([
                "Revenue Leader",
                strategy.revenue_leader.label(),
                format!("{:.2}", strategy.revenue.as_f64()).as_str(),
            ])?;
            csv_writer.write_record([
                "Volume Leader",
                strategy.volume_leader.label(),
                strategy.sales.to_string().as_str(),
            ])?;
            csv_writer.write_record([
                "Conversion Leader",
                trap.conversion_leader.label(),
                format!("{:.1}", trap.conversion_rate).as_str(),
            ])?;
            csv_writer.write_record([
                "Revenue Per View Leader",
                trap.rpv_leader.label(),
                format!("{:.2}", trap.rpv).as_str(),
            ])?;

            if let Some(sensitivity) = &insights.sensitivity {
                for (category, rate) in &sensitivity.rates {
                    csv_writer.write_record([
                        "Full-Price Conversion",
                        category.label(),
                        format!("{:.1}", rate).as_str(),
                    ])?;
                }
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}
