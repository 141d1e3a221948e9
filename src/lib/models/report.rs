use std::fmt::Display;

use itertools::Itertools;
use strum::EnumProperty;

use crate::helpers::{fmt_currency, fmt_number, fmt_payback};

use super::output::{OutputVariableName, RechargeOutput};

/// How a result variable is rendered in a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportFormat {
    /// plain number with at most n decimals, followed by its units
    Number(usize),
    /// currency with the configured decimals
    Currency,
    /// payback sentence
    Payback,
}

/// Variables of the report, in the order of the assessment sheet
pub const REPORT_LAYOUT: &[(OutputVariableName, ReportFormat)] = &[
    (OutputVariableName::cfs, ReportFormat::Number(3)),
    (OutputVariableName::dailyAF, ReportFormat::Number(3)),
    (OutputVariableName::seasonalAF, ReportFormat::Number(2)),
    (OutputVariableName::excavationYd3, ReportFormat::Number(0)),
    (OutputVariableName::capex, ReportFormat::Currency),
    (OutputVariableName::revenue, ReportFormat::Currency),
    (OutputVariableName::om, ReportFormat::Currency),
    (OutputVariableName::pumpingCost, ReportFormat::Currency),
    (OutputVariableName::totalAnnualCost, ReportFormat::Currency),
    (OutputVariableName::netAnnual, ReportFormat::Currency),
    (OutputVariableName::simplePaybackYrs, ReportFormat::Payback),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

/// Human readable rendering of a result
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn new(title: &str, output: &RechargeOutput, currency_digits: usize) -> Self {
        let rows = REPORT_LAYOUT
            .iter()
            .map(|(variable, format)| {
                let label = variable
                    .get_str("long_name")
                    .unwrap_or_default()
                    .to_string();
                let value = match format {
                    ReportFormat::Number(digits) => format!(
                        "{} {}",
                        fmt_number(output.get(variable), *digits),
                        variable.get_str("units").unwrap_or_default()
                    ),
                    ReportFormat::Currency => {
                        fmt_currency(output.get(variable), currency_digits)
                    }
                    ReportFormat::Payback => fmt_payback(output),
                };
                ReportRow { label, value }
            })
            .collect();

        Self {
            title: title.to_string(),
            rows,
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        let lines = self
            .rows
            .iter()
            .map(|row| {
                let padding = width - row.label.chars().count();
                format!("  {}{}  {}", row.label, " ".repeat(padding), row.value)
            })
            .join("\n");
        write!(f, "{}\n{}", self.title, lines)
    }
}
