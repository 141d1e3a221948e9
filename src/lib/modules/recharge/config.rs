use serde_derive::{Deserialize, Serialize};

use crate::models::output::{OutputVariableName, RechargeOutput};

fn unit_factor() -> f64 {
    1.0
}

/// Multipliers applied to a computed result to match an external reference workbook.
/// Every factor defaults to 1.0, which makes `adjust` an identity.
/// No correction is known at the moment: keep them at 1.0 unless a
/// divergence from the reference calculation is documented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParityFactors {
    #[serde(rename = "dailyAF", default = "unit_factor")]
    pub daily_af: f64,
    #[serde(rename = "seasonalAF", default = "unit_factor")]
    pub seasonal_af: f64,
    #[serde(default = "unit_factor")]
    pub cfs: f64,
    #[serde(default = "unit_factor")]
    pub revenue: f64,
    #[serde(default = "unit_factor")]
    pub om: f64,
    #[serde(rename = "pumpingCost", default = "unit_factor")]
    pub pumping_cost: f64,
}

impl Default for ParityFactors {
    fn default() -> Self {
        Self {
            daily_af: 1.0,
            seasonal_af: 1.0,
            cfs: 1.0,
            revenue: 1.0,
            om: 1.0,
            pumping_cost: 1.0,
        }
    }
}

impl ParityFactors {
    /// Factor for an adjustable variable, None for variables that pass through
    pub fn factor(&self, variable: &OutputVariableName) -> Option<f64> {
        use OutputVariableName::*;
        match variable {
            dailyAF => Some(self.daily_af),
            seasonalAF => Some(self.seasonal_af),
            cfs => Some(self.cfs),
            revenue => Some(self.revenue),
            om => Some(self.om),
            pumpingCost => Some(self.pumping_cost),
            _ => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == ParityFactors::default()
    }

    /// Scale the adjustable fields of a result, all the others are copied unchanged
    pub fn adjust(&self, result: &RechargeOutput) -> RechargeOutput {
        RechargeOutput {
            daily_af: result.daily_af * self.daily_af,
            seasonal_af: result.seasonal_af * self.seasonal_af,
            cfs: result.cfs * self.cfs,
            revenue: result.revenue * self.revenue,
            om: result.om * self.om,
            pumping_cost: result.pumping_cost * self.pumping_cost,
            ..*result
        }
    }
}
