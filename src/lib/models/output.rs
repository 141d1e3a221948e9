use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumProperty, EnumString};

/// Hydraulic and financial quantities derived from a RechargeInput.
/// `simple_payback_yrs` is `f64::INFINITY` when the basin never pays back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RechargeOutput {
    // ------------------- HYDRAULICS ------------------- //
    /// basin surface [ft²]
    pub surface_area_ft2: f64,
    /// infiltration rate [ft day^-1]
    pub infil_ft_per_day: f64,
    /// daily recharge [AF day^-1]
    #[serde(rename = "dailyAF")]
    pub daily_af: f64,
    /// recharge over the season [AF]
    #[serde(rename = "seasonalAF")]
    pub seasonal_af: f64,
    /// rough excavation volume [yd³]
    pub excavation_yd3: f64,
    /// average daily volume [ft³ day^-1]
    pub daily_cubic_ft: f64,
    /// average flow [ft³ s^-1]
    pub cfs: f64,
    /// average flow [gal min^-1]
    pub gpm: f64,

    // ------------------- ECONOMICS ------------------- //
    /// one-time construction cost [$]
    pub capex: f64,
    /// annual revenue from credits [$ year^-1]
    pub revenue: f64,
    /// annual operation and maintenance [$ year^-1]
    pub om: f64,
    /// annual pumping cost [$ year^-1]
    pub pumping_cost: f64,
    /// om + pumping [$ year^-1]
    pub total_annual_cost: f64,
    /// revenue - total annual cost [$ year^-1]
    pub net_annual: f64,
    /// capex / net annual [years], infinite if net annual <= 0
    pub simple_payback_yrs: f64,
}

/// Payback period as seen by presentation code
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    Years(f64),
    Unbounded,
}

impl RechargeOutput {
    pub fn has_payback(&self) -> bool {
        self.simple_payback_yrs.is_finite()
    }

    pub fn payback(&self) -> Payback {
        if self.has_payback() {
            Payback::Years(self.simple_payback_yrs)
        } else {
            Payback::Unbounded
        }
    }

    pub fn get(&self, variable: &OutputVariableName) -> f64 {
        use OutputVariableName::*;
        match variable {
            surfaceAreaFt2 => self.surface_area_ft2,
            infilFtPerDay => self.infil_ft_per_day,
            dailyAF => self.daily_af,
            seasonalAF => self.seasonal_af,
            excavationYd3 => self.excavation_yd3,
            dailyCubicFt => self.daily_cubic_ft,
            cfs => self.cfs,
            gpm => self.gpm,
            capex => self.capex,
            revenue => self.revenue,
            om => self.om,
            pumpingCost => self.pumping_cost,
            totalAnnualCost => self.total_annual_cost,
            netAnnual => self.net_annual,
            simplePaybackYrs => self.simple_payback_yrs,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumIter,
    EnumProperty,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputVariableName {
    /// Basin surface area
    #[strum(props(long_name = "Surface area", units = "ft²"))]
    surfaceAreaFt2,
    /// Infiltration rate in feet
    #[strum(props(long_name = "Infiltration rate", units = "ft/day"))]
    infilFtPerDay,
    /// Daily recharge
    #[strum(props(long_name = "Daily recharge", units = "AF/day"))]
    dailyAF,
    /// Seasonal recharge
    #[strum(props(long_name = "Seasonal recharge", units = "AF/season"))]
    seasonalAF,
    /// Rough excavation
    #[strum(props(long_name = "Rough excavation", units = "yd³"))]
    excavationYd3,
    /// Average daily volume
    #[strum(props(long_name = "Daily volume", units = "ft³/day"))]
    dailyCubicFt,
    /// Average flow
    #[strum(props(long_name = "Average flow", units = "cfs"))]
    cfs,
    /// Average flow in gallons
    #[strum(props(long_name = "Average flow", units = "gpm"))]
    gpm,
    /// Capital expenditure
    #[strum(props(long_name = "CAPEX (one-time)", units = "$"))]
    capex,
    /// Annual revenue
    #[strum(props(long_name = "Annual revenue (credits)", units = "$"))]
    revenue,
    /// Annual O&M
    #[strum(props(long_name = "Annual O&M", units = "$"))]
    om,
    /// Annual pumping cost
    #[strum(props(long_name = "Annual pumping cost", units = "$"))]
    pumpingCost,
    /// Total annual cost
    #[strum(props(long_name = "Total annual cost", units = "$"))]
    totalAnnualCost,
    /// Net annual cash flow
    #[strum(props(long_name = "Net annual cash flow", units = "$"))]
    netAnnual,
    /// Simple payback
    #[strum(props(long_name = "Simple payback", units = "years"))]
    simplePaybackYrs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::recharge::functions::compute;
    use crate::models::input::RechargeInput;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn serialized_keys_match_variable_names() {
        let output = compute(&RechargeInput::baseline());
        let json = serde_json::to_value(output).expect("should serialize");
        let object = json.as_object().expect("should be an object");
        for variable in OutputVariableName::iter() {
            let value = object
                .get(&variable.to_string())
                .unwrap_or_else(|| panic!("missing key {}", variable));
            assert_eq!(value.as_f64(), Some(output.get(&variable)));
        }
    }

    #[test]
    fn unbounded_payback_serializes_as_null() {
        let output = compute(&RechargeInput::default());
        assert_eq!(output.payback(), Payback::Unbounded);
        let json = serde_json::to_value(output).expect("should serialize");
        assert!(json["simplePaybackYrs"].is_null());
    }

    #[test]
    fn variable_names_parse_case_insensitive() {
        assert_eq!(
            OutputVariableName::from_str("dailyaf").expect("should parse"),
            OutputVariableName::dailyAF
        );
        assert!(OutputVariableName::from_str("ffwi").is_err());
    }
}
