use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumProperty, EnumString};

use crate::modules::soil::models::SoilRate;

/// RechargeInput holds the farmer supplied parameters of a single basin.
/// Every value is expected to be non-negative; zero is a valid (degenerate) value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RechargeInput {
    /// basin footprint [acres]
    pub land_acres: f64,
    /// vertical infiltration rate [in day^-1]
    pub infiltration_in_per_day: f64,
    /// length of the recharge season [days]
    pub recharge_days: f64,
    /// average excavation depth [ft]
    pub avg_basin_depth_ft: f64,
    /// one-time construction cost [$ acre^-1]
    pub capex_per_acre: f64,
    /// variable operating cost [$ AF^-1]
    pub om_per_acre_foot: f64,
    /// value credited per recharged acre-foot [$ AF^-1]
    #[serde(rename = "waterPricePerAF")]
    pub water_price_per_af: f64,
    /// pumping energy intensity [kWh AF^-1]
    #[serde(rename = "pumpingKWhPerAF")]
    pub pumping_kwh_per_af: f64,
    /// electricity price [$ kWh^-1]
    #[serde(rename = "electricityPerKWh")]
    pub electricity_per_kwh: f64,
}

impl RechargeInput {
    /// Reference scenario of the assessment spreadsheet
    pub fn baseline() -> Self {
        Self {
            land_acres: 10.0,
            infiltration_in_per_day: 2.0,
            recharge_days: 120.0,
            avg_basin_depth_ft: 4.0,
            capex_per_acre: 20_000.0,
            om_per_acre_foot: 20.0,
            water_price_per_af: 250.0,
            pumping_kwh_per_af: 150.0,
            electricity_per_kwh: 0.18,
        }
    }

    pub fn get(&self, variable: &InputVariableName) -> f64 {
        use InputVariableName::*;
        match variable {
            landAcres => self.land_acres,
            infiltrationInPerDay => self.infiltration_in_per_day,
            rechargeDays => self.recharge_days,
            avgBasinDepthFt => self.avg_basin_depth_ft,
            capexPerAcre => self.capex_per_acre,
            omPerAcreFoot => self.om_per_acre_foot,
            waterPricePerAF => self.water_price_per_af,
            pumpingKWhPerAF => self.pumping_kwh_per_af,
            electricityPerKWh => self.electricity_per_kwh,
        }
    }

    pub fn get_mut(&mut self, variable: &InputVariableName) -> &mut f64 {
        use InputVariableName::*;
        match variable {
            landAcres => &mut self.land_acres,
            infiltrationInPerDay => &mut self.infiltration_in_per_day,
            rechargeDays => &mut self.recharge_days,
            avgBasinDepthFt => &mut self.avg_basin_depth_ft,
            capexPerAcre => &mut self.capex_per_acre,
            omPerAcreFoot => &mut self.om_per_acre_foot,
            waterPricePerAF => &mut self.water_price_per_af,
            pumpingKWhPerAF => &mut self.pumping_kwh_per_af,
            electricityPerKWh => &mut self.electricity_per_kwh,
        }
    }

    /// Copy of the input with the infiltration rate suggested by a soil
    pub fn with_soil(&self, soil: &SoilRate) -> Self {
        Self {
            infiltration_in_per_day: soil.in_per_day,
            ..*self
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
pub enum InputVariableName {
    /// Basin area
    #[strum(props(long_name = "Basin area", units = "acres"))]
    landAcres,
    /// Average infiltration rate
    #[strum(props(long_name = "Average infiltration rate", units = "in/day"))]
    infiltrationInPerDay,
    /// Recharge season
    #[strum(props(long_name = "Recharge season", units = "days"))]
    rechargeDays,
    /// Average basin depth, only used for the rough excavation
    #[strum(props(long_name = "Average basin depth", units = "ft"))]
    avgBasinDepthFt,
    /// Construction cost
    #[strum(props(long_name = "Construction (CAPEX)", units = "$/acre"))]
    capexPerAcre,
    /// Operation and maintenance cost
    #[strum(props(long_name = "O&M cost", units = "$/AF"))]
    omPerAcreFoot,
    /// Water value or recharge credit
    #[strum(props(long_name = "Water value / credit", units = "$/AF"))]
    waterPricePerAF,
    /// Pumping energy use
    #[strum(props(long_name = "Energy use", units = "kWh/AF"))]
    pumpingKWhPerAF,
    /// Electricity price
    #[strum(props(long_name = "Electricity price", units = "$/kWh"))]
    electricityPerKWh,
}
