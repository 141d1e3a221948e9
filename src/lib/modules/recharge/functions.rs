use crate::constants::*;
use crate::models::{input::RechargeInput, output::RechargeOutput};

// ------------------- HYDRAULICS ------------------- //

pub fn surface_area_ft2(
    land_acres: f64, // basin footprint [acres]
) -> f64 {
    land_acres * FT2_PER_ACRE
}

pub fn infil_ft_per_day(
    infiltration_in_per_day: f64, // infiltration rate [in/day]
) -> f64 {
    infiltration_in_per_day / IN_PER_FT
}

// Daily acre-feet = (ft² * ft/day) / ft² per acre
// algebraically land_acres * infil_ft_per_day, kept in this form to follow the spreadsheet
pub fn daily_af(
    surface_area_ft2: f64, // basin surface [ft²]
    infil_ft_per_day: f64, // infiltration rate [ft/day]
) -> f64 {
    (surface_area_ft2 * infil_ft_per_day) / FT2_PER_ACRE
}

pub fn seasonal_af(
    daily_af: f64,      // daily recharge [AF/day]
    recharge_days: f64, // season length [days]
) -> f64 {
    daily_af * recharge_days
}

// Rough earthwork for the average basin depth
pub fn excavation_yd3(
    surface_area_ft2: f64,   // basin surface [ft²]
    avg_basin_depth_ft: f64, // average depth [ft]
) -> f64 {
    (surface_area_ft2 * avg_basin_depth_ft) / FT3_PER_YD3
}

// AF/day -> ft³/day
pub fn daily_cubic_ft(daily_af: f64) -> f64 {
    daily_af * FT2_PER_ACRE
}

// ft³/day -> ft³/s
pub fn cfs(daily_cubic_ft: f64) -> f64 {
    daily_cubic_ft / SEC_PER_DAY
}

// ft³/s -> gal/min, handy for pipe sizing tools
pub fn gpm(cfs: f64) -> f64 {
    cfs * GPM_PER_CFS
}

// ------------------- ECONOMICS ------------------- //

pub fn capex(capex_per_acre: f64, land_acres: f64) -> f64 {
    capex_per_acre * land_acres
}

pub fn revenue(seasonal_af: f64, water_price_per_af: f64) -> f64 {
    seasonal_af * water_price_per_af
}

pub fn om(seasonal_af: f64, om_per_acre_foot: f64) -> f64 {
    seasonal_af * om_per_acre_foot
}

pub fn pumping_cost(
    seasonal_af: f64,         // [AF]
    pumping_kwh_per_af: f64,  // [kWh/AF]
    electricity_per_kwh: f64, // [$/kWh]
) -> f64 {
    seasonal_af * pumping_kwh_per_af * electricity_per_kwh
}

/// Simple payback period [years].
/// A non-positive net annual cash flow never recovers the capital cost,
/// in that case the payback is `f64::INFINITY`.
pub fn simple_payback_yrs(capex: f64, net_annual: f64) -> f64 {
    if net_annual > 0.0 {
        capex / net_annual
    } else {
        f64::INFINITY
    }
}

/// Derive every hydraulic and financial quantity of a basin.
/// Pure: the same input always gives the same output, NaN inputs propagate as NaN.
pub fn compute(input: &RechargeInput) -> RechargeOutput {
    // geometry / hydraulics
    let surface_area_ft2 = surface_area_ft2(input.land_acres);
    let infil_ft_per_day = infil_ft_per_day(input.infiltration_in_per_day);
    let daily_af = daily_af(surface_area_ft2, infil_ft_per_day);
    let seasonal_af = seasonal_af(daily_af, input.recharge_days);
    let excavation_yd3 = excavation_yd3(surface_area_ft2, input.avg_basin_depth_ft);
    let daily_cubic_ft = daily_cubic_ft(daily_af);
    let cfs = cfs(daily_cubic_ft);
    let gpm = gpm(cfs);

    // economics
    let capex = capex(input.capex_per_acre, input.land_acres);
    let revenue = revenue(seasonal_af, input.water_price_per_af);
    let om = om(seasonal_af, input.om_per_acre_foot);
    let pumping_cost = pumping_cost(
        seasonal_af,
        input.pumping_kwh_per_af,
        input.electricity_per_kwh,
    );
    let total_annual_cost = om + pumping_cost;
    let net_annual = revenue - total_annual_cost;
    let simple_payback_yrs = simple_payback_yrs(capex, net_annual);

    RechargeOutput {
        surface_area_ft2,
        infil_ft_per_day,
        daily_af,
        seasonal_af,
        excavation_yd3,
        daily_cubic_ft,
        cfs,
        gpm,
        capex,
        revenue,
        om,
        pumping_cost,
        total_annual_cost,
        net_annual,
        simple_payback_yrs,
    }
}
