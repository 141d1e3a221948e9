// Unit conversion constants, fixed for the whole process

/// square feet in one acre, also cubic feet in one acre-foot [ft² acre^-1]
pub const FT2_PER_ACRE: f64 = 43_560.0;
/// inches per foot [in ft^-1]
pub const IN_PER_FT: f64 = 12.0;
/// seconds per day [s day^-1]
pub const SEC_PER_DAY: f64 = 86_400.0;
/// gallons per minute in one cubic foot per second [gpm cfs^-1]
pub const GPM_PER_CFS: f64 = 448.831;
/// cubic feet per cubic yard [ft³ yd^-3]
pub const FT3_PER_YD3: f64 = 27.0;

/// placeholder shown for values that cannot be formatted
pub const NO_VALUE: &str = "—";
/// message shown instead of a payback period when the basin never pays back
pub const NO_PAYBACK_MESSAGE: &str = "No payback (negative cash flow)";
