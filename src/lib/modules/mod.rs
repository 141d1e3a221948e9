pub mod recharge;
pub mod soil;
