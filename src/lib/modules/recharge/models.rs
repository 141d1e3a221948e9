use ndarray::{Array1, Zip};

use crate::models::{input::RechargeInput, output::RechargeOutput};

use super::{config::ParityFactors, functions::compute};

/// Parity stage: scale the adjustable fields of a result by `factors`.
/// `ParityFactors::default()` leaves the result untouched.
pub fn adjust(result: &RechargeOutput, factors: &ParityFactors) -> RechargeOutput {
    factors.adjust(result)
}

/// Calculator followed by the parity stage.
/// Callers should use this instead of consuming `compute` directly,
/// so that future parity corrections need no change on their side.
pub fn evaluate(input: &RechargeInput, factors: &ParityFactors) -> RechargeOutput {
    adjust(&compute(input), factors)
}

/// A set of submissions evaluated together
#[derive(Debug)]
pub struct RechargeBatch {
    pub data: Array1<RechargeInput>,
    len: usize,
}

impl RechargeBatch {
    pub fn new(inputs: Vec<RechargeInput>) -> Self {
        let data = Array1::from_vec(inputs);
        let len = data.len();
        Self { data, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluate every submission in parallel, output order follows input order
    pub fn evaluate(&self, factors: &ParityFactors) -> Array1<RechargeOutput> {
        evaluate_batch(&self.data, factors)
    }
}

pub fn evaluate_batch(
    inputs: &Array1<RechargeInput>,
    factors: &ParityFactors,
) -> Array1<RechargeOutput> {
    Zip::from(inputs).par_map_collect(|input| evaluate(input, factors))
}
