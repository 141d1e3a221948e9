use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyDict, PyModule},
    wrap_pyfunction, Bound,
};
use strum::IntoEnumIterator;

use crate::{
    api::request::parse_submission_str,
    models::{
        input::RechargeInput,
        output::{OutputVariableName, RechargeOutput},
    },
    modules::recharge::{config::ParityFactors, functions::compute, models::evaluate},
};

#[pyclass(name = "RechargeInput")]
#[derive(Clone)]
pub struct PyRechargeInput {
    inner: RechargeInput,
}

#[pymethods]
impl PyRechargeInput {
    #[new]
    #[pyo3(
        signature = (
            land_acres=None,
            infiltration_in_per_day=None,
            recharge_days=None,
            avg_basin_depth_ft=None,
            capex_per_acre=None,
            om_per_acre_foot=None,
            water_price_per_af=None,
            pumping_kwh_per_af=None,
            electricity_per_kwh=None
        )
    )]
    #[allow(clippy::too_many_arguments)]
    fn new(
        land_acres: Option<f64>,
        infiltration_in_per_day: Option<f64>,
        recharge_days: Option<f64>,
        avg_basin_depth_ft: Option<f64>,
        capex_per_acre: Option<f64>,
        om_per_acre_foot: Option<f64>,
        water_price_per_af: Option<f64>,
        pumping_kwh_per_af: Option<f64>,
        electricity_per_kwh: Option<f64>,
    ) -> Self {
        let inner = RechargeInput {
            land_acres: land_acres.unwrap_or(0.0),
            infiltration_in_per_day: infiltration_in_per_day.unwrap_or(0.0),
            recharge_days: recharge_days.unwrap_or(0.0),
            avg_basin_depth_ft: avg_basin_depth_ft.unwrap_or(0.0),
            capex_per_acre: capex_per_acre.unwrap_or(0.0),
            om_per_acre_foot: om_per_acre_foot.unwrap_or(0.0),
            water_price_per_af: water_price_per_af.unwrap_or(0.0),
            pumping_kwh_per_af: pumping_kwh_per_af.unwrap_or(0.0),
            electricity_per_kwh: electricity_per_kwh.unwrap_or(0.0),
        };
        Self { inner }
    }

    #[staticmethod]
    fn baseline() -> Self {
        Self {
            inner: RechargeInput::baseline(),
        }
    }

    #[staticmethod]
    fn from_json(body: &str) -> PyResult<Self> {
        let inner =
            parse_submission_str(body).map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self { inner })
    }
}

#[pyclass(name = "ParityFactors")]
#[derive(Clone)]
pub struct PyParityFactors {
    inner: ParityFactors,
}

#[pymethods]
impl PyParityFactors {
    #[new]
    #[pyo3(signature = (daily_af=None, seasonal_af=None, cfs=None, revenue=None, om=None, pumping_cost=None))]
    fn new(
        daily_af: Option<f64>,
        seasonal_af: Option<f64>,
        cfs: Option<f64>,
        revenue: Option<f64>,
        om: Option<f64>,
        pumping_cost: Option<f64>,
    ) -> Self {
        let mut inner = ParityFactors::default();
        if let Some(value) = daily_af {
            inner.daily_af = value;
        }
        if let Some(value) = seasonal_af {
            inner.seasonal_af = value;
        }
        if let Some(value) = cfs {
            inner.cfs = value;
        }
        if let Some(value) = revenue {
            inner.revenue = value;
        }
        if let Some(value) = om {
            inner.om = value;
        }
        if let Some(value) = pumping_cost {
            inner.pumping_cost = value;
        }
        Self { inner }
    }

    fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }
}

#[pyclass(name = "RechargeOutput")]
pub struct PyRechargeOutput {
    inner: RechargeOutput,
}

#[pymethods]
impl PyRechargeOutput {
    fn get(&self, name: &str) -> PyResult<f64> {
        let variable = name
            .parse::<OutputVariableName>()
            .map_err(|_| PyValueError::new_err(format!("Unknown output variable '{name}'")))?;
        Ok(self.inner.get(&variable))
    }

    fn has_payback(&self) -> bool {
        self.inner.has_payback()
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for variable in OutputVariableName::iter() {
            dict.set_item(variable.to_string(), self.inner.get(&variable))?;
        }
        Ok(dict)
    }

    fn available_variables(&self) -> Vec<String> {
        OutputVariableName::iter().map(|v| v.to_string()).collect()
    }
}

#[pyfunction(name = "compute")]
fn py_compute(input: &PyRechargeInput) -> PyRechargeOutput {
    PyRechargeOutput {
        inner: compute(&input.inner),
    }
}

#[pyfunction(name = "evaluate")]
#[pyo3(signature = (input, factors=None))]
fn py_evaluate(input: &PyRechargeInput, factors: Option<&PyParityFactors>) -> PyRechargeOutput {
    let factors = factors.map(|f| f.inner).unwrap_or_default();
    PyRechargeOutput {
        inner: evaluate(&input.inner, &factors),
    }
}

#[pyfunction]
fn available_output_variables() -> Vec<String> {
    OutputVariableName::iter().map(|v| v.to_string()).collect()
}

#[pymodule]
fn recharge_py(py: Python<'_>, module: Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyRechargeInput>()?;
    module.add_class::<PyParityFactors>()?;
    module.add_class::<PyRechargeOutput>()?;

    module.add_function(wrap_pyfunction!(py_compute, py)?)?;
    module.add_function(wrap_pyfunction!(py_evaluate, py)?)?;
    module.add_function(wrap_pyfunction!(available_output_variables, py)?)?;

    module.add("RECHARGE_VERSION", crate::version::FULL_VERSION)?;
    Ok(())
}
