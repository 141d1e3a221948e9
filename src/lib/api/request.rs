use serde_derive::Serialize;
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::helpers::RechargeError;
use crate::models::{
    input::{InputVariableName, RechargeInput},
    output::RechargeOutput,
};
use crate::modules::recharge::{config::ParityFactors, models::evaluate};

use super::store::{Submission, SubmissionStore};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_SERVER_ERROR: u16 = 500;

const SERVER_ERROR_MESSAGE: &str = "Server error";

// A single field of the payload: missing or null fields are 0, numbers and
// numeric strings are accepted, anything else is rejected
fn parse_field(variable: &InputVariableName, value: Option<&Value>) -> Result<f64, RechargeError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(0.0),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or(format!("Field {variable} is not a valid number"))?,
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0.0);
            }
            text.parse::<f64>()
                .map_err(|_| format!("Field {variable} is not a number: '{text}'"))?
        }
        Some(other) => {
            return Err(format!("Field {variable} must be a number, found {other}").into());
        }
    };

    if !number.is_finite() {
        return Err(format!("Field {variable} must be finite").into());
    }
    if number < 0.0 {
        return Err(format!("Field {variable} must not be negative, found {number}").into());
    }
    Ok(number)
}

/// Turn an untyped payload into a typed input, or explain what is wrong with it.
/// Unknown keys (e.g. the selected soil) are ignored.
pub fn parse_submission(payload: &Value) -> Result<RechargeInput, RechargeError> {
    let object = payload
        .as_object()
        .ok_or("Submission must be a JSON object")?;

    let mut input = RechargeInput::default();
    for variable in InputVariableName::iter() {
        let value = object.get(&variable.to_string());
        *input.get_mut(&variable) = parse_field(&variable, value)?;
    }
    Ok(input)
}

pub fn parse_submission_str(body: &str) -> Result<RechargeInput, RechargeError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|err| format!("Malformed JSON payload: {err}"))?;
    parse_submission(&payload)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculateBody {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<RechargeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Status code and JSON body of a calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateResponse {
    pub status: u16,
    pub body: CalculateBody,
}

impl CalculateResponse {
    pub fn success(results: RechargeOutput) -> Self {
        Self {
            status: STATUS_OK,
            body: CalculateBody {
                ok: true,
                results: Some(results),
                error: None,
            },
        }
    }

    pub fn failure(status: u16, error: &str) -> Self {
        Self {
            status,
            body: CalculateBody {
                ok: false,
                results: None,
                error: Some(error.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.body.ok
    }

    pub fn to_json(&self) -> Value {
        // a struct of numbers, options and strings always serializes
        serde_json::to_value(&self.body).unwrap_or(Value::Null)
    }
}

/// Handle a calculation request: validate the payload, store the raw
/// submission, then evaluate it through the parity stage.
/// Storage failures are reported as a generic server error without results.
pub fn handle_calculate(
    body: &str,
    store: &mut dyn SubmissionStore,
    factors: &ParityFactors,
) -> CalculateResponse {
    let input = match parse_submission_str(body) {
        Ok(input) => input,
        Err(err) => return CalculateResponse::failure(STATUS_BAD_REQUEST, &err.to_string()),
    };

    if store.save(&Submission::new(input)).is_err() {
        return CalculateResponse::failure(STATUS_SERVER_ERROR, SERVER_ERROR_MESSAGE);
    }

    CalculateResponse::success(evaluate(&input, factors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::store::MemoryStore;
    use crate::modules::recharge::functions::compute;
    use serde_json::json;

    struct BrokenStore;

    impl SubmissionStore for BrokenStore {
        fn save(&mut self, _submission: &Submission) -> Result<(), RechargeError> {
            Err("storage unavailable".into())
        }
    }

    #[test]
    fn parse_full_payload() {
        let payload = json!({
            "landAcres": 10,
            "infiltrationInPerDay": 2,
            "rechargeDays": 120,
            "avgBasinDepthFt": 4,
            "capexPerAcre": 20000,
            "omPerAcreFoot": 20,
            "waterPricePerAF": 250,
            "pumpingKWhPerAF": 150,
            "electricityPerKWh": 0.18,
            "soilKey": "loam"
        });
        let input = parse_submission(&payload).expect("should parse");
        assert_eq!(input, RechargeInput::baseline());
    }

    #[test]
    fn missing_and_null_fields_are_zero() {
        let input = parse_submission(&json!({"landAcres": 5, "rechargeDays": null}))
            .expect("should parse");
        assert_eq!(input.land_acres, 5.0);
        assert_eq!(input.recharge_days, 0.0);
        assert_eq!(input.capex_per_acre, 0.0);

        let input = parse_submission(&json!({})).expect("should parse");
        assert_eq!(input, RechargeInput::default());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let input = parse_submission(&json!({"landAcres": " 12.5 ", "rechargeDays": ""}))
            .expect("should parse");
        assert_eq!(input.land_acres, 12.5);
        assert_eq!(input.recharge_days, 0.0);
    }

    #[test]
    fn invalid_fields_are_named() {
        let err = parse_submission(&json!({"landAcres": "ten"})).expect_err("should fail");
        assert!(err.to_string().contains("landAcres"));

        let err = parse_submission(&json!({"rechargeDays": -3})).expect_err("should fail");
        assert!(err.to_string().contains("rechargeDays"));

        let err = parse_submission(&json!({"waterPricePerAF": true})).expect_err("should fail");
        assert!(err.to_string().contains("waterPricePerAF"));

        let err = parse_submission(&json!({"pumpingKWhPerAF": [1, 2]})).expect_err("should fail");
        assert!(err.to_string().contains("pumpingKWhPerAF"));

        let err = parse_submission(&json!({"capexPerAcre": "inf"})).expect_err("should fail");
        assert!(err.to_string().contains("capexPerAcre"));
    }

    #[test]
    fn payload_must_be_an_object() {
        assert!(parse_submission(&json!([1, 2, 3])).is_err());
        assert!(parse_submission_str("not json").is_err());
    }

    #[test]
    fn calculate_stores_then_answers() {
        let mut store = MemoryStore::new();
        let body = serde_json::to_string(&RechargeInput::baseline()).expect("should serialize");
        let response = handle_calculate(&body, &mut store, &ParityFactors::default());

        assert_eq!(response.status, STATUS_OK);
        assert!(response.is_success());
        assert_eq!(response.body.results, Some(compute(&RechargeInput::baseline())));
        assert_eq!(store.submissions.len(), 1);
        assert_eq!(store.submissions[0].input, RechargeInput::baseline());

        let json = response.to_json();
        assert_eq!(json["ok"], true);
        assert!(json["results"]["dailyAF"].is_number());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn calculate_applies_parity() {
        let mut store = MemoryStore::new();
        let factors = ParityFactors {
            om: 2.0,
            ..ParityFactors::default()
        };
        let body = serde_json::to_string(&RechargeInput::baseline()).expect("should serialize");
        let response = handle_calculate(&body, &mut store, &factors);
        let results = response.body.results.expect("should have results");
        assert_eq!(results.om, compute(&RechargeInput::baseline()).om * 2.0);
    }

    #[test]
    fn invalid_payload_is_not_stored() {
        let mut store = MemoryStore::new();
        let response = handle_calculate(
            r#"{"landAcres": -1}"#,
            &mut store,
            &ParityFactors::default(),
        );
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert!(!response.is_success());
        assert!(response.body.results.is_none());
        assert!(store.submissions.is_empty());
    }

    #[test]
    fn storage_failure_is_a_generic_server_error() {
        let response = handle_calculate(
            r#"{"landAcres": 1}"#,
            &mut BrokenStore,
            &ParityFactors::default(),
        );
        assert_eq!(response.status, STATUS_SERVER_ERROR);
        assert_eq!(response.body.error.as_deref(), Some("Server error"));
        assert!(response.body.results.is_none());

        let json = response.to_json();
        assert_eq!(json["ok"], false);
        assert!(json.get("results").is_none());
    }
}
