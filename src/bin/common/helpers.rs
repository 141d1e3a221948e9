use log::{info, warn};
use recharge::api::store::{Submission, SubmissionStore};
use recharge::helpers::RechargeError;
use recharge::models::input::RechargeInput;
use recharge::modules::soil::models::{SoilRate, SoilTable};

use super::io::readers::SubmissionRecord;

/// Pick the soil used to override the infiltration rate of every submission:
/// an explicit key wins over a map location.
pub fn select_soil<'a>(
    soils: &'a SoilTable,
    soil_key: Option<&str>,
    location: Option<(f64, f64)>,
) -> Result<Option<&'a SoilRate>, RechargeError> {
    if let Some(key) = soil_key {
        let soil = soils
            .get(key)
            .ok_or(format!("Soil {} not found in the soils table", key))?;
        return Ok(Some(soil));
    }
    if let Some((lat, lon)) = location {
        let soil = soils.suggest(lat, lon);
        if soil.is_none() {
            warn!("No soils configured, cannot suggest a soil for {}, {}", lat, lon);
        }
        return Ok(soil);
    }
    Ok(None)
}

/// Keep the valid submissions, warn about the others
pub fn valid_inputs(records: Vec<SubmissionRecord>) -> (Vec<usize>, Vec<RechargeInput>) {
    let mut indexes = Vec::new();
    let mut inputs = Vec::new();
    for record in records {
        match record.input {
            Ok(input) => {
                indexes.push(record.index);
                inputs.push(input);
            }
            Err(err) => warn!("Skipping submission #{}: {}", record.index + 1, err),
        }
    }
    (indexes, inputs)
}

pub fn apply_soil(inputs: Vec<RechargeInput>, soil: Option<&SoilRate>) -> Vec<RechargeInput> {
    match soil {
        Some(soil) => {
            info!(
                "Using soil {} ({} in/day) for every submission",
                soil.label, soil.in_per_day
            );
            inputs.iter().map(|input| input.with_soil(soil)).collect()
        }
        None => inputs,
    }
}

/// Store every submission, storage problems never stop the evaluation
pub fn store_submissions(store: &mut dyn SubmissionStore, inputs: &[RechargeInput]) -> usize {
    let mut stored = 0;
    for input in inputs {
        match store.save(&Submission::new(*input)) {
            Ok(_) => stored += 1,
            Err(err) => warn!("Error storing submission: {}", err),
        }
    }
    stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use recharge::api::store::MemoryStore;

    fn soils() -> SoilTable {
        SoilTable::new(vec![
            SoilRate {
                key: "sand".into(),
                label: "Sand".into(),
                in_per_day: 6.0,
            },
            SoilRate {
                key: "loam".into(),
                label: "Loam".into(),
                in_per_day: 1.0,
            },
        ])
    }

    #[test]
    fn key_wins_over_location() {
        let soils = soils();
        let soil = select_soil(&soils, Some("loam"), Some((38.0, -121.0))).expect("should select");
        assert_eq!(soil.map(|s| s.key.as_str()), Some("loam"));

        let soil = select_soil(&soils, None, Some((38.0, -121.0))).expect("should select");
        assert_eq!(soil.map(|s| s.key.as_str()), Some("sand"));

        assert!(select_soil(&soils, Some("peat"), None).is_err());
        assert!(select_soil(&soils, None, None).expect("should select").is_none());
    }

    #[test]
    fn invalid_records_are_dropped() {
        let records = vec![
            SubmissionRecord {
                index: 0,
                input: Ok(RechargeInput::baseline()),
            },
            SubmissionRecord {
                index: 1,
                input: Err("bad".into()),
            },
        ];
        let (indexes, inputs) = valid_inputs(records);
        assert_eq!(indexes, vec![0]);
        assert_eq!(inputs, vec![RechargeInput::baseline()]);
    }

    #[test]
    fn soil_overrides_infiltration() {
        let soils = soils();
        let inputs = apply_soil(vec![RechargeInput::baseline()], soils.get("sand"));
        assert_eq!(inputs[0].infiltration_in_per_day, 6.0);
    }

    #[test]
    fn every_input_is_stored() {
        let mut store = MemoryStore::new();
        let stored = store_submissions(&mut store, &[RechargeInput::baseline(); 3]);
        assert_eq!(stored, 3);
        assert_eq!(store.submissions.len(), 3);
    }
}
