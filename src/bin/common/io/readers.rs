use std::fs::File;
use std::io::{self, BufRead, Read};
use std::path::Path;

use rayon::prelude::*;
use recharge::api::request::parse_submission;
use recharge::helpers::RechargeError;
use recharge::models::input::RechargeInput;
use serde_json::Value;

/// A submission read from the input file, with its position for diagnostics
pub struct SubmissionRecord {
    pub index: usize,
    pub input: Result<RechargeInput, RechargeError>,
}

/// Read every submission of an input file.
/// `.jsonl` files hold one submission per line, `.json` files hold either
/// a single submission or an array of submissions.
/// Only file level problems are errors; invalid submissions are returned as records.
pub fn read_submissions(input_path: &str) -> Result<Vec<SubmissionRecord>, RechargeError> {
    let path = Path::new(input_path);
    if !path.is_file() {
        return Err(format!("Input path {} is not a file", input_path).into());
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jsonl") => read_json_lines(input_path),
        Some("json") => read_json(input_path),
        _ => Err(format!("Unsupported input file format: {}", input_path).into()),
    }
}

fn read_json(input_path: &str) -> Result<Vec<SubmissionRecord>, RechargeError> {
    let mut file = File::open(input_path)
        .map_err(|err| format!("Cannot open input file {}: {}", input_path, err))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|err| format!("Cannot read input file {}: {}", input_path, err))?;

    let payload: Value = serde_json::from_str(&contents)
        .map_err(|err| format!("Cannot parse input file {}: {}", input_path, err))?;

    let records = match payload {
        Value::Array(items) => items
            .par_iter()
            .enumerate()
            .map(|(index, item)| SubmissionRecord {
                index,
                input: parse_submission(item),
            })
            .collect(),
        other => vec![SubmissionRecord {
            index: 0,
            input: parse_submission(&other),
        }],
    };
    Ok(records)
}

fn read_json_lines(input_path: &str) -> Result<Vec<SubmissionRecord>, RechargeError> {
    let file = File::open(input_path)
        .map_err(|err| format!("Cannot open input file {}: {}", input_path, err))?;
    let reader = io::BufReader::new(file);

    let mut records: Vec<SubmissionRecord> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| format!("error reading line {}: {}", i + 1, err))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            // skip comments and empty lines
            continue;
        }
        let input = serde_json::from_str::<Value>(line)
            .map_err(|err| RechargeError::from(format!("line {}: {}", i + 1, err)))
            .and_then(|payload| parse_submission(&payload));
        // numbered by data line, as array entries are
        let index = records.len();
        records.push(SubmissionRecord { index, input });
    }
    Ok(records)
}
