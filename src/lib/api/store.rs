use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

use crate::helpers::RechargeError;
use crate::models::input::RechargeInput;

/// Raw submission as received from a farmer, stored independently of any result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(flatten)]
    pub input: RechargeInput,
    pub date_submitted: DateTime<Utc>,
}

impl Submission {
    pub fn new(input: RechargeInput) -> Self {
        Self::at(input, Utc::now())
    }

    pub fn at(input: RechargeInput, date_submitted: DateTime<Utc>) -> Self {
        Self {
            input,
            date_submitted,
        }
    }
}

/// Persistence of raw submissions
pub trait SubmissionStore: Send {
    fn save(&mut self, submission: &Submission) -> Result<(), RechargeError>;
}

/// Keeps submissions in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub submissions: Vec<Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionStore for MemoryStore {
    fn save(&mut self, submission: &Submission) -> Result<(), RechargeError> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

/// Appends one JSON object per line to a file
#[derive(Debug)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored submission
    pub fn load(&self) -> Result<Vec<Submission>, RechargeError> {
        let file = File::open(&self.path)
            .map_err(|error| format!("Could not open store {}: {}", self.path.display(), error))?;
        let reader = io::BufReader::new(file);

        let mut submissions: Vec<Submission> = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| {
                format!("Error reading store {}: {}", self.path.display(), error)
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let submission = serde_json::from_str(&line).map_err(|error| {
                format!(
                    "Could not parse line {} of store {}: {}",
                    i + 1,
                    self.path.display(),
                    error
                )
            })?;
            submissions.push(submission);
        }
        Ok(submissions)
    }
}

impl SubmissionStore for JsonLinesStore {
    fn save(&mut self, submission: &Submission) -> Result<(), RechargeError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|error| format!("Could not open store {}: {}", self.path.display(), error))?;
        let mut writer = BufWriter::new(file);

        let line = serde_json::to_string(submission)
            .map_err(|error| format!("Could not serialize submission: {}", error))?;
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|error| format!("Error writing to {}: {}", self.path.display(), error))?;
        Ok(())
    }
}
