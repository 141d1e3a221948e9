use std::fs::File;
use std::io::{self, BufWriter, Write};

use itertools::izip;
use recharge::api::request::CalculateResponse;
use recharge::helpers::RechargeError;
use recharge::models::{output::RechargeOutput, report::Report};
use serde_json::Value;
use strum_macros::{Display, EnumString};

#[derive(Debug, PartialEq, Eq, Copy, Clone, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "json")]
    Json,
}

/// Writes evaluated submissions to stdout or to a file
pub struct OutputWriter {
    format: OutputFormat,
    currency_digits: usize,
    sink: Box<dyn Write>,
}

impl OutputWriter {
    pub fn new(
        output_path: Option<&str>,
        format: OutputFormat,
        currency_digits: usize,
    ) -> Result<Self, RechargeError> {
        let sink: Box<dyn Write> = match output_path {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|error| format!("error creating {}, {}", path, error))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self::with_sink(sink, format, currency_digits))
    }

    pub fn with_sink(sink: Box<dyn Write>, format: OutputFormat, currency_digits: usize) -> Self {
        Self {
            format,
            currency_digits,
            sink,
        }
    }

    pub fn write_output(
        &mut self,
        indexes: &[usize],
        outputs: &[RechargeOutput],
    ) -> Result<(), RechargeError> {
        let text = match self.format {
            OutputFormat::Text => render_text(indexes, outputs, self.currency_digits),
            OutputFormat::Json => render_json(outputs)?,
        };
        writeln!(self.sink, "{}", text)
            .and_then(|_| self.sink.flush())
            .map_err(|error| format!("error writing output: {}", error))?;
        Ok(())
    }
}

fn render_text(indexes: &[usize], outputs: &[RechargeOutput], currency_digits: usize) -> String {
    izip!(indexes.iter(), outputs.iter())
        .map(|(index, output)| {
            Report::new(&format!("Submission #{}", index + 1), output, currency_digits).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_json(outputs: &[RechargeOutput]) -> Result<String, RechargeError> {
    let responses: Vec<Value> = outputs
        .iter()
        .map(|output| CalculateResponse::success(*output).to_json())
        .collect();
    let text = serde_json::to_string_pretty(&responses)
        .map_err(|error| format!("error serializing output: {}", error))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recharge::models::input::RechargeInput;
    use recharge::modules::recharge::functions::compute;
    use std::str::FromStr;

    #[test]
    fn format_names() {
        assert_eq!(OutputFormat::from_str("JSON").ok(), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text").ok(), Some(OutputFormat::Text));
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn text_has_one_report_per_submission() {
        let outputs = vec![
            compute(&RechargeInput::baseline()),
            compute(&RechargeInput::default()),
        ];
        let text = render_text(&[0, 4], &outputs, 0);
        assert!(text.starts_with("Submission #1\n"));
        assert!(text.contains("\n\nSubmission #5\n"));
    }

    #[test]
    fn json_wraps_results() {
        let outputs = vec![compute(&RechargeInput::default())];
        let text = render_json(&outputs).expect("should render");
        let value: Value = serde_json::from_str(&text).expect("should parse");
        assert_eq!(value[0]["ok"], true);
        assert!(value[0]["results"]["simplePaybackYrs"].is_null());
    }
}
