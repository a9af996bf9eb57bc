//! Loading the sales CSV and the pipeline configuration.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use pipeline_facade::{PipelineConfig, RawTable};

use crate::CliResult;

/// Flag values that override the configuration file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub horizon: Option<usize>,
    pub confidence: Option<f64>,
    pub threshold: Option<f64>,
    pub min_history: Option<usize>,
    pub exclude_returns: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(horizon) = self.horizon {
            config.forecast.horizon = horizon;
        }
        if let Some(level) = self.confidence {
            config.forecast.confidence_level = level;
        }
        if let Some(threshold) = self.threshold {
            config.anomaly.threshold = threshold;
        }
        if let Some(min_history) = self.min_history {
            config.forecast.min_history = min_history;
        }
        if self.exclude_returns {
            config.normalizer.exclude_returns = true;
        }
        config
    }
}

/// Load a CSV file into a column-addressable table.
///
/// Every cell is kept as text; parsing happens in the normalizer.
pub fn load_table(path: &Path) -> CliResult<RawTable> {
    let file = File::open(path).map_err(|e| format!("Failed to open {:?}: {}", path, e))?;
    read_table(BufReader::new(file))
}

fn read_table<R: Read>(reader: R) -> CliResult<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = RawTable::new(headers, Vec::new());
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

/// Read a JSON configuration file, or the defaults when no path is given.
///
/// Missing keys fall back to their defaults.
pub fn load_config(path: Option<&Path>) -> CliResult<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let file = File::open(path).map_err(|e| format!("Failed to open {:?}: {}", path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse config {:?}: {}", path, e))
}
