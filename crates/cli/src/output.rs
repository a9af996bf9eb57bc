//! CSV and text exports of a pipeline report.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use pipeline_facade::PipelineReport;
use serde::Serialize;

use crate::CliResult;

pub const FACT_SALES: &str = "fact_sales.csv";
pub const DIM_DATE: &str = "dim_date.csv";
pub const TOTAL_TIMESERIES: &str = "total_timeseries.csv";
pub const FORECAST: &str = "forecast.csv";
pub const ANOMALIES: &str = "anomalies.csv";
pub const REJECTIONS: &str = "rejections.csv";
pub const REPORT: &str = "report.txt";

#[derive(Serialize)]
struct FactRow<'a> {
    month: NaiveDate,
    country: &'a str,
    category: &'a str,
    revenue: f64,
    transactions: usize,
}

#[derive(Serialize)]
struct SeriesRow {
    month: NaiveDate,
    revenue: f64,
}

#[derive(Serialize)]
struct ForecastRow<'a> {
    month: NaiveDate,
    forecast: f64,
    lower: f64,
    upper: f64,
    model: &'a str,
}

#[derive(Serialize)]
struct RejectionRow {
    row: usize,
    reason: String,
}

/// Write every export for `report` into `dir`, creating it if needed.
///
/// Files for a stage that produced no output carry only their header row.
pub fn write_outputs(dir: &Path, report: &PipelineReport) -> CliResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create {:?}: {}", dir, e))?;

    let facts = report.breakdown.iter().map(|a| FactRow {
        month: a.month,
        country: &a.country,
        category: &a.category,
        revenue: a.revenue,
        transactions: a.transaction_count,
    });
    write_csv(
        &dir.join(FACT_SALES),
        &["month", "country", "category", "revenue", "transactions"],
        facts,
    )?;

    write_csv(
        &dir.join(DIM_DATE),
        &["date", "year", "month", "year_month"],
        report.date_dimension(),
    )?;

    let series = report.series.points().iter().map(|p| SeriesRow {
        month: p.month,
        revenue: p.revenue,
    });
    write_csv(&dir.join(TOTAL_TIMESERIES), &["month", "revenue"], series)?;

    let forecast_rows: Vec<ForecastRow> = match &report.forecast {
        Ok(forecast) => forecast
            .points
            .iter()
            .map(|p| ForecastRow {
                month: p.month,
                forecast: p.point_estimate,
                lower: p.lower_bound,
                upper: p.upper_bound,
                model: &forecast.model,
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    write_csv(
        &dir.join(FORECAST),
        &["month", "forecast", "lower", "upper", "model"],
        forecast_rows,
    )?;

    let anomaly_rows = match &report.anomalies {
        Ok(anomalies) => anomalies.records.clone(),
        Err(_) => Vec::new(),
    };
    write_csv(
        &dir.join(ANOMALIES),
        &[
            "month",
            "observed_revenue",
            "expected_revenue",
            "residual",
            "z_score",
            "is_anomaly",
        ],
        anomaly_rows,
    )?;

    let rejections = report.rejections.iter().map(|r| RejectionRow {
        row: r.row,
        reason: r.reason.to_string(),
    });
    write_csv(&dir.join(REJECTIONS), &["row", "reason"], rejections)?;

    let report_path = dir.join(REPORT);
    fs::write(&report_path, report.summary().to_string())
        .map_err(|e| format!("Failed to write {:?}: {}", report_path, e))?;

    Ok([
        FACT_SALES,
        DIM_DATE,
        TOTAL_TIMESERIES,
        FORECAST,
        ANOMALIES,
        REJECTIONS,
        REPORT,
    ]
    .iter()
    .map(|name| dir.join(name))
    .collect())
}

/// Header first, then one serialized record per row.
fn write_csv<I, T>(path: &Path, header: &[&str], rows: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let file = File::create(path).map_err(|e| format!("Failed to create {:?}: {}", path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    let fail = |e: csv::Error| format!("Failed to write {:?}: {}", path, e);

    writer.write_record(header).map_err(fail)?;
    for row in rows {
        writer.serialize(row).map_err(fail)?;
    }
    writer
        .flush()
        .map_err(|e| format!("Failed to write {:?}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeline_facade::{PipelineConfig, RawTable, RetailPipeline};
    use tempfile::TempDir;

    fn sales(months: u32) -> RawTable {
        let mut table = RawTable::from_rows(
            &["InvoiceDate", "Quantity", "UnitPrice", "Country", "Description"],
            &[&["2023-01-02", "1", "-4.0", "France", "Notebook"]],
        );
        for m in 1..=months {
            table.push_row(vec![
                format!("2023-{:02}-10", m),
                "2".to_string(),
                format!("{}", 50 + m * 5),
                "germany".to_string(),
                "Laptop Sleeve".to_string(),
            ]);
        }
        table
    }

    fn run(months: u32) -> PipelineReport {
        RetailPipeline::new(PipelineConfig::default())
            .unwrap()
            .run(&sales(months))
            .unwrap()
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_write_outputs_creates_every_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("outputs");

        let written = write_outputs(&out, &run(8)).unwrap();

        assert_eq!(written.len(), 7);
        for path in &written {
            assert!(path.exists(), "missing {:?}", path);
        }
        assert_eq!(lines(&out.join(TOTAL_TIMESERIES)).len(), 9);
        assert_eq!(lines(&out.join(FORECAST)).len(), 4);
        assert_eq!(lines(&out.join(ANOMALIES)).len(), 9);
        assert_eq!(lines(&out.join(DIM_DATE))[1], "2023-01-01,2023,1,2023-01");
    }

    #[test]
    fn test_rows_carry_rejections_and_facts() {
        let dir = TempDir::new().unwrap();

        write_outputs(dir.path(), &run(2)).unwrap();

        let rejections = lines(&dir.path().join(REJECTIONS));
        assert_eq!(rejections[0], "row,reason");
        assert_eq!(rejections.len(), 2);
        assert!(rejections[1].starts_with("1,"));

        let facts = lines(&dir.path().join(FACT_SALES));
        assert_eq!(facts[0], "month,country,category,revenue,transactions");
        assert_eq!(facts[1], "2023-01-01,Germany,Electronics,110.0,1");
    }

    #[test]
    fn test_failed_stages_leave_header_only() {
        let dir = TempDir::new().unwrap();

        write_outputs(dir.path(), &run(2)).unwrap();

        assert_eq!(
            lines(&dir.path().join(FORECAST)),
            vec!["month,forecast,lower,upper,model"]
        );
        assert_eq!(lines(&dir.path().join(ANOMALIES)).len(), 1);
        let report = fs::read_to_string(dir.path().join(REPORT)).unwrap();
        assert!(report.contains("Unavailable: forecast"));
    }
}
