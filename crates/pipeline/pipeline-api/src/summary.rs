//! Executive summary

use std::fmt;

use sales_spi::RankedEntry;
use serde::Serialize;

/// Headline figures of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub accepted_rows: usize,
    pub rejected_rows: usize,
    pub ranking_months: u32,
    pub top_country: Option<RankedEntry>,
    pub top_category: Option<RankedEntry>,
    pub forecast_horizon: Option<usize>,
    /// Sum of the point estimates over the horizon
    pub forecast_total: Option<f64>,
    pub forecast_model: Option<String>,
    pub anomaly_count: Option<usize>,
    pub anomaly_threshold: Option<f64>,
    /// `"<stage>: <error>"` for each stage that failed
    pub stage_errors: Vec<String>,
}

impl fmt::Display for ExecutiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Retail BI Executive Summary")?;
        writeln!(f, "===========================")?;
        writeln!(
            f,
            "- Rows: {} accepted, {} rejected",
            self.accepted_rows, self.rejected_rows
        )?;
        if let Some(top) = &self.top_country {
            writeln!(
                f,
                "- Top country (last {} months): {} ({})",
                self.ranking_months,
                top.name,
                format_amount(top.revenue)
            )?;
        }
        if let Some(top) = &self.top_category {
            writeln!(
                f,
                "- Top category (last {} months): {} ({})",
                self.ranking_months,
                top.name,
                format_amount(top.revenue)
            )?;
        }
        if let (Some(total), Some(horizon)) = (self.forecast_total, self.forecast_horizon) {
            let model = self.forecast_model.as_deref().unwrap_or("unknown model");
            writeln!(
                f,
                "- Next {} months forecast: {} (point total, {})",
                horizon,
                format_amount(total),
                model
            )?;
        }
        if let (Some(count), Some(threshold)) = (self.anomaly_count, self.anomaly_threshold) {
            writeln!(
                f,
                "- Anomalies detected: {} month(s) with |z| > {}",
                count, threshold
            )?;
        }
        for error in &self.stage_errors {
            writeln!(f, "- Unavailable: {}", error)?;
        }
        writeln!(f)?;
        writeln!(f, "Implications:")?;
        writeln!(
            f,
            "- Prioritise top markets and categories; investigate anomaly months for promotion or stock-out effects."
        )?;
        writeln!(
            f,
            "- Use the forecast bands to set buy plans and cash buffers; alert when actuals leave the band."
        )
    }
}

/// Round to a whole number with thousands separators, e.g. `12,346`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234567.8), "1,234,568");
        assert_eq!(format_amount(-4321.0), "-4,321");
    }

    #[test]
    fn test_display_renders_available_sections() {
        let summary = ExecutiveSummary {
            accepted_rows: 12,
            rejected_rows: 1,
            ranking_months: 3,
            top_country: Some(RankedEntry::new("United States", 1000.0)),
            top_category: Some(RankedEntry::new("Electronics", 1080.0)),
            forecast_horizon: Some(3),
            forecast_total: Some(2400.0),
            forecast_model: Some("Naive".to_string()),
            anomaly_count: Some(0),
            anomaly_threshold: Some(3.0),
            stage_errors: vec![],
        };
        let text = summary.to_string();
        assert!(text.starts_with("Retail BI Executive Summary\n"));
        assert!(text.contains("- Rows: 12 accepted, 1 rejected"));
        assert!(text.contains("- Top country (last 3 months): United States (1,000)"));
        assert!(text.contains("- Top category (last 3 months): Electronics (1,080)"));
        assert!(text.contains("- Next 3 months forecast: 2,400 (point total, Naive)"));
        assert!(text.contains("- Anomalies detected: 0 month(s) with |z| > 3"));
        assert!(!text.contains("Unavailable"));
    }

    #[test]
    fn test_display_lists_stage_errors() {
        let summary = ExecutiveSummary {
            accepted_rows: 3,
            rejected_rows: 0,
            ranking_months: 3,
            top_country: None,
            top_category: None,
            forecast_horizon: None,
            forecast_total: None,
            forecast_model: None,
            anomaly_count: None,
            anomaly_threshold: None,
            stage_errors: vec!["forecast: Insufficient data".to_string()],
        };
        let text = summary.to_string();
        assert!(text.contains("- Unavailable: forecast: Insufficient data"));
        assert!(!text.contains("Next"));
    }
}
