use crate::core::season::PositionScore;
use crate::domain::model::ScoreBreakdown;
use crate::utils::error::{BetError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct RaceReport<'a> {
    categories: &'a BTreeMap<String, f64>,
    total: f64,
}

#[derive(Serialize)]
struct SeasonReport<'a> {
    positions: &'a BTreeMap<u32, PositionScore>,
    total: u32,
}

pub fn render_race(breakdown: &ScoreBreakdown, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&RaceReport {
            categories: &breakdown.entries,
            total: breakdown.total(),
        })?),
        OutputFormat::Csv => {
            let rows = breakdown
                .entries
                .iter()
                .map(|(category, points)| (category.clone(), points.to_string()));
            write_csv(["category", "points"], rows, breakdown.total().to_string())
        }
    }
}

pub fn render_season(scores: &BTreeMap<u32, PositionScore>, format: OutputFormat) -> Result<String> {
    let total: u32 = scores.values().map(|s| s.points).sum();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SeasonReport {
            positions: scores,
            total,
        })?),
        OutputFormat::Csv => {
            let rows = scores
                .iter()
                .map(|(position, score)| (position.to_string(), score.points.to_string()));
            write_csv(["position", "points"], rows, total.to_string())
        }
    }
}

fn write_csv<I>(header: [&str; 2], rows: I, total: String) -> Result<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for (key, points) in rows {
        writer.write_record([key.as_str(), points.as_str()])?;
    }
    writer.write_record(["total", total.as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BetError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| BetError::ConfigValidationError {
        field: "output".to_string(),
        message: e.to_string(),
    })
}
