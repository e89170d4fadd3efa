//! Presentation views of a ranking: CSV rows, map markers, radar profiles
//! and the full JSON report.

use std::io::Write;

use clap::ValueEnum;
use papss_core::{HouseholdKind, ScoredTown, WeightVector};
use papss_scorer::ScoreReport;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Rows shown in the ranking table and the CSV export.
pub const TABLE_LIMIT: usize = 10;
/// Towns given a detail card.
pub const DETAIL_LIMIT: usize = 5;
/// Towns plotted on the map.
pub const MAP_LIMIT: usize = 50;

/// Written instead of an empty report.
pub const NO_MATCH_NOTICE: &str =
    "no town matches these criteria; try a larger budget or a longer commute";

/// Shape of the `recommend` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full ranking with household label and applied weights.
    #[default]
    Json,
    /// Ranking table as CSV.
    Csv,
    /// Map markers as JSON.
    Markers,
    /// Radar profiles as JSON.
    Radar,
}

impl OutputFormat {
    /// Number of towns emitted when `--limit` is unset.
    #[must_use]
    pub const fn default_limit(self) -> usize {
        match self {
            Self::Json | Self::Csv => TABLE_LIMIT,
            Self::Markers => MAP_LIMIT,
            Self::Radar => DETAIL_LIMIT,
        }
    }
}

/// One line of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<'a> {
    /// Town name.
    pub name: &'a str,
    /// Composite score.
    pub composite_score: f64,
    /// Price per square metre.
    pub price_per_area: f64,
    /// Commute to the centre, in minutes.
    pub commute_minutes: u16,
    /// Transport rating.
    pub transport: u8,
    /// Schools rating.
    pub schools: u8,
    /// Safety rating.
    pub safety: u8,
}

impl<'a> From<&'a ScoredTown> for TableRow<'a> {
    fn from(scored: &'a ScoredTown) -> Self {
        let town = &scored.town;
        Self {
            name: &town.name,
            composite_score: scored.composite_score,
            price_per_area: town.price_per_area,
            commute_minutes: town.commute_minutes,
            transport: town.amenities.transport.get(),
            schools: town.amenities.schools.get(),
            safety: town.amenities.safety.get(),
        }
    }
}

/// Colour band of a map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTier {
    /// Composite of at least 8.
    High,
    /// Composite of at least 6.
    Medium,
    /// Anything lower.
    Low,
}

impl MarkerTier {
    /// Band for a composite score.
    #[must_use]
    pub const fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::High
        } else if score >= 6.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Hex colour used to draw the marker.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Self::High => "#16a34a",
            Self::Medium => "#f59e0b",
            Self::Low => "#ef4444",
        }
    }
}

/// A town plotted on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker<'a> {
    /// Town name.
    pub name: &'a str,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Composite score.
    pub composite_score: f64,
    /// Price per square metre.
    pub price_per_area: f64,
    /// Commute to the centre, in minutes.
    pub commute_minutes: u16,
    /// Colour band.
    pub tier: MarkerTier,
    /// Hex colour of the band.
    pub colour: &'static str,
    /// Marker radius; grows with the score.
    pub radius: f64,
}

impl<'a> From<&'a ScoredTown> for MapMarker<'a> {
    #[expect(
        clippy::float_arithmetic,
        reason = "marker radius scales with the composite"
    )]
    fn from(scored: &'a ScoredTown) -> Self {
        let town = &scored.town;
        let tier = MarkerTier::from_score(scored.composite_score);
        Self {
            name: &town.name,
            lat: town.latitude(),
            lon: town.longitude(),
            composite_score: scored.composite_score,
            price_per_area: town.price_per_area,
            commute_minutes: town.commute_minutes,
            tier,
            colour: tier.colour(),
            radius: 7.0 + scored.composite_score / 2.0,
        }
    }
}

/// Values drawn on a town's radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProfile<'a> {
    /// Town name.
    pub name: &'a str,
    /// Transport rating.
    pub transport: f64,
    /// Schools rating.
    pub schools: f64,
    /// Safety rating.
    pub safety: f64,
    /// Nature rating.
    pub nature: f64,
    /// Dynamism rating.
    pub dynamism: f64,
    /// Affordability score.
    pub price_score: f64,
    /// Quietness score.
    pub quiet_score: f64,
}

impl<'a> From<&'a ScoredTown> for RadarProfile<'a> {
    fn from(scored: &'a ScoredTown) -> Self {
        let amenities = &scored.town.amenities;
        Self {
            name: &scored.town.name,
            transport: amenities.transport.as_f64(),
            schools: amenities.schools.as_f64(),
            safety: amenities.safety.as_f64(),
            nature: amenities.nature.as_f64(),
            dynamism: amenities.dynamism.as_f64(),
            price_score: scored.price_score,
            quiet_score: scored.quiet_score,
        }
    }
}

/// The `json` output document.
#[derive(Debug, Serialize)]
pub struct RecommendationDocument<'a> {
    /// Household label, e.g. "young couple".
    pub household: &'static str,
    /// Weights after household adjustments.
    pub applied_weights: WeightVector,
    /// Ranked towns, best first.
    pub towns: &'a [ScoredTown],
}

/// Write `report` in `format`, keeping at most `limit` towns.
///
/// An empty ranking writes [`NO_MATCH_NOTICE`] instead.
///
/// # Errors
/// Returns [`CliError`] when serialization or the writer fails.
pub fn write_report(
    writer: &mut dyn Write,
    format: OutputFormat,
    household: HouseholdKind,
    report: &ScoreReport,
    limit: usize,
) -> Result<(), CliError> {
    if report.is_empty() {
        return writeln!(writer, "{NO_MATCH_NOTICE}").map_err(CliError::WriteOutput);
    }
    let towns = report.ranked.get(..limit).unwrap_or(&report.ranked);
    match format {
        OutputFormat::Json => write_json(
            writer,
            &RecommendationDocument {
                household: household.label(),
                applied_weights: report.applied_weights,
                towns,
            },
        ),
        OutputFormat::Csv => write_csv(writer, towns),
        OutputFormat::Markers => {
            let markers: Vec<MapMarker<'_>> = towns.iter().map(MapMarker::from).collect();
            write_json(writer, &markers)
        }
        OutputFormat::Radar => {
            let profiles: Vec<RadarProfile<'_>> = towns.iter().map(RadarProfile::from).collect();
            write_json(writer, &profiles)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(CliError::SerialiseReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

fn write_csv(writer: &mut dyn Write, towns: &[ScoredTown]) -> Result<(), CliError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for scored in towns {
        csv_writer
            .serialize(TableRow::from(scored))
            .map_err(CliError::WriteCsv)?;
    }
    csv_writer.flush().map_err(CliError::WriteOutput)
}
