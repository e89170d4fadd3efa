//! Recommend command implementation for the PapssImmo CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use papss_core::{BuyerProfile, Criterion, MemoryTownStore, TownStore, WeightVector};
use papss_scorer::CompositeScorer;
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::report::{OutputFormat, write_report};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the candidate towns for a buyer. Towns whose purchase \
                 price for the requested surface exceeds the budget, or whose \
                 commute exceeds the ceiling, are excluded; the rest are \
                 sorted by a weighted composite score. Unset options fall \
                 back to the default buyer profile and slider weights.",
    about = "Recommend towns for a buyer profile"
)]
#[ortho_config(prefix = "PAPSS")]
pub(crate) struct RecommendArgs {
    /// Maximum total purchase price, in euros.
    #[arg(long, value_name = "euros")]
    #[serde(default)]
    pub(crate) budget: Option<f64>,
    /// Desired living area, in square metres.
    #[arg(long, value_name = "m2")]
    #[serde(default)]
    pub(crate) surface: Option<f64>,
    /// Longest acceptable commute, in minutes.
    #[arg(long, value_name = "minutes")]
    #[serde(default)]
    pub(crate) max_commute: Option<u16>,
    /// Age of the couple.
    #[arg(long, value_name = "years")]
    #[serde(default)]
    pub(crate) couple_age: Option<u8>,
    /// Age of the children.
    #[arg(long, value_name = "years")]
    #[serde(default)]
    pub(crate) children_age: Option<u8>,
    /// Importance of public transport, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_transport: Option<f64>,
    /// Importance of schools, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_schools: Option<f64>,
    /// Importance of safety, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_safety: Option<f64>,
    /// Importance of nature, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_nature: Option<f64>,
    /// Importance of affordability, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_price: Option<f64>,
    /// Importance of dynamism, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_dynamism: Option<f64>,
    /// Importance of quiet surroundings, between 0 and 1.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) weight_noise_sensitivity: Option<f64>,
    /// Set a weight by criterion name, e.g. `noise-sensitivity=0.4`.
    /// Repeatable; applied after the named weight options.
    #[arg(long = "weight", value_name = "criterion=value")]
    #[serde(default)]
    pub(crate) weight: Vec<String>,
    /// Output shape.
    #[arg(long, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Maximum number of towns to emit.
    #[arg(long, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Write the report to this file instead of standard output.
    #[arg(long, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_request(self) -> Result<RecommendationRequest, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendationRequest::try_from(merged)
    }

    const fn weight_overrides(&self) -> [(Criterion, Option<f64>); Criterion::COUNT] {
        [
            (Criterion::Transport, self.weight_transport),
            (Criterion::Schools, self.weight_schools),
            (Criterion::Safety, self.weight_safety),
            (Criterion::Nature, self.weight_nature),
            (Criterion::Price, self.weight_price),
            (Criterion::Dynamism, self.weight_dynamism),
            (Criterion::NoiseSensitivity, self.weight_noise_sensitivity),
        ]
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendationRequest {
    /// Validated buyer profile.
    pub(crate) profile: BuyerProfile,
    /// Validated weights before household adjustment.
    pub(crate) weights: WeightVector,
    /// Output shape.
    pub(crate) format: OutputFormat,
    /// Maximum number of towns to emit.
    pub(crate) limit: usize,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<RecommendArgs> for RecommendationRequest {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let defaults = BuyerProfile::default();
        let profile = BuyerProfile::new(
            args.budget.unwrap_or(defaults.budget()),
            args.surface.unwrap_or(defaults.surface_area()),
            args.max_commute.unwrap_or(defaults.max_commute_minutes()),
            args.couple_age.unwrap_or(defaults.couple_age()),
            args.children_age.unwrap_or(defaults.children_age()),
        )?;
        let weights = resolve_weights(&args)?;
        let format = args.format.unwrap_or_default();
        let limit = match args.limit {
            Some(0) => return Err(CliError::InvalidLimit),
            Some(limit) => limit,
            None => format.default_limit(),
        };
        Ok(Self {
            profile,
            weights,
            format,
            limit,
            output: args.output,
        })
    }
}

/// Start from the slider defaults and apply each supplied weight.
///
/// Named options apply first, then `--weight` pairs in the order given.
fn resolve_weights(args: &RecommendArgs) -> Result<WeightVector, CliError> {
    let named = args.weight_overrides().into_iter().try_fold(
        WeightVector::default(),
        |weights, (criterion, value)| {
            value.map_or(Ok(weights), |weight| {
                weights.try_with_weight(criterion, weight)
            })
        },
    )?;
    args.weight.iter().try_fold(named, |weights, pair| {
        let (criterion, weight) = parse_weight_pair(pair)?;
        Ok(weights.try_with_weight(criterion, weight)?)
    })
}

/// Split a `criterion=value` pair.
fn parse_weight_pair(pair: &str) -> Result<(Criterion, f64), CliError> {
    let malformed = || CliError::InvalidWeightPair {
        pair: pair.to_owned(),
    };
    let (name, value) = pair.split_once('=').ok_or_else(malformed)?;
    let criterion = name.parse::<Criterion>()?;
    let weight = value.trim().parse::<f64>().map_err(|_| malformed())?;
    Ok((criterion, weight))
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let store = MemoryTownStore::demo();
    run_recommend_with(args, &store, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    store: &dyn TownStore,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let request = args.into_request()?;
    let report = CompositeScorer.report(store, &request.profile, &request.weights);
    debug!(
        "ranked {} towns, rejected {}",
        report.ranked.len(),
        report.rejected.len()
    );
    let household = request.profile.household_kind();

    match &request.output {
        Some(path) => {
            let mut file =
                papss_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
            write_report(&mut file, request.format, household, &report, request.limit)
        }
        None => write_report(stdout, request.format, household, &report, request.limit),
    }
}

#[cfg(test)]
pub(crate) fn request_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendationRequest, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendationRequest::try_from(merged)
}
