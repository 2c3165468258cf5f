pub mod billing;
pub mod temperature;

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    core::summary::HomeSummary,
    input::{billing::BillingInput, temperature::TemperatureSeries},
    prelude::*,
};

/// Everything needed to estimate a single home.
#[derive(Clone, Debug, Deserialize)]
pub struct EstimationInput {
    pub summary: HomeSummary,

    /// Domestic hot water heated by the heating boiler, if any.
    #[serde(default)]
    pub dhw: Option<DhwInput>,

    pub temperatures: TemperatureSeries,
    pub billing: BillingInput,
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct DhwInput {
    pub number_of_occupants: u32,
    pub estimated_water_heating_efficiency: f64,
    pub stand_by_losses: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    pub fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => bail!("`{}` is neither JSON nor TOML", path.display()),
        }
    }
}

impl EstimationInput {
    pub fn read_from(path: &Path) -> Result<Self> {
        let format = InputFormat::of(path)?;
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::parse(&text, format).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn parse(text: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Ok(serde_json::from_str(text)?),
            InputFormat::Toml => Ok(toml::from_str(text)?),
        }
    }
}
