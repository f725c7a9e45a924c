use crate::error::{LoadError, Result};
use crate::observation::Observation;
use log::debug;
use serde::{Deserialize, Serialize};

/// Wire shape of the published JSON document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    base_temperature: f64,
    monthly_variance: Vec<Observation>,
}

/// The loaded dataset: a base temperature and the monthly observations.
///
/// A `Dataset` is only constructed through [`Dataset::new`], so it always
/// holds at least one observation and every month is within 1..=12.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    base_temperature: f64,
    observations: Vec<Observation>,
    min_year: i32,
    max_year: i32,
}

impl Dataset {
    /// Validate observations and build the dataset.
    pub fn new(base_temperature: f64, observations: Vec<Observation>) -> Result<Dataset> {
        if let Some(bad) = observations.iter().find(|o| !(1..=12).contains(&o.month)) {
            return Err(LoadError::InvalidMonth {
                year: bad.year,
                month: bad.month,
            });
        }
        let min_year = observations.iter().map(|o| o.year).min();
        let max_year = observations.iter().map(|o| o.year).max();
        match (min_year, max_year) {
            (Some(min_year), Some(max_year)) => Ok(Dataset {
                base_temperature,
                observations,
                min_year,
                max_year,
            }),
            _ => Err(LoadError::EmptyDataset),
        }
    }

    /// Parse a response body in the `{ baseTemperature, monthlyVariance }` format.
    pub fn from_json(body: &str) -> Result<Dataset> {
        let payload: Payload = serde_json::from_str(body)?;
        debug!(
            "Parsed payload: base {} with {} observations",
            payload.base_temperature,
            payload.monthly_variance.len()
        );
        Dataset::new(payload.base_temperature, payload.monthly_variance)
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset holds no observations.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }
}
