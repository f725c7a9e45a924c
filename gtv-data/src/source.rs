//! Sources that produce a [`Dataset`].
//!
//! Each source makes exactly one attempt per `load` call. There is no retry
//! and no timeout beyond what the transport itself applies.

use crate::dataset::Dataset;
use crate::error::{LoadError, Result};
use log::info;
use std::future::Future;
use std::path::PathBuf;

/// Published location of the monthly global temperature payload.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Anything that can asynchronously produce the dataset.
pub trait DataSource {
    fn load(&self) -> impl Future<Output = Result<Dataset>>;
}

/// Fetches the payload over HTTP with a single GET.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "api")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        HttpSource {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "api")]
impl Default for HttpSource {
    fn default() -> Self {
        HttpSource::new(DEFAULT_URL)
    }
}

#[cfg(feature = "api")]
impl DataSource for HttpSource {
    async fn load(&self) -> Result<Dataset> {
        info!("Fetching dataset from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Network(format!(
                "bad response status {} from {}",
                status, self.url
            )));
        }
        let body = response.text().await?;
        let dataset = Dataset::from_json(&body)?;
        info!(
            "Loaded {} observations ({}..={})",
            dataset.len(),
            dataset.min_year(),
            dataset.max_year()
        );
        Ok(dataset)
    }
}

/// Reads a saved copy of the payload from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl DataSource for FileSource {
    async fn load(&self) -> Result<Dataset> {
        info!("Reading dataset from {}", self.path.display());
        let body = std::fs::read_to_string(&self.path)?;
        Dataset::from_json(&body)
    }
}

/// Yields a fixed outcome. Used to embed a payload or to inject failures.
#[derive(Debug)]
pub enum StaticSource {
    Body(String),
    Failure(fn() -> LoadError),
}

impl StaticSource {
    pub fn body(body: impl Into<String>) -> Self {
        StaticSource::Body(body.into())
    }

    pub fn failing(make_error: fn() -> LoadError) -> Self {
        StaticSource::Failure(make_error)
    }
}

impl DataSource for StaticSource {
    async fn load(&self) -> Result<Dataset> {
        match self {
            StaticSource::Body(body) => Dataset::from_json(body),
            StaticSource::Failure(make_error) => Err(make_error()),
        }
    }
}
