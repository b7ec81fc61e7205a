//! HTTP adapter for a weather category model.
//!
//! [`WeatherClassifier`] is synchronous so the ranking engine stays usable
//! outside async code. This adapter bridges to `reqwest` by blocking on a
//! Tokio runtime it owns, or on the caller's runtime when one is running.

use std::time::Duration;

use fairday_core::{ClassifierInput, ClassifyError, WeatherCategory, WeatherClassifier};
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::wire::{PredictRequest, PredictResponse};

/// Error type for [`HttpWeatherClassifier`] construction failures.
#[derive(Debug)]
pub enum ClassifierBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ClassifierBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ClassifierBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Address the category service listens on when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default user agent for classification requests.
pub const DEFAULT_USER_AGENT: &str = "fairday-classifier/0.1";

/// Default request timeout in seconds.
///
/// One request is made per ranked day, so this is kept well below what a
/// bulk API would allow.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpWeatherClassifier`].
#[derive(Debug, Clone)]
pub struct HttpWeatherClassifierConfig {
    /// Base URL of the service (e.g., `"http://localhost:8000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpWeatherClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpWeatherClassifierConfig {
    /// Create a configuration for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Weather classifier that queries a model over HTTP.
///
/// Inputs are validated locally, so malformed measurements fail with
/// [`ClassifyError::InvalidMeasurement`] without a request being sent.
/// Transport failures, timeouts, non-2xx statuses, malformed bodies and
/// labels outside [`WeatherCategory`] all map to
/// [`ClassifyError::Unavailable`].
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime, or inside a `current_thread` runtime, requests
/// run on the classifier's own runtime. Inside a multi-threaded runtime the
/// caller's handle is used with [`tokio::task::block_in_place`].
pub struct HttpWeatherClassifier {
    client: Client,
    config: HttpWeatherClassifierConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpWeatherClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWeatherClassifier")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpWeatherClassifier {
    /// Create a classifier for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClassifierBuildError> {
        Self::with_config(HttpWeatherClassifierConfig::new(base_url))
    }

    /// Create a classifier with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpWeatherClassifierConfig) -> Result<Self, ClassifierBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClassifierBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClassifierBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &HttpWeatherClassifierConfig {
        &self.config
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.config.base_url.trim_end_matches('/'))
    }

    async fn predict_async(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        let url = self.predict_url();

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest::from(input))
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: PredictResponse =
            response
                .json()
                .await
                .map_err(|err| ClassifyError::Unavailable {
                    reason: format!("malformed response from {url}: {err}"),
                })?;

        parse_prediction(&body.prediction, &url)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ClassifyError {
        let reason = if error.is_timeout() {
            format!(
                "request to {url} timed out after {}s",
                self.config.timeout.as_secs()
            )
        } else if let Some(status) = error.status() {
            format!("{url} answered with HTTP {}", status.as_u16())
        } else {
            format!("request to {url} failed: {error}")
        };
        ClassifyError::Unavailable { reason }
    }
}

fn parse_prediction(label: &str, url: &str) -> Result<WeatherCategory, ClassifyError> {
    label.parse().map_err(|_| ClassifyError::Unavailable {
        reason: format!("{url} returned unknown category '{label}'"),
    })
}

impl WeatherClassifier for HttpWeatherClassifier {
    /// Classify `input` with the remote model.
    ///
    /// # Runtime requirements
    ///
    /// Inside a `current_thread` Tokio runtime the call blocks that runtime
    /// while the request runs on the classifier's own runtime.
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        input.validate()?;

        let future = self.predict_async(input);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
