//! Configuration for the multi-source betweenness computation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::msbfs::OMEGA;

/// Parameters of a betweenness centrality run.
///
/// Deserializes from camelCase JSON; missing fields fall back to [`Default`].
///
/// ```
/// use msbc::BetweennessConfig;
///
/// let config = BetweennessConfig::from_json_str(r#"{ "undirected": true, "batchWidth": 8 }"#).unwrap();
/// assert!(config.undirected);
/// assert_eq!(config.batch_width, 8);
/// assert_eq!(config.divisor(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BetweennessConfig {
    /// Treat the graph as undirected; every contribution is halved.
    pub undirected: bool,
    /// Number of sources traversed together in one batch.
    pub batch_width: usize,
    /// Number of batches processed in parallel.
    pub concurrency: usize,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            undirected: false,
            batch_width: OMEGA,
            concurrency: 4,
        }
    }
}

impl BetweennessConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets `undirected`.
    #[must_use]
    pub fn with_undirected(mut self, undirected: bool) -> Self {
        self.undirected = undirected;
        self
    }

    /// Sets `batch_width`.
    #[must_use]
    pub fn with_batch_width(mut self, batch_width: usize) -> Self {
        self.batch_width = batch_width;
        self
    }

    /// Sets `concurrency`.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Checks the preconditions every run depends on.
    pub fn validate(&self) -> Result<()> {
        if self.batch_width == 0 {
            return Err(Error::InvalidBatchWidth(self.batch_width));
        }
        if self.concurrency == 0 {
            return Err(Error::InvalidConcurrency(self.concurrency));
        }
        Ok(())
    }

    /// Normalization applied to each contribution.
    ///
    /// Undirected traversals discover every shortest path from both endpoints.
    #[inline]
    pub fn divisor(&self) -> f64 {
        if self.undirected {
            2.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_width() {
        let config = BetweennessConfig::default();
        assert_eq!(config.batch_width, 64);
        assert!(!config.undirected);
        assert_eq!(config.divisor(), 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = BetweennessConfig::default().with_batch_width(0);
        assert!(matches!(config.validate(), Err(Error::InvalidBatchWidth(0))));
    }

    #[test]
    fn zero_concurrency_is_rejected() {
        let err = BetweennessConfig::from_json_str(r#"{ "concurrency": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConcurrency(0)));
    }

    #[test]
    fn json_round_trips_through_camel_case() {
        let config = BetweennessConfig::default()
            .with_undirected(true)
            .with_batch_width(3)
            .with_concurrency(2);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("batchWidth"));
        assert_eq!(BetweennessConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = BetweennessConfig::from_json_str("{ batchWidth: }").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
