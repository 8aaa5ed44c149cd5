//! Stand-in for a real seller analysis backend.
//!
//! - Waits a fixed delay, then returns the bundled seller record.
//! - Never touches the network; the URL is only carried through for display.

use std::time::Duration;

use thiserror::Error;

use crate::config::AnalyzerConfig;
use crate::domain::SellerMetrics;
use crate::util::assets;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("bundled seller record is missing")]
    MissingFixture,
    #[error("failed to decode bundled seller record: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            delay: config.analysis_delay,
        }
    }

    pub async fn analyze(&self, url: &str) -> Result<SellerMetrics, AnalyzerError> {
        tracing::debug!(url, delay = ?self.delay, "mock analysis running");
        tokio::time::sleep(self.delay).await;
        load_mock_seller()
    }
}

/// Decodes the seller record shipped in `assets/mock_seller.json`.
pub fn load_mock_seller() -> Result<SellerMetrics, AnalyzerError> {
    let json = assets::mock_seller_json().ok_or(AnalyzerError::MissingFixture)?;
    parse_seller(&json)
}

fn parse_seller(json: &str) -> Result<SellerMetrics, AnalyzerError> {
    Ok(serde_json::from_str(json)?)
}
