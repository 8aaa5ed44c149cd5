//! Seller records, trust tiers, link validation and the analyze-page state.

pub mod analysis;
pub mod listing;
pub mod seller;
pub mod trust;
pub mod validation;

#[allow(unused_imports)]
pub use analysis::{
    AnalysisReport, AnalysisSession, AnalysisTicket, SubmitOutcome, ViewPhase, ViewState,
};
#[allow(unused_imports)]
pub use listing::{listing_caption, ListingSummary};
#[allow(unused_imports)]
pub use seller::{ReviewHighlights, SellerMetrics, SentimentSummary, TrustTrend};
pub use trust::TrustTier;
#[allow(unused_imports)]
pub use validation::{is_listing_url, validate_listing_url, UrlValidationError};
