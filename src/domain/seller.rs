use serde::{Deserialize, Serialize};

/// Direction the trust score has been moving in recently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTrend {
    Up,
    Down,
    #[default]
    Stable,
}

impl TrustTrend {
    pub fn glyph(&self) -> &'static str {
        match self {
            TrustTrend::Up => "↗",
            TrustTrend::Down => "↘",
            TrustTrend::Stable => "–",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrustTrend::Up => "Trending up",
            TrustTrend::Down => "Trending down",
            TrustTrend::Stable => "Stable",
        }
    }
}

/// Review tone split into three buckets. Values are shown as given and are
/// not expected to add up to 100.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewHighlights {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Everything the results view knows about a seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerMetrics {
    pub name: String,
    pub location: String,
    pub feedback_score: u64,
    pub positive_percentage: f64,
    pub total_feedback: u64,
    pub member_since: String,
    /// 0-100, see [`crate::domain::TrustTier`].
    pub trust_score: i32,
    pub trust_trend: TrustTrend,
    pub sentiment_summary: SentimentSummary,
    pub common_issues: Vec<String>,
    pub recent_highlights: ReviewHighlights,
    /// Sub-scores on a 0-10 scale.
    pub shipping_score: f64,
    pub communication_score: f64,
    pub item_description_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_record() {
        let json = r#"{
            "name": "Shop",
            "location": "Berlin, Germany",
            "feedbackScore": 120,
            "positivePercentage": 99.1,
            "totalFeedback": 130,
            "memberSince": "2020",
            "trustScore": 64,
            "trustTrend": "down",
            "sentimentSummary": { "positive": 50, "neutral": 30, "negative": 30 },
            "commonIssues": [],
            "recentHighlights": { "positive": ["ok"], "negative": [] },
            "shippingScore": 6.0,
            "communicationScore": 7.5,
            "itemDescriptionScore": 10
        }"#;

        let metrics: SellerMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.trust_trend, TrustTrend::Down);
        assert_eq!(metrics.feedback_score, 120);
        // No normalisation: 50 + 30 + 30 stays as written.
        assert_eq!(metrics.sentiment_summary.negative, 30);
        assert_eq!(metrics.item_description_score, 10.0);
    }

    #[test]
    fn unknown_trend_is_rejected() {
        let err = serde_json::from_str::<TrustTrend>("\"sideways\"");
        assert!(err.is_err());
    }
}
