/// Qualitative bucket for a 0-100 trust score. Ordered worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrustTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl TrustTier {
    /// Maps any integer onto a tier. Out-of-range scores fall into the
    /// nearest end bucket.
    pub fn classify(score: i32) -> Self {
        match score {
            s if s >= 85 => TrustTier::Excellent,
            s if s >= 70 => TrustTier::Good,
            s if s >= 50 => TrustTier::Fair,
            _ => TrustTier::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrustTier::Poor => "poor",
            TrustTier::Fair => "fair",
            TrustTier::Good => "good",
            TrustTier::Excellent => "excellent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(TrustTier::classify(85), TrustTier::Excellent);
        assert_eq!(TrustTier::classify(84), TrustTier::Good);
        assert_eq!(TrustTier::classify(70), TrustTier::Good);
        assert_eq!(TrustTier::classify(69), TrustTier::Fair);
        assert_eq!(TrustTier::classify(50), TrustTier::Fair);
        assert_eq!(TrustTier::classify(49), TrustTier::Poor);
    }

    #[test]
    fn covers_every_integer() {
        assert_eq!(TrustTier::classify(i32::MIN), TrustTier::Poor);
        assert_eq!(TrustTier::classify(-1), TrustTier::Poor);
        assert_eq!(TrustTier::classify(0), TrustTier::Poor);
        assert_eq!(TrustTier::classify(100), TrustTier::Excellent);
        assert_eq!(TrustTier::classify(i32::MAX), TrustTier::Excellent);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(TrustTier::Poor < TrustTier::Fair);
        assert!(TrustTier::Fair < TrustTier::Good);
        assert!(TrustTier::Good < TrustTier::Excellent);
        assert_eq!(TrustTier::classify(87).label(), "excellent");
    }
}
