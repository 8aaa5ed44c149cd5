//! Shared class strings so cards, buttons and tier colours stay consistent.

use crate::domain::{TrustTier, TrustTrend};

// ============================================
// SURFACES
// ============================================

pub const CARD: &str = "rounded-xl border border-slate-800 bg-slate-900/60 p-6 shadow-sm";
pub const CARD_HEADING: &str = "text-lg font-semibold text-slate-100";
pub const PAGE_TITLE: &str = "text-3xl font-bold text-slate-100";

// ============================================
// TEXT
// ============================================

pub const TEXT_MUTED: &str = "text-slate-400";
pub const TEXT_PRIMARY: &str = "text-indigo-300";
pub const TEXT_WARNING: &str = "text-amber-300";
pub const TEXT_ERROR: &str = "text-rose-400";

// ============================================
// CONTROLS
// ============================================

pub const INPUT: &str = "h-12 w-full rounded-lg border border-slate-700 bg-slate-950 pl-4 pr-12 text-base text-slate-100 focus:border-indigo-500 focus:outline-none disabled:opacity-60";
pub const BTN_PRIMARY: &str = "gradient-primary h-12 w-full rounded-lg text-sm font-semibold text-white transition-opacity hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-50";
pub const BTN_GHOST: &str = "inline-flex items-center gap-2 rounded-lg px-4 py-2 text-sm text-slate-300 transition hover:bg-slate-800 hover:text-white";
pub const BADGE_OUTLINE: &str = "mr-2 mb-2 inline-flex items-center rounded-full border border-slate-600 px-3 py-1 text-xs font-medium text-slate-200";

// ============================================
// TRUST TIERS
// ============================================

pub fn tier_text(tier: TrustTier) -> &'static str {
    match tier {
        TrustTier::Excellent => "text-trust-excellent",
        TrustTier::Good => "text-trust-good",
        TrustTier::Fair => "text-trust-fair",
        TrustTier::Poor => "text-trust-poor",
    }
}

pub fn tier_ring(tier: TrustTier) -> &'static str {
    match tier {
        TrustTier::Excellent => "trust-ring trust-ring-excellent",
        TrustTier::Good => "trust-ring trust-ring-good",
        TrustTier::Fair => "trust-ring trust-ring-fair",
        TrustTier::Poor => "trust-ring trust-ring-poor",
    }
}

pub fn trend_text(trend: TrustTrend) -> &'static str {
    match trend {
        TrustTrend::Up => "text-trust-excellent",
        TrustTrend::Down => "text-trust-poor",
        TrustTrend::Stable => TEXT_MUTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_its_own_colour() {
        let tiers = [
            TrustTier::Poor,
            TrustTier::Fair,
            TrustTier::Good,
            TrustTier::Excellent,
        ];
        for tier in tiers {
            assert!(tier_text(tier).ends_with(tier.label()));
            assert!(tier_ring(tier).ends_with(tier.label()));
        }
    }
}
