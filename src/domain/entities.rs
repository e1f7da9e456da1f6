#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Average sold prices for a single card, in dollars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub ungraded_price: f64,
    pub graded_price: f64,
    /// Product name as matched by the pricing service, not the raw query.
    pub item_label: String,
}

impl PriceQuote {
    pub fn new(ungraded_price: f64, graded_price: f64, item_label: impl Into<String>) -> Self {
        Self {
            ungraded_price,
            graded_price,
            item_label: item_label.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighFlip,
    LowMargin,
    Loss,
}

impl Recommendation {
    /// Tiering is evaluated top-down; both boundaries are inclusive.
    pub fn from_roi_percent(roi_percent: f64) -> Self {
        if roi_percent >= 100.0 {
            Recommendation::HighFlip
        } else if roi_percent >= 0.0 {
            Recommendation::LowMargin
        } else {
            Recommendation::Loss
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::HighFlip => "HIGH-FLIP OPPORTUNITY",
            Recommendation::LowMargin => "Possible, but low margin",
            Recommendation::Loss => "Likely loss after grading",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Recommendation::HighFlip => "🟢",
            Recommendation::LowMargin => "🟡",
            Recommendation::Loss => "🔴",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    pub investment: f64,
    pub profit: f64,
    pub roi_percent: f64,
    pub recommendation: Recommendation,
}

impl RoiResult {
    /// Graded sale price at which profit is exactly zero.
    pub fn break_even(&self) -> f64 {
        self.investment
    }
}

/// A completed lookup plus the figures derived from it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Calculation {
    pub query: String,
    pub quote: PriceQuote,
    pub grading_cost: f64,
    pub roi: RoiResult,
    pub affiliate_url: String,
}
