use serde::{Deserialize, Serialize};

use super::entities::Calculation;

/// PSA bulk value tier fee.
pub const DEFAULT_GRADING_COST: f64 = 21.99;
pub const MIN_GRADING_COST: f64 = 10.0;
pub const MAX_GRADING_COST: f64 = 100.0;
pub const GRADING_COST_STEP: f64 = 0.01;
pub const PLACEHOLDER_CAMPAIGN_ID: &str = "YOUR_CAMPAIGN_ID";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_grading_cost")]
    pub grading_cost: f64,
    #[serde(default = "default_campaign_id")]
    pub campaign_id: String,
}

fn default_grading_cost() -> f64 {
    DEFAULT_GRADING_COST
}

fn default_campaign_id() -> String {
    PLACEHOLDER_CAMPAIGN_ID.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grading_cost: DEFAULT_GRADING_COST,
            campaign_id: default_campaign_id(),
        }
    }
}

impl Settings {
    /// Stores the fee clamped to the slider range, rounded to whole cents.
    pub fn set_grading_cost(&mut self, value: f64) {
        self.grading_cost = clamp_grading_cost(value);
    }

    pub fn set_campaign_id(&mut self, value: &str) {
        let trimmed = value.trim();
        self.campaign_id = if trimmed.is_empty() {
            default_campaign_id()
        } else {
            trimmed.to_string()
        };
    }

    pub fn has_campaign_id(&self) -> bool {
        self.campaign_id != PLACEHOLDER_CAMPAIGN_ID
    }

    /// Repairs values edited by hand in the settings file.
    pub fn sanitized(mut self) -> Self {
        self.grading_cost = clamp_grading_cost(self.grading_cost);
        let campaign = self.campaign_id.clone();
        self.set_campaign_id(&campaign);
        self
    }
}

pub fn clamp_grading_cost(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_GRADING_COST;
    }
    let clamped = value.clamp(MIN_GRADING_COST, MAX_GRADING_COST);
    (clamped * 100.0).round() / 100.0
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub settings: Settings,
    /// Whether an API token was found at startup. The token itself stays in config.
    pub token_configured: bool,
    pub last_calculation: Option<Calculation>,
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings, token_configured: bool) -> Self {
        Self {
            settings,
            token_configured,
            last_calculation: None,
            last_error: None,
        }
    }

    pub fn record_calculation(&mut self, calculation: Calculation) {
        self.last_error = None;
        self.last_calculation = Some(calculation);
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_calculation = None;
        self.last_error = Some(message.into());
    }
}
