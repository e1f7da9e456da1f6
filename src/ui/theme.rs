//! Class helpers shared by pages so styling lives in `assets/main.css`.

use crate::domain::Recommendation;
use crate::ui::components::toast::ToastKind;

// ============================================
// BUTTON / INPUT STYLES
// ============================================

pub fn btn_primary(busy: bool) -> &'static str {
    if busy {
        "btn btn-primary btn-busy"
    } else {
        "btn btn-primary"
    }
}

pub fn btn_secondary() -> &'static str {
    "btn btn-secondary"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn nav-btn-active"
    } else {
        "nav-btn"
    }
}

pub fn input_class() -> &'static str {
    "input"
}

pub fn label_class() -> &'static str {
    "label"
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn panel() -> &'static str {
    "panel"
}

pub fn panel_error() -> &'static str {
    "panel panel-error"
}

pub fn text_muted() -> &'static str {
    "text-muted"
}

pub fn table_container() -> &'static str {
    "table-container"
}

// ============================================
// STATUS STYLES
// ============================================

pub fn recommendation_class(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::HighFlip => "recommendation recommendation-high-flip",
        Recommendation::LowMargin => "recommendation recommendation-low-margin",
        Recommendation::Loss => "recommendation recommendation-loss",
    }
}

/// Colour for a signed amount: gains green, losses red.
pub fn signed_value_class(value: f64) -> &'static str {
    if value > 0.0 {
        "value-positive"
    } else if value < 0.0 {
        "value-negative"
    } else {
        "value-neutral"
    }
}

pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "toast toast-info",
        ToastKind::Success => "toast toast-success",
        ToastKind::Warning => "toast toast-warning",
        ToastKind::Error => "toast toast-error",
    }
}
