use dioxus::prelude::*;

use crate::domain::{report::format_signed_percent, RoiResult};
use crate::ui::theme;

#[component]
pub fn RecommendationBanner(roi: RoiResult) -> Element {
    let recommendation = roi.recommendation;
    let roi_display = format_signed_percent(roi.roi_percent);

    rsx! {
        div {
            class: "{theme::recommendation_class(recommendation)}",
            div {
                class: "recommendation-header",
                span { class: "recommendation-kicker", "Flip verdict" }
                span { class: "recommendation-roi", "{roi_display}" }
            }
            p {
                class: "recommendation-headline",
                "{recommendation.emoji()} {recommendation.headline()}"
            }
        }
    }
}
