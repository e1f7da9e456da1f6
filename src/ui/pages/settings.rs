use dioxus::prelude::*;

use crate::{
    app::persist_settings,
    domain::{
        app_state::{MAX_GRADING_COST, MIN_GRADING_COST},
        AppState, Settings,
    },
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::config::{AppConfig, CAMPAIGN_VAR, TOKEN_VAR},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let config = use_context::<AppConfig>();

    let initial = state.with(|st| st.settings.clone());
    let mut grading_cost_input = use_signal(|| format!("{:.2}", initial.grading_cost));
    let mut campaign_input = use_signal(|| campaign_field_value(&initial));

    let token_configured = state.with(|st| st.token_configured);
    let has_campaign = state.with(|st| st.settings.has_campaign_id());
    let base_url = config
        .pricing_base_url
        .clone()
        .unwrap_or_else(|| crate::infra::pricing::DEFAULT_BASE_URL.to_string());

    let on_apply = {
        let mut state = state;
        move |_| match parse_settings(&grading_cost_input(), &campaign_input()) {
            Ok(settings) => {
                grading_cost_input.set(format!("{:.2}", settings.grading_cost));
                state.with_mut(|st| st.settings = settings);
                persist_settings(&state, toasts, Some((ToastKind::Success, "Saved settings.")));
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_reset = {
        let mut state = state;
        let env_campaign = config.campaign_id.clone();
        move |_| {
            let mut defaults = Settings::default();
            if let Some(campaign) = env_campaign.as_deref() {
                defaults.set_campaign_id(campaign);
            }
            grading_cost_input.set(format!("{:.2}", defaults.grading_cost));
            campaign_input.set(campaign_field_value(&defaults));
            state.with_mut(|st| st.settings = defaults);
            persist_settings(
                &state,
                toasts,
                Some((ToastKind::Info, "Restored default settings.")),
            );
        }
    };

    rsx! {
        div { class: "page",
            section {
                class: "{theme::panel()}",
                h2 { class: "section-title", "Calculator Defaults" }
                div { class: "form-grid",
                    div {
                        label { class: "{theme::label_class()}", "Grading cost ($ {MIN_GRADING_COST}-{MAX_GRADING_COST})" }
                        input {
                            class: "{theme::input_class()}",
                            value: grading_cost_input(),
                            oninput: move |evt| grading_cost_input.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "eBay Partner Network campaign ID" }
                        input {
                            class: "{theme::input_class()}",
                            placeholder: "e.g. 5338000000",
                            value: campaign_input(),
                            oninput: move |evt| campaign_input.set(evt.value()),
                        }
                    }
                }
                if !has_campaign {
                    p { class: "hint", "Affiliate links carry a placeholder campaign until you set one (or {CAMPAIGN_VAR})." }
                }
                div { class: "button-row",
                    button { class: "{theme::btn_primary(false)}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset Defaults" }
                }
            }

            section {
                class: "{theme::panel()}",
                h2 { class: "section-title", "Pricing API" }
                ul { class: "status-list",
                    li {
                        span { "{TOKEN_VAR}" }
                        if token_configured {
                            span { class: "value-positive", "Configured" }
                        } else {
                            span { class: "value-negative", "Missing" }
                        }
                    }
                    li {
                        span { "Endpoint" }
                        span { class: "{theme::text_muted()}", "{base_url}" }
                    }
                    li {
                        span { "Timeout" }
                        span { class: "{theme::text_muted()}", "10 s, no retries" }
                    }
                }
                p {
                    class: "{theme::text_muted()}",
                    "The token is read from the environment at startup and never written to disk."
                }
            }
        }
    }
}

fn campaign_field_value(settings: &Settings) -> String {
    if settings.has_campaign_id() {
        settings.campaign_id.clone()
    } else {
        String::new()
    }
}

fn parse_settings(grading_cost: &str, campaign_id: &str) -> Result<Settings, String> {
    let cost: f64 = grading_cost
        .trim()
        .trim_start_matches('$')
        .parse()
        .map_err(|_| "Grading cost must be a number".to_string())?;
    if !(MIN_GRADING_COST..=MAX_GRADING_COST).contains(&cost) {
        return Err(format!(
            "Grading cost must be between {MIN_GRADING_COST:.2} and {MAX_GRADING_COST:.2}"
        ));
    }

    let mut settings = Settings::default();
    settings.set_grading_cost(cost);
    settings.set_campaign_id(campaign_id);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_accepts_dollar_prefix() {
        let settings = parse_settings(" $34.50 ", "5338000000").unwrap();
        assert_eq!(settings.grading_cost, 34.5);
        assert_eq!(settings.campaign_id, "5338000000");
    }

    #[test]
    fn test_parse_settings_rejects_bad_cost() {
        assert_eq!(
            parse_settings("cheap", "").unwrap_err(),
            "Grading cost must be a number"
        );
        assert_eq!(
            parse_settings("150", "").unwrap_err(),
            "Grading cost must be between 10.00 and 100.00"
        );
    }

    #[test]
    fn test_placeholder_campaign_shows_empty_field() {
        assert_eq!(campaign_field_value(&Settings::default()), "");
    }
}
