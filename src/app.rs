use dioxus::{prelude::*, signals::Signal};
use tracing::{debug, info, warn};

use crate::{
    domain::{calculate, AppState, Recommendation},
    infra::{affiliate::ebay_search_link, pricing::PricingClient},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        config::AppConfig,
        persistence::{load_settings, save_settings, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/settings")]
    Settings {},
}

/// A queued price lookup. Cleared once the lookup settles.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupRequest {
    pub query: String,
    pub grading_cost: f64,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(AppConfig::load);
    let state = use_signal(|| initial_state(&config));
    use_context_provider(|| config.clone());
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let lookup_request = use_signal(|| None::<LookupRequest>);
    use_context_provider(|| lookup_request);

    use_hook({
        let token_configured = config.has_token();
        move || {
            if !token_configured {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "SCP_TOKEN is not set; price lookups are disabled.",
                );
            }
        }
    });

    let _lookup = use_resource(move || {
        let config = config.clone();
        async move { run_lookup(config, state, toasts, lookup_request).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

fn initial_state(config: &AppConfig) -> AppState {
    let mut settings = load_settings().unwrap_or_default();
    if !settings.has_campaign_id() {
        if let Some(campaign) = config.campaign_id.as_deref() {
            settings.set_campaign_id(campaign);
        }
    }
    AppState::new(settings, config.has_token())
}

/// Saves the current settings. `saved` is the toast shown on success, if any.
/// Returns whether the file was written.
pub fn persist_settings(
    state: &Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    saved: Option<(ToastKind, &str)>,
) -> bool {
    let snapshot = state.with(|st| st.settings.clone());
    let result = save_settings(&snapshot);
    if let Err(err) = &result {
        warn!(%err, "failed to persist settings");
    }
    if let Some((kind, text)) = save_feedback(&result, saved) {
        push_toast(toasts, kind, text);
    }
    result.is_ok()
}

fn save_feedback(
    result: &Result<(), PersistSaveError>,
    saved: Option<(ToastKind, &str)>,
) -> Option<(ToastKind, String)> {
    match result {
        Ok(()) => saved.map(|(kind, text)| (kind, text.to_string())),
        Err(err) => Some((ToastKind::Error, format!("Failed to save settings: {err}"))),
    }
}

/// Queues a lookup unless the query is blank or one is already running.
pub fn request_lookup(
    mut lookup_request: Signal<Option<LookupRequest>>,
    query: &str,
    grading_cost: f64,
) -> bool {
    let next = lookup_request.with(|pending| next_lookup(pending.as_ref(), query, grading_cost));
    let Some(next) = next else {
        return false;
    };
    debug!(query = %next.query, grading_cost, "queueing price lookup");
    lookup_request.set(Some(next));
    true
}

fn next_lookup(
    pending: Option<&LookupRequest>,
    query: &str,
    grading_cost: f64,
) -> Option<LookupRequest> {
    let query = query.trim();
    if query.is_empty() || pending.is_some() {
        return None;
    }
    Some(LookupRequest {
        query: query.to_string(),
        grading_cost,
    })
}

async fn run_lookup(
    config: AppConfig,
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut lookup_request: Signal<Option<LookupRequest>>,
) -> Option<Recommendation> {
    let Some(request) = lookup_request() else {
        debug!("no lookup queued; skipping API call");
        return None;
    };

    let outcome = match PricingClient::from_config(&config) {
        Ok(client) => client.lookup(&request.query).await,
        Err(err) => Err(err),
    };
    lookup_request.set(None);

    match outcome {
        Ok(quote) => {
            let campaign_id = state.peek().settings.campaign_id.clone();
            let affiliate_url = ebay_search_link(&quote.item_label, &campaign_id);
            let calculation = calculate(&request.query, quote, request.grading_cost, affiliate_url);
            let recommendation = calculation.roi.recommendation;
            info!(
                query = %calculation.query,
                label = %calculation.quote.item_label,
                roi_percent = calculation.roi.roi_percent,
                ?recommendation,
                "calculated grading ROI"
            );
            state.with_mut(|st| st.record_calculation(calculation));
            Some(recommendation)
        }
        Err(err) => {
            warn!(query = %request.query, %err, "price lookup failed");
            let message = err.to_string();
            state.with_mut(|st| st.record_error(message.clone()));
            push_toast(toasts, ToastKind::Error, message);
            None
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
