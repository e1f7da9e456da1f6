use dioxus::prelude::*;

use crate::{
    app::{persist_settings, request_lookup, LookupRequest},
    domain::{
        app_state::{GRADING_COST_STEP, MAX_GRADING_COST, MIN_GRADING_COST},
        breakdown_rows,
        report::format_currency,
        quote_metrics, AppState, Calculation,
    },
    ui::{
        components::{
            breakdown_table::BreakdownTable,
            kpi_card::KpiCard,
            recommendation_banner::RecommendationBanner,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let lookup_request = use_context::<Signal<Option<LookupRequest>>>();

    let mut query = use_signal(String::new);

    let grading_cost = state.with(|st| st.settings.grading_cost);
    let token_configured = state.with(|st| st.token_configured);
    let calculation = state.with(|st| st.last_calculation.clone());
    let last_error = state.with(|st| st.last_error.clone());
    let pending = lookup_request();
    let busy = pending.is_some();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = query();
        if text.trim().is_empty() {
            return;
        }
        let cost = state.with(|st| st.settings.grading_cost);
        if !request_lookup(lookup_request, &text, cost) {
            push_toast(
                toasts,
                ToastKind::Info,
                "A lookup is already running; hang tight.",
            );
        }
    };

    let on_cost_input = {
        let mut state = state;
        move |evt: FormEvent| {
            if let Ok(value) = evt.value().parse::<f64>() {
                state.with_mut(|st| st.settings.set_grading_cost(value));
            }
        }
    };

    let on_cost_commit = move |_: FormEvent| {
        persist_settings(&state, toasts, None);
    };

    rsx! {
        div { class: "page",
            header {
                class: "page-header",
                h1 { "🏀 Sports Card ROI + Flip Finder" }
                p {
                    class: "{theme::text_muted()}",
                    "Compare raw and PSA-10 sold averages to see whether grading pays off."
                }
            }

            if !token_configured {
                div {
                    class: "{theme::panel_error()}",
                    "⚠️ Add `SCP_TOKEN` to your environment (or a .env file) to enable price lookups."
                }
            }

            form {
                class: "{theme::panel()} lookup-form",
                onsubmit: on_submit,
                label { class: "{theme::label_class()}", r#for: "card-query", "Card name (e.g. Michael Jordan 1986 Fleer #57)" }
                input {
                    id: "card-query",
                    class: "{theme::input_class()}",
                    placeholder: "Player Year Set #Number",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }

                div { class: "slider-row",
                    label {
                        class: "{theme::label_class()}",
                        r#for: "grading-cost",
                        "PSA grading cost ($)"
                    }
                    span { class: "slider-value", {format_currency(grading_cost)} }
                }
                input {
                    id: "grading-cost",
                    class: "slider",
                    r#type: "range",
                    min: "{MIN_GRADING_COST}",
                    max: "{MAX_GRADING_COST}",
                    step: "{GRADING_COST_STEP}",
                    value: "{grading_cost}",
                    oninput: on_cost_input,
                    onchange: on_cost_commit,
                }

                button {
                    class: "{theme::btn_primary(busy)}",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Calculating…" } else { "Calculate ROI" }
                }
            }

            if let Some(request) = pending {
                div { class: "{theme::panel()} spinner-panel",
                    span { class: "spinner" }
                    span { "Fetching price data for “{request.query}”…" }
                }
            } else if let Some(calculation) = calculation {
                CalculationView { calculation, current_cost: grading_cost }
            } else if let Some(message) = last_error {
                div { class: "{theme::panel_error()}", "{message}" }
            }
        }
    }
}

#[component]
fn CalculationView(calculation: Calculation, current_cost: f64) -> Element {
    let metrics = quote_metrics(&calculation.quote, calculation.grading_cost);
    let rows = breakdown_rows(&calculation.roi);
    let tone = theme::signed_value_class(calculation.roi.profit);
    let fee_changed = (calculation.grading_cost - current_cost).abs() >= 0.005;
    let current_cost_label = format_currency(current_cost);

    rsx! {
        section { class: "results",
            h2 { class: "result-title", "{calculation.quote.item_label}" }
            if calculation.quote.item_label != calculation.query {
                p { class: "{theme::text_muted()}", "Best match for “{calculation.query}”" }
            }

            div { class: "kpi-grid",
                for metric in metrics {
                    KpiCard { title: metric.label.to_string(), value: metric.value, description: None }
                }
            }

            if fee_changed {
                p {
                    class: "hint",
                    "Grading cost changed since this lookup; recalculate to apply {current_cost_label}."
                }
            }

            h3 { class: "section-title", "ROI Breakdown" }
            BreakdownTable { rows, tone }

            RecommendationBanner { roi: calculation.roi.clone() }

            h3 { class: "section-title", "📦 Cheapest Raw Listings on eBay" }
            a {
                class: "affiliate-link",
                href: "{calculation.affiliate_url}",
                target: "_blank",
                rel: "noreferrer",
                "Open eBay search → earn commission"
            }
        }
    }
}
