use dioxus::prelude::*;

use crate::app::Route;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header {
                class: "app-header",
                div { class: "app-header-inner",
                    div { class: "brand",
                        span { class: "brand-icon", "🃏" }
                        div {
                            h1 { class: "brand-title", "{APP_NAME}" }
                            p { class: "brand-tagline", "raw in, slab out" }
                        }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "📈 Calculator",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Settings {}),
                            onclick: move |_| { nav.push(Route::Settings {}); },
                            label: "⚙️",
                        }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                p {
                    "Data: SportsCardsPro (eBay sold aggregates). "
                    "Affiliate clicks pay you via eBay Partner Network. "
                    "Not financial advice, markets change."
                }
                p { class: "{theme::text_muted()}", "{version_label()}" }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
