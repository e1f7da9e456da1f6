use dioxus::prelude::*;

use crate::domain::BreakdownRow;
use crate::ui::theme;

/// The "ROI Breakdown" table; `tone` colours the signed rows.
#[component]
pub fn BreakdownTable(rows: Vec<BreakdownRow>, tone: &'static str) -> Element {
    let rendered_rows = rows
        .into_iter()
        .map(|row| {
            let value_class = if row.signed {
                format!("numeric {tone}")
            } else {
                "numeric".to_string()
            };
            (row, value_class)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::table_container()}",
            table {
                class: "breakdown-table",
                thead {
                    tr {
                        th { "Metric" }
                        th { class: "numeric", "Value" }
                    }
                }
                tbody {
                    for (row, value_class) in rendered_rows {
                        tr {
                            td { "{row.metric}" }
                            td { class: "{value_class}", "{row.value}" }
                        }
                    }
                }
            }
        }
    }
}
