use dioxus::prelude::*;

use crate::models::TransferTarget;

/// Transfer destinations of one agent. Renders nothing for an empty list.
#[component]
pub fn TransferTargets(targets: Vec<TransferTarget>) -> Element {
    if targets.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            hr { class: "my-4" }
            h4 { class: "text-sm font-medium text-gray-500 mb-2", "Destinos de Transferencia" }
            div { class: "space-y-2 text-sm",
                for target in targets.iter() {
                    div { key: "{target.name}", class: "flex items-center justify-between",
                        span { class: "flex items-center gap-2",
                            span { class: "text-gray-400", "\u{260E}" }
                            "{target.name}:"
                        }
                        span { class: "font-mono text-xs font-semibold bg-gray-100 px-2 py-1 rounded",
                            "{target.number}"
                        }
                    }
                }
            }
        }
    }
}
