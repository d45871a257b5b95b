use dioxus::prelude::*;

use crate::components::common::{Badge, Card};
use crate::models::AgentRecord;

use super::TransferTargets;

#[component]
pub fn AgentCard(agent: AgentRecord) -> Element {
    let status = agent.status;

    rsx! {
        Card { class: "flex flex-col h-full",
            div { class: "flex justify-between items-start mb-4",
                div {
                    h3 { class: "text-xl font-semibold", "{agent.name}" }
                    span { class: "text-sm text-gray-500", "{agent.team.display_name()}" }
                }
                span {
                    class: "inline-flex items-center px-2.5 py-0.5 rounded-full border text-xs font-medium {status.badge_class()}",
                    span { class: "w-2 h-2 rounded-full mr-2 {status.color_class()}" }
                    "{status.display_name()}"
                }
            }

            div { class: "space-y-4 flex-grow",
                div {
                    h4 { class: "text-sm font-medium text-gray-500 mb-2", "Métricas de Actividad" }
                    div { class: "space-y-2 text-sm",
                        MetricRow { icon: "\u{1F4DE}", label: "Llamadas Salientes:", value: agent.metrics.outbound_calls }
                        MetricRow { icon: "\u{1F501}", label: "Transferencias:", value: agent.metrics.transfers }
                        MetricRow { icon: "\u{23F1}", label: "T. Promedio (seg):", value: agent.metrics.avg_handle_time }
                    }
                }

                div {
                    h4 { class: "text-sm font-medium text-gray-500 mb-2", "Issues Jira" }
                    div { class: "space-y-2 text-sm",
                        div { class: "flex items-center justify-between",
                            span { "\u{26A0} Issues Abiertos:" }
                            Badge { text: "{agent.issues.open_issues}" }
                        }
                        div { class: "flex items-center justify-between",
                            span { "\u{1F4DA} Backlog:" }
                            Badge { text: "{agent.issues.backlog}" }
                        }
                    }
                }

                TransferTargets { targets: agent.transfer_targets.clone() }
            }
        }
    }
}

#[component]
fn MetricRow(icon: String, label: String, value: u32) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "flex items-center gap-2",
                span { "{icon}" }
                "{label}"
            }
            span { class: "font-semibold", "{value}" }
        }
    }
}
