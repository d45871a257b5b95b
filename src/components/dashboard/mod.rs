mod agent_card;
mod filter_panel;
mod transfer_targets;

pub use agent_card::*;
pub use filter_panel::*;
pub use transfer_targets::*;

use dioxus::prelude::*;

use crate::api;
use crate::components::common::{ErrorMessage, LoadingSpinner};
use crate::models::FilterUpdate;
use crate::state::{DashboardController, DashboardView};

#[component]
pub fn AgentDashboard() -> Element {
    let mut dashboard = use_signal(DashboardController::new);

    // Fetch the roster once on mount
    use_effect(move || {
        spawn(async move {
            let result = api::agents::get_all_agents().await;
            dashboard.write().finish_fetch(result);
        });
    });

    let filters = dashboard.read().filters();
    let view = dashboard.read().view();

    let content = match view {
        DashboardView::Loading => rsx! {
            LoadingSpinner { label: "Cargando agentes..." }
        },
        DashboardView::Failed(message) => rsx! {
            ErrorMessage { message: "{message}" }
        },
        DashboardView::Ready(agents) if agents.is_empty() => rsx! {
            div { class: "text-center py-12",
                h3 { class: "text-xl font-semibold", "No se encontraron agentes" }
                p { class: "text-gray-500 mt-2", "Prueba a cambiar o reiniciar los filtros." }
            }
        },
        DashboardView::Ready(agents) => rsx! {
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for agent in agents.iter() {
                    AgentCard {
                        key: "{agent.id}",
                        agent: agent.clone(),
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "container mx-auto p-4 md:p-8",
            // Header
            header { class: "mb-8",
                h1 { class: "text-3xl font-bold tracking-tight text-gray-900",
                    "Centro de Mando de Agentes IA"
                }
                p { class: "mt-1 text-lg text-gray-600",
                    "Monitoriza el rendimiento y estado de tus agentes en tiempo real."
                }
            }

            FilterPanel {
                filters,
                on_filter_change: move |update: FilterUpdate| dashboard.write().apply_filter(update),
            }

            {content}
        }
    }
}
