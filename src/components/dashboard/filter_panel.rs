use dioxus::prelude::*;

use crate::components::common::{select_options, SelectField};
use crate::models::{AgentStatus, FilterState, FilterUpdate, Selector, Team, WILDCARD};

/// Team and status selectors. Each change reports only the field that moved.
#[component]
pub fn FilterPanel(filters: FilterState, on_filter_change: EventHandler<FilterUpdate>) -> Element {
    let team_options = select_options::<Team>(Some((WILDCARD, "Todos los equipos")));
    let status_options = select_options::<AgentStatus>(Some((WILDCARD, "Todos los estados")));

    rsx! {
        div { class: "flex flex-col sm:flex-row gap-4 mb-8 p-4 bg-white rounded-lg border",
            SelectField {
                id: "team-filter",
                label: "Filtrar por Equipo",
                value: "{filters.team.value()}",
                options: team_options,
                onchange: move |value: String| {
                    if let Some(team) = Selector::<Team>::from_value(&value) {
                        on_filter_change.call(FilterUpdate::team(team));
                    }
                },
            }
            SelectField {
                id: "status-filter",
                label: "Filtrar por Estado",
                value: "{filters.status.value()}",
                options: status_options,
                onchange: move |value: String| {
                    if let Some(status) = Selector::<AgentStatus>::from_value(&value) {
                        on_filter_change.call(FilterUpdate::status(status));
                    }
                },
            }
        }
    }
}
