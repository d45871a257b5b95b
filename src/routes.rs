use dioxus::prelude::*;

use crate::components::{call_test::CallTriggerForm, dashboard::AgentDashboard};
use crate::AppLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},

        #[route("/retell-test")]
        RetellTest {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Route handler components
#[component]
fn Dashboard() -> Element {
    rsx! {
        AgentDashboard {}
    }
}

#[component]
fn RetellTest() -> Element {
    rsx! {
        CallTriggerForm {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center text-gray-500",
            h2 { class: "text-xl font-semibold", "Página no encontrada" }
            p { class: "mt-2 font-mono", "/{path}" }
            Link { class: "mt-4 text-blue-600 hover:text-blue-700", to: Route::Dashboard {}, "Volver al panel" }
        }
    }
}
