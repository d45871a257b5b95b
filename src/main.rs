//! Agent Command Center - Full Stack Dioxus Application
//!
//! A dashboard for monitoring AI calling agents, plus a test page that
//! triggers outbound calls through the Retell AI voice API.
//!
//! Runs in fullstack mode with Axum backend and Dioxus frontend.

mod components;
mod models;
mod routes;
mod state;
mod api;

#[cfg(not(target_arch = "wasm32"))]
mod server;

use dioxus::prelude::*;
use routes::Route;

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    // On native, handle server vs app mode
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Load environment variables
        dotenvy::dotenv().ok();

        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("agent_command_center=info,tower_http=info")))
            .init();

        let config = server::ServerConfig::from_env();

        // Determine run mode
        let args: Vec<String> = std::env::args().collect();

        if args.contains(&"--server".to_string()) {
            // Run server only
            run_server(config);
        } else {
            // Run frontend (desktop mode) with embedded server
            std::thread::spawn(move || run_server(config));

            // Give server time to start
            std::thread::sleep(std::time::Duration::from_millis(500));

            // Run frontend
            run_app();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_server(config: server::ServerConfig) {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start Tokio runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async {
        tracing::info!("Starting Agent Command Center server on port {}", config.port);
        if let Err(e) = server::run_server(config).await {
            tracing::error!("Server error: {}", e);
        }
    });
}

fn run_app() {
    // Get API URL - on wasm use window location, on native use env var
    #[cfg(target_arch = "wasm32")]
    let api_url = {
        // On web, use the same origin as the page (for same-origin API requests)
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| api::DEFAULT_API_URL.to_string())
    };

    #[cfg(not(target_arch = "wasm32"))]
    let api_url = std::env::var("API_URL")
        .unwrap_or_else(|_| api::DEFAULT_API_URL.to_string());

    // The call endpoint may live on a separate relay; default to the same origin
    #[cfg(target_arch = "wasm32")]
    let call_api_url = option_env!("CALL_API_URL")
        .map(str::to_string)
        .unwrap_or_else(|| api_url.clone());

    #[cfg(not(target_arch = "wasm32"))]
    let call_api_url = std::env::var("CALL_API_URL")
        .unwrap_or_else(|_| api_url.clone());

    api::init_api_clients(&api_url, &call_api_url);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        Router::<Route> {}
    }
}

/// Layout component that wraps every page
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-100",
            TopBar {}

            main { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = [
        (Route::Dashboard {}, "Agentes", "\u{1F4CA}"),
        (Route::RetellTest {}, "Prueba de llamadas", "\u{1F4DE}"),
    ];

    rsx! {
        header { class: "bg-white border-b px-6 py-3 flex items-center justify-between",
            // Logo
            div { class: "flex items-center gap-3",
                span { class: "text-2xl", "\u{1F916}" }
                h1 { class: "text-xl font-bold text-gray-800", "Agent Command Center" }
            }

            nav { class: "flex items-center gap-2",
                for (route, label, icon) in nav_items.iter() {
                    Link {
                        key: "{label}",
                        to: route.clone(),
                        class: if current_route == *route {
                            "flex items-center gap-2 px-4 py-2 rounded-lg bg-blue-50 text-blue-600 font-medium"
                        } else {
                            "flex items-center gap-2 px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100 transition-colors"
                        },
                        span { "{icon}" }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}
