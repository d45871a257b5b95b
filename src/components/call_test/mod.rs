use dioxus::prelude::*;

use crate::api;
use crate::components::common::{select_options, Card, Input, SelectField};
use crate::models::{Bimester, RiskLevel, SelectOption, Week, TARGET_AGENT_ID};
use crate::state::{current_timestamp, CallField, CallForm, SubmissionPhase};

#[component]
pub fn CallTriggerForm() -> Element {
    let mut form = use_signal(|| CallForm::new(current_timestamp()));

    // Refresh the timestamp once per second; the task is dropped on unmount
    use_future(move || async move {
        loop {
            #[cfg(target_arch = "wasm32")]
            {
                gloo_timers::future::TimeoutFuture::new(1000).await;
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            }
            form.write().tick(current_timestamp());
        }
    });

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(request) = form.write().begin_submission() else {
            return;
        };

        spawn(async move {
            let outcome = api::calls::start_call(&request).await;
            form.write().finish_submission(outcome);
        });
    };

    let update = move |field: CallField| move |value: String| form.write().set_field(field, value);

    let current = form.read().clone();
    let vars = &current.variables;
    let can_submit = current.can_submit();
    let disabled_class = if can_submit { "hover:bg-blue-700" } else { "opacity-50 cursor-not-allowed" };

    rsx! {
        div { class: "max-w-3xl mx-auto p-4 md:p-8",
            // Header
            header { class: "mb-6",
                h1 { class: "text-3xl font-bold text-gray-900", "Plataforma de Pruebas de Agentes" }
                p { class: "mt-1 text-gray-600",
                    "Agente de Maestrías: "
                    code { class: "bg-gray-200 px-1 rounded", "{TARGET_AGENT_ID}" }
                }
            }

            form { onsubmit: on_submit,
                Card { class: "mb-6",
                    h2 { class: "text-lg font-semibold mb-4", "Configuración de la Llamada" }
                    div { class: "grid md:grid-cols-2 gap-4",
                        Input {
                            id: "from_number",
                            label: "Número de Origen (Tu # de Retell)",
                            input_type: "tel",
                            value: "{current.from_number}",
                            placeholder: "+1888...",
                            required: true,
                            oninput: update(CallField::FromNumber),
                        }
                        Input {
                            id: "to_number",
                            label: "Número de Destino (Contacto)",
                            input_type: "tel",
                            value: "{vars.to_number}",
                            placeholder: "+5255...",
                            required: true,
                            oninput: update(CallField::ToNumber),
                        }
                    }
                }

                Card { class: "mb-6",
                    h2 { class: "text-lg font-semibold mb-4", "Parámetros del Agente (Variables Dinámicas)" }
                    div { class: "grid md:grid-cols-2 gap-4",
                        Input {
                            id: "firstname",
                            label: "Nombre del Contacto (firstname)",
                            value: "{vars.first_name}",
                            required: true,
                            oninput: update(CallField::FirstName),
                        }
                        Input {
                            id: "current_tim",
                            label: "Fecha y Hora (current_tim)",
                            value: "{vars.current_time}",
                            readonly: true,
                            oninput: |_: String| {},
                        }
                    }
                    Input {
                        id: "fecha_inicio",
                        label: "Fecha de Inicio (fecha_inicio)",
                        value: "{vars.start_date}",
                        oninput: update(CallField::StartDate),
                    }
                    div { class: "grid md:grid-cols-2 gap-4",
                        SelectField {
                            id: "week",
                            label: "Semana (week)",
                            value: "{vars.week.value()}",
                            options: select_options::<Week>(None),
                            onchange: update(CallField::Week),
                        }
                        SelectField {
                            id: "current_bimester",
                            label: "Bimestre (current_bimester)",
                            value: "{vars.bimester.value()}",
                            options: select_options::<Bimester>(None),
                            onchange: update(CallField::Bimester),
                        }
                    }
                    SelectField {
                        id: "risk_level",
                        label: "Nivel de Riesgo (risk_level)",
                        value: "{vars.risk_level.value()}",
                        options: select_options::<RiskLevel>(None),
                        onchange: update(CallField::RiskLevel),
                    }
                }

                button {
                    r#type: "submit",
                    class: "w-full px-4 py-3 rounded-lg font-medium text-white bg-blue-600 transition-colors {disabled_class}",
                    disabled: !can_submit,
                    if current.is_submitting() { "Llamando..." } else { "Iniciar Llamada de Prueba" }
                }
            }

            CallOutcome { phase: current.phase.clone() }
        }
    }
}

#[component]
fn CallOutcome(phase: SubmissionPhase) -> Element {
    match phase {
        SubmissionPhase::Succeeded(response) => rsx! {
            div { class: "mt-6 p-4 rounded-lg border bg-green-50 border-green-300 text-green-800",
                h3 { class: "font-semibold", "\u{2705} Llamada iniciada con éxito" }
                p { class: "mt-2",
                    strong { "ID de la llamada: " }
                    "{response.call_id}"
                }
            }
        },
        SubmissionPhase::Failed(message) => rsx! {
            div { class: "mt-6 p-4 rounded-lg border bg-red-50 border-red-300 text-red-800",
                h3 { class: "font-semibold", "\u{274C} Error al iniciar la llamada" }
                p { class: "mt-2", "{message}" }
            }
        },
        SubmissionPhase::Idle | SubmissionPhase::Submitting => rsx! {},
    }
}
