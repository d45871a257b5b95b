use dioxus::prelude::*;

use crate::models::SelectOption;

/// `(value, label)` pairs for a `select`, optionally led by a wildcard entry.
pub fn select_options<T: SelectOption>(wildcard: Option<(&'static str, &'static str)>) -> Vec<(&'static str, &'static str)> {
    wildcard
        .into_iter()
        .chain(T::ALL.iter().map(|option| (option.value(), option.value())))
        .collect()
}

#[component]
pub fn LoadingSpinner(#[props(default = "".to_string())] label: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center gap-3 p-8",
            div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
            if !label.is_empty() {
                p { class: "text-center text-gray-500", "{label}" }
            }
        }
    }
}

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded text-center",
            p { "{message}" }
        }
    }
}

#[component]
pub fn Card(children: Element, #[props(default = "".to_string())] class: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 {class}",
            {children}
        }
    }
}

#[component]
pub fn Badge(text: String, #[props(default = "bg-gray-100 text-gray-800".to_string())] color_class: String) -> Element {
    rsx! {
        span { class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {color_class}",
            "{text}"
        }
    }
}

#[component]
pub fn Input(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = "".to_string())]
    placeholder: String,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    readonly: bool,
) -> Element {
    let readonly_class = if readonly { "bg-gray-100 text-gray-600 cursor-default" } else { "" };

    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "{id}",
                "{label}"
                if required {
                    span { class: "text-red-500", " *" }
                }
            }
            input {
                id: "{id}",
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 {readonly_class}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                readonly: readonly,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn SelectField(
    id: String,
    label: String,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex-1 mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1", r#for: "{id}", "{label}" }
            select {
                id: "{id}",
                class: "w-full px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-blue-500",
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                for (option_value, option_label) in options.iter() {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: *option_value == value.as_str(),
                        "{option_label}"
                    }
                }
            }
        }
    }
}
