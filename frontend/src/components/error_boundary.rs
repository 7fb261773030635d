//! Error boundary components for the search iframe.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#870087; font-size: 32px; padding: 10px; margin: 15px;",
                        "Une erreur est survenue",
                    }
                    p {
                        style: "color:#3C3C3C; font-size: 18px; padding: 10px; margin: 15px;",
                        "Veuillez recharger la page. ({boundary_name})"
                    }
                    pre {
                        style: "color:black; border: 1px solid #E5E5E5; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error = _err.error();
                let error_txt = if let Some(err) = error {
                    format!("{:#?}", err.0)
                } else {
                    "Erreur inconnue".to_string()
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-secondary-button",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Réessayer"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Inline error block; the search screen keeps working around it.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-display",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            p {
                style: "color:#E60039; font-size: 18px; padding: 10px; margin: 5px;",
                "{error_txt}"
            }

            {children}
        }
    }
}
