use dioxus::prelude::*;
use lucide_dioxus::{Lock, Phone, Server, User, Wifi, WifiOff};
use crate::login::{ConnectionStatus, Credentials};

#[component]
pub fn LoginScreen(
    connection_status: ConnectionStatus,
    error_message: Option<String>,
    on_login: EventHandler<Credentials>
) -> Element {
    let mut credentials = use_signal(Credentials::default);
    
    let is_connecting = connection_status.is_connecting();
    let submit_enabled = !is_connecting && credentials.read().is_complete();
    let (badge_label, badge_variant) = connection_status.badge();
    
    rsx! {
        div {
            class: "login-page",
            
            div {
                class: "card login-card",
                
                div {
                    class: "login-header",
                    div {
                        class: "brand-mark brand-mark-large",
                        Phone { size: 32, color: "white", stroke_width: 2 }
                    }
                    h2 {
                        style: "
                            font-size: 1.5rem;
                            font-weight: 500;
                            color: #1E293B;
                            margin: 0 0 8px 0;
                        ",
                        "Vicidial Softphone"
                    }
                    p {
                        style: "
                            font-size: 0.875rem;
                            color: #64748B;
                            margin: 0 0 16px 0;
                        ",
                        "Conecte con su servidor Vicidial para comenzar"
                    }
                    
                    // Status badge
                    span {
                        class: badge_variant.class(),
                        match connection_status {
                            ConnectionStatus::Connected => rsx! {
                                Wifi { size: 12, color: "currentColor", stroke_width: 2 }
                            },
                            ConnectionStatus::Connecting => rsx! {
                                span { class: "spinner" }
                            },
                            ConnectionStatus::Error | ConnectionStatus::Disconnected => rsx! {
                                WifiOff { size: 12, color: "currentColor", stroke_width: 2 }
                            },
                        }
                        "{badge_label}"
                    }
                }
                
                form {
                    class: "login-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if submit_enabled {
                            on_login.call(credentials.read().clone());
                        }
                    },
                    
                    div {
                        label {
                            class: "field-label",
                            Server { size: 16, color: "currentColor", stroke_width: 2 }
                            "Servidor Vicidial"
                        }
                        input {
                            class: "text-input",
                            r#type: "url",
                            placeholder: "https://your-vicidial-server.com",
                            value: "{credentials.read().server}",
                            oninput: move |evt| credentials.write().server = evt.value(),
                            disabled: is_connecting
                        }
                    }
                    
                    div {
                        label {
                            class: "field-label",
                            User { size: 16, color: "currentColor", stroke_width: 2 }
                            "Usuario"
                        }
                        input {
                            class: "text-input",
                            r#type: "text",
                            placeholder: "Nombre de usuario",
                            value: "{credentials.read().username}",
                            oninput: move |evt| credentials.write().username = evt.value(),
                            disabled: is_connecting
                        }
                    }
                    
                    div {
                        label {
                            class: "field-label",
                            Lock { size: 16, color: "currentColor", stroke_width: 2 }
                            "Contraseña"
                        }
                        input {
                            class: "text-input",
                            r#type: "password",
                            placeholder: "Contraseña",
                            value: "{credentials.read().password}",
                            oninput: move |evt| credentials.write().password = evt.value(),
                            disabled: is_connecting
                        }
                    }
                    
                    div {
                        label {
                            class: "field-label",
                            Phone { size: 16, color: "currentColor", stroke_width: 2 }
                            "Extensión"
                        }
                        input {
                            class: "text-input",
                            r#type: "text",
                            placeholder: "1001",
                            value: "{credentials.read().extension}",
                            oninput: move |evt| credentials.write().extension = evt.value(),
                            disabled: is_connecting
                        }
                    }
                    
                    {error_message.map(|message| rsx! {
                        div {
                            class: "error-box",
                            p { "{message}" }
                        }
                    })}
                    
                    button {
                        r#type: "submit",
                        class: if submit_enabled { "submit-button" } else { "submit-button submit-button-disabled" },
                        disabled: !submit_enabled,
                        if is_connecting {
                            span { class: "spinner spinner-light" }
                            "Conectando..."
                        } else {
                            Wifi { size: 16, color: "currentColor", stroke_width: 2 }
                            "Conectar"
                        }
                    }
                }
            }
        }
    }
}
