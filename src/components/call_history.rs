use dioxus::prelude::*;
use lucide_dioxus::{Clock, Phone, PhoneIncoming, PhoneMissed, PhoneOutgoing};
use crate::history::{CallIcon, CallRecord};

#[component]
pub fn CallHistory(
    calls: Vec<CallRecord>,
    on_call_back: EventHandler<String>
) -> Element {
    rsx! {
        div {
            class: "card history",
            
            div {
                class: "card-title",
                Clock { size: 20, color: "currentColor", stroke_width: 2 }
                "Historial de Llamadas"
            }
            
            div {
                class: "history-list",
                if calls.is_empty() {
                    div {
                        class: "history-empty",
                        Phone { size: 32, color: "currentColor", stroke_width: 2 }
                        p { "No hay llamadas registradas" }
                    }
                } else {
                    for call in calls.iter().cloned() {
                        HistoryRow {
                            key: "{call.id}",
                            call: call,
                            on_call_back: on_call_back
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(
    call: CallRecord,
    on_call_back: EventHandler<String>
) -> Element {
    let number = call.number.clone();
    let badge_class = call.status.badge().class();
    
    rsx! {
        div {
            class: "history-row",
            
            div {
                class: "history-info",
                match call.icon() {
                    CallIcon::Missed => rsx! {
                        PhoneMissed { size: 16, color: "#DC2626", stroke_width: 2 }
                    },
                    CallIcon::Incoming => rsx! {
                        PhoneIncoming { size: 16, color: "#059669", stroke_width: 2 }
                    },
                    CallIcon::Outgoing => rsx! {
                        PhoneOutgoing { size: 16, color: "#2563EB", stroke_width: 2 }
                    },
                    CallIcon::Generic => rsx! {
                        Phone { size: 16, color: "#64748B", stroke_width: 2 }
                    },
                }
                div {
                    class: "history-text",
                    div {
                        class: "history-title",
                        span { class: "history-name", "{call.title()}" }
                        span { class: badge_class, "{call.status.label()}" }
                    }
                    div {
                        class: "history-meta",
                        span { "{call.time_text()}" }
                        {call.duration_text().map(|duration| rsx! {
                            span {
                                class: "history-duration",
                                Clock { size: 12, color: "currentColor", stroke_width: 2 }
                                "{duration}"
                            }
                        })}
                    }
                }
            }
            
            button {
                class: "ghost-button",
                title: "Llamar",
                onclick: move |_| on_call_back.call(number.clone()),
                Phone { size: 12, color: "currentColor", stroke_width: 2 }
            }
        }
    }
}
