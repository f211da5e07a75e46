use dioxus::prelude::*;
use crate::softphone::{CallStatus, SessionSnapshot};

#[component]
pub fn CallDisplay(
    session: SessionSnapshot
) -> Element {
    let status = session.status;
    
    let status_class = match status {
        CallStatus::Connected => "status-text status-success",
        CallStatus::Dialing | CallStatus::Ringing => "status-text status-warning",
        CallStatus::Disconnected => "status-text status-destructive",
        CallStatus::Idle => "status-text",
    };
    
    // Indicator dot, animated while the call is progressing
    let dot_class = match status {
        CallStatus::Connected => "status-dot dot-success pulse",
        CallStatus::Dialing => "status-dot dot-warning bounce",
        CallStatus::Ringing => "status-dot dot-warning pulse",
        CallStatus::Disconnected => "status-dot dot-destructive",
        CallStatus::Idle => "status-dot dot-muted",
    };
    
    let display_text = match session.display_text() {
        "" => "Ingrese número".to_string(),
        text => text.to_string(),
    };
    let connected = status == CallStatus::Connected;
    
    rsx! {
        div {
            class: "display",
            
            div {
                class: "display-header",
                div {
                    class: "display-status",
                    span { class: dot_class }
                    span {
                        class: status_class,
                        "{status.indicator_text()}"
                    }
                }
                div {
                    class: "display-brand",
                    "Vicidial Phone"
                }
            }
            
            div {
                class: "display-main",
                div {
                    class: "display-number",
                    "{display_text}"
                }
                {session.elapsed_text().map(|elapsed| rsx! {
                    div {
                        class: "display-elapsed",
                        "{elapsed}"
                    }
                })}
            }
            
            // Level bars
            div {
                class: "display-bars",
                for i in 0..5 {
                    div {
                        key: "{i}",
                        class: (if connected && i < 3 { "bar bar-lit pulse" } else if connected { "bar pulse" } else { "bar" }),
                    }
                }
            }
        }
    }
}
