use dioxus::prelude::*;
use lucide_dioxus::{LogOut, Phone};

#[component]
pub fn UserInfoBar(
    username: String,
    extension: String,
    on_logout: EventHandler<()>
) -> Element {
    rsx! {
        div {
            class: "header",
            
            div {
                class: "header-identity",
                div {
                    class: "brand-mark",
                    Phone { size: 20, color: "white", stroke_width: 2 }
                }
                div {
                    h1 { class: "header-title", "Vicidial Softphone" }
                    div {
                        class: "header-badges",
                        span { class: "badge badge-outline", "{username}" }
                        span { class: "badge badge-outline", "Ext: {extension}" }
                    }
                }
            }
            
            button {
                class: "ghost-button",
                title: "Cerrar sesión",
                onclick: move |_| on_logout.call(()),
                LogOut { size: 16, color: "currentColor", stroke_width: 2 }
            }
        }
    }
}
