use dioxus::prelude::*;
use lucide_dioxus::Delete;

#[component]
pub fn CallMakeInput(
    dialed_number: String,
    enabled: bool,
    on_change: EventHandler<String>,
    on_backspace: EventHandler<()>,
    on_make_call: EventHandler<()>
) -> Element {
    let backspace_enabled = enabled && !dialed_number.is_empty();
    
    rsx! {
        div {
            class: "dial-row",
            input {
                r#type: "tel",
                placeholder: "Ingrese número de teléfono",
                class: "text-input dial-input",
                value: "{dialed_number}",
                oninput: move |evt| on_change.call(evt.value()),
                disabled: !enabled,
                onkeypress: move |evt| {
                    if evt.key() == dioxus::events::Key::Enter && enabled {
                        on_make_call.call(());
                    }
                }
            }
            button {
                class: "outline-button",
                disabled: !backspace_enabled,
                onclick: move |_| {
                    if backspace_enabled {
                        on_backspace.call(())
                    }
                },
                Delete { size: 16, color: "currentColor", stroke_width: 2 }
            }
        }
    }
}
