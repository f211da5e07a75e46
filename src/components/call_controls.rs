use dioxus::prelude::*;
use lucide_dioxus::{ArrowRightLeft, Mic, MicOff, Pause, Phone, PhoneOff, Volume2};
use crate::softphone::CallStatus;
use crate::components::call_control_state::{CallControlState, ButtonStyle};

#[component]
pub fn CallControls(
    call_status: CallStatus,
    is_on_hold: bool,
    is_muted: bool,
    is_speaker_on: bool,
    on_call: EventHandler<()>,
    on_hangup: EventHandler<()>,
    on_hold: EventHandler<()>,
    on_transfer: EventHandler<()>,
    on_mute: EventHandler<()>,
    on_speaker: EventHandler<()>
) -> Element {
    // Get the control state based on current call status
    let control_state = CallControlState::from_session(call_status, is_on_hold, is_muted, is_speaker_on);
    
    rsx! {
        div {
            class: "controls",
            
            // Primary controls
            div {
                class: "controls-row",
                if control_state.call_visible {
                    button {
                        class: "primary-button primary-button-call",
                        onclick: move |_| on_call.call(()),
                        Phone { size: 24, color: "currentColor", stroke_width: 2 }
                    }
                }
                if control_state.hangup_visible {
                    button {
                        class: "primary-button primary-button-hangup",
                        onclick: move |_| on_hangup.call(()),
                        PhoneOff { size: 24, color: "currentColor", stroke_width: 2 }
                    }
                }
            }
            
            // Secondary controls - only while a call is active
            if control_state.secondary_visible {
                div {
                    class: "controls-row",
                    
                    button {
                        class: control_state.get_button_class(&control_state.hold_style),
                        title: "Espera",
                        onclick: move |_| on_hold.call(()),
                        Pause { size: 16, color: "currentColor", stroke_width: 2 }
                    }
                    
                    button {
                        class: control_state.get_button_class(&ButtonStyle::Normal),
                        title: "Transferir",
                        onclick: move |_| on_transfer.call(()),
                        ArrowRightLeft { size: 16, color: "currentColor", stroke_width: 2 }
                    }
                    
                    button {
                        class: control_state.get_button_class(&control_state.mute_style),
                        title: "Silenciar",
                        onclick: move |_| on_mute.call(()),
                        if control_state.mute_icon_off {
                            MicOff { size: 16, color: "currentColor", stroke_width: 2 }
                        } else {
                            Mic { size: 16, color: "currentColor", stroke_width: 2 }
                        }
                    }
                    
                    button {
                        class: control_state.get_button_class(&control_state.speaker_style),
                        title: "Altavoz",
                        onclick: move |_| on_speaker.call(()),
                        Volume2 { size: 16, color: "currentColor", stroke_width: 2 }
                    }
                }
            }
            
            // Status text
            div {
                class: "controls-status",
                "{control_state.status_line}"
            }
        }
    }
}
