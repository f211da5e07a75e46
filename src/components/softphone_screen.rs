use dioxus::prelude::*;
use futures_util::StreamExt;
use crate::call_timers::CallTiming;
use crate::commands::SessionCommand;
use crate::components::{CallControls, CallDisplay, CallHistory, CallMakeInput, Keypad, Toasts, UserInfoBar};
use crate::history::CallRecord;
use crate::session_driver::SessionDriver;
use crate::softphone::{CallStatus, SessionSnapshot};

#[component]
pub fn SoftphoneScreen(
    username: String,
    extension: String,
    call_timing: CallTiming,
    history: Vec<CallRecord>,
    on_logout: EventHandler<()>
) -> Element {
    let toasts = use_context::<Toasts>();
    let session = use_signal(SessionSnapshot::default);
    
    // The coroutine owns the session driver and with it every call timer.
    // Unmounting this screen drops the driver, which aborts pending timers.
    let session_coroutine = use_coroutine(move |mut rx: UnboundedReceiver<SessionCommand>| {
        let mut toasts = toasts;
        let mut session = session;
        
        async move {
            let mut driver = SessionDriver::new(call_timing);
            
            loop {
                tokio::select! {
                    // Process commands from UI
                    command = rx.next() => {
                        let Some(command) = command else {
                            log::info!("Session command channel closed");
                            break;
                        };
                        toasts.extend(driver.handle_command(command));
                    }
                    
                    // Process timer firings for the current call
                    Some(event) = driver.next_timer_event() => {
                        toasts.extend(driver.handle_timer_event(event));
                    }
                }
                
                session.set(driver.snapshot());
            }
        }
    });
    
    let snapshot = session.read().clone();
    let is_idle = snapshot.status == CallStatus::Idle;
    
    rsx! {
        div {
            class: "softphone",
            
            UserInfoBar {
                username: username,
                extension: extension,
                on_logout: move |_| on_logout.call(())
            }
            
            div {
                class: "softphone-grid",
                
                // Main phone column
                div {
                    class: "softphone-main",
                    
                    CallDisplay {
                        session: snapshot.clone()
                    }
                    
                    CallMakeInput {
                        dialed_number: snapshot.dialed_number.clone(),
                        enabled: is_idle,
                        on_change: move |number| session_coroutine.send(SessionCommand::SetDialedNumber(number)),
                        on_backspace: move |_| session_coroutine.send(SessionCommand::Backspace),
                        on_make_call: move |_| session_coroutine.send(SessionCommand::Dial)
                    }
                    
                    Keypad {
                        disabled: false,
                        on_key_press: move |key| session_coroutine.send(SessionCommand::KeyPress(key))
                    }
                    
                    CallControls {
                        call_status: snapshot.status,
                        is_on_hold: snapshot.is_on_hold,
                        is_muted: snapshot.is_muted,
                        is_speaker_on: snapshot.is_speaker_on,
                        on_call: move |_| session_coroutine.send(SessionCommand::Dial),
                        on_hangup: move |_| session_coroutine.send(SessionCommand::Hangup),
                        on_hold: move |_| session_coroutine.send(SessionCommand::ToggleHold),
                        on_transfer: move |_| session_coroutine.send(SessionCommand::Transfer),
                        on_mute: move |_| session_coroutine.send(SessionCommand::ToggleMute),
                        on_speaker: move |_| session_coroutine.send(SessionCommand::ToggleSpeaker)
                    }
                }
                
                // History sidebar
                div {
                    class: "softphone-side",
                    CallHistory {
                        calls: history,
                        on_call_back: move |number| session_coroutine.send(SessionCommand::CallBack(number))
                    }
                }
            }
        }
    }
}
