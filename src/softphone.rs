//! Call session state machine.
//!
//! ```text
//! Idle ──dial──▶ Dialing ──timer──▶ Ringing ──timer──▶ Connected
//!   ▲                │                  │                  │
//!   └────────────────┴──── hangup ──────┴──────────────────┘
//! ```
//!
//! The controller is synchronous and owns no timers. Every operation returns
//! the [`Effect`]s the caller must carry out (schedule/cancel timers, show
//! notifications). Timer firings come back in as [`TimerEvent`]s tagged with
//! the [`CallId`] they were scheduled for, and events for any other call are
//! dropped.

use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::notifications::Notification;

pub type CallId = Uuid;

const DTMF_TOAST: Duration = Duration::from_millis(1000);
const TOGGLE_TOAST: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CallStatus {
    #[default]
    Idle,
    Dialing,
    Ringing,
    Connected,
    /// Display only, the simulated flow never reaches it.
    Disconnected,
}

impl CallStatus {
    pub fn is_active(self) -> bool {
        matches!(self, CallStatus::Dialing | CallStatus::Ringing | CallStatus::Connected)
    }

    /// Short indicator text shown next to the status dot.
    pub fn indicator_text(self) -> &'static str {
        match self {
            CallStatus::Idle => "Listo",
            CallStatus::Dialing => "Marcando...",
            CallStatus::Ringing => "Sonando...",
            CallStatus::Connected => "Conectado",
            CallStatus::Disconnected => "Desconectado",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStage {
    Dialing,
    Ringing,
    Connected { on_hold: bool, elapsed_secs: u64 },
}

/// The one call a session can carry. Flags that only make sense during a
/// call live here, so they vanish together with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCall {
    pub id: CallId,
    pub target: String,
    pub stage: CallStage,
    pub muted: bool,
    pub speaker_on: bool,
}

impl ActiveCall {
    fn new(target: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            target,
            stage: CallStage::Dialing,
            muted: false,
            speaker_on: false,
        }
    }

    pub fn status(&self) -> CallStatus {
        match self.stage {
            CallStage::Dialing => CallStatus::Dialing,
            CallStage::Ringing => CallStatus::Ringing,
            CallStage::Connected { .. } => CallStatus::Connected,
        }
    }

    pub fn is_on_hold(&self) -> bool {
        matches!(self.stage, CallStage::Connected { on_hold: true, .. })
    }

    pub fn elapsed_secs(&self) -> u64 {
        match self.stage {
            CallStage::Connected { elapsed_secs, .. } => elapsed_secs,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Ringing,
    Connected,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub call_id: CallId,
    pub kind: TimerKind,
}

/// Work the controller asks its driver to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    /// Schedule the dialing→ringing and ringing→connected timers.
    ScheduleProgress(CallId),
    StartTicker(CallId),
    CancelTimers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Ingrese un número para marcar")]
    EmptyNumber,

    #[error("Ya hay una llamada en curso")]
    CallInProgress,
}

impl SessionError {
    pub fn notification(&self) -> Notification {
        Notification::destructive("Error", self.to_string())
    }
}

/// Flattened view of the session for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    pub status: CallStatus,
    pub dialed_number: String,
    pub current_target: String,
    pub is_on_hold: bool,
    pub is_muted: bool,
    pub is_speaker_on: bool,
    pub elapsed_secs: u64,
}

impl SessionSnapshot {
    /// What the main display line shows: the call target, else the buffer.
    pub fn display_text(&self) -> &str {
        if self.current_target.is_empty() {
            &self.dialed_number
        } else {
            &self.current_target
        }
    }

    pub fn elapsed_text(&self) -> Option<String> {
        (self.status == CallStatus::Connected).then(|| format_elapsed(self.elapsed_secs))
    }
}

/// `MM:SS`, minutes keep growing past 99.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `m:ss`, used in the hangup acknowledgment.
pub fn format_summary_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Default)]
pub struct SessionController {
    dialed_number: String,
    call: Option<ActiveCall>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> CallStatus {
        self.call.as_ref().map(ActiveCall::status).unwrap_or_default()
    }

    pub fn dialed_number(&self) -> &str {
        &self.dialed_number
    }

    pub fn current_call(&self) -> Option<&ActiveCall> {
        self.call.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.call {
            Some(call) => SessionSnapshot {
                status: call.status(),
                dialed_number: self.dialed_number.clone(),
                current_target: call.target.clone(),
                is_on_hold: call.is_on_hold(),
                is_muted: call.muted,
                is_speaker_on: call.speaker_on,
                elapsed_secs: call.elapsed_secs(),
            },
            None => SessionSnapshot {
                dialed_number: self.dialed_number.clone(),
                ..SessionSnapshot::default()
            },
        }
    }

    pub fn dial(&mut self) -> Result<Vec<Effect>, SessionError> {
        if self.call.is_some() {
            warn!("Dial ignored, call already in progress");
            return Err(SessionError::CallInProgress);
        }
        if self.dialed_number.trim().is_empty() {
            return Err(SessionError::EmptyNumber);
        }

        let call = ActiveCall::new(self.dialed_number.clone());
        info!("Dialing {} (call {})", call.target, call.id);

        let effects = vec![
            Effect::ScheduleProgress(call.id),
            Effect::Notify(Notification::info(
                "Marcando",
                format!("Llamando a {}...", call.target),
            )),
        ];
        self.call = Some(call);
        Ok(effects)
    }

    pub fn hangup(&mut self) -> Vec<Effect> {
        let Some(call) = self.call.take() else {
            debug!("Hangup ignored, no active call");
            return Vec::new();
        };
        self.dialed_number.clear();

        let elapsed = call.elapsed_secs();
        info!("Call {} to {} ended after {}s", call.id, call.target, elapsed);

        vec![
            Effect::CancelTimers,
            Effect::Notify(Notification::info(
                "Llamada terminada",
                format!("Duración: {}", format_summary_duration(elapsed)),
            )),
        ]
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Vec<Effect> {
        let Some(call) = self.call.as_mut().filter(|call| call.id == event.call_id) else {
            debug!("Dropping stale {:?} timer for call {}", event.kind, event.call_id);
            return Vec::new();
        };

        match (event.kind, call.stage) {
            (TimerKind::Ringing, CallStage::Dialing) => {
                info!("Call {} ringing", call.id);
                call.stage = CallStage::Ringing;
                Vec::new()
            }
            (TimerKind::Connected, CallStage::Dialing | CallStage::Ringing) => {
                info!("Call {} connected", call.id);
                call.stage = CallStage::Connected { on_hold: false, elapsed_secs: 0 };
                vec![
                    Effect::StartTicker(call.id),
                    Effect::Notify(Notification::info(
                        "Llamada conectada",
                        format!("Conectado con {}", call.target),
                    )),
                ]
            }
            (TimerKind::Tick, CallStage::Connected { on_hold, elapsed_secs }) => {
                call.stage = CallStage::Connected { on_hold, elapsed_secs: elapsed_secs + 1 };
                Vec::new()
            }
            (kind, stage) => {
                debug!("Ignoring {:?} timer in stage {:?}", kind, stage);
                Vec::new()
            }
        }
    }

    /// Idle: append to the dial buffer. During a call: tone-send intent only.
    pub fn key_press(&mut self, key: &str) -> Vec<Effect> {
        if self.call.is_none() {
            self.dialed_number.push_str(key);
            return Vec::new();
        }

        info!("DTMF intent: {}", key);
        vec![Effect::Notify(
            Notification::info("DTMF", format!("Enviando tono: {}", key)).with_duration(DTMF_TOAST),
        )]
    }

    pub fn set_dialed_number(&mut self, number: String) {
        if self.call.is_some() {
            warn!("Dial buffer is read-only during a call");
            return;
        }
        self.dialed_number = number;
    }

    pub fn backspace(&mut self) {
        if self.call.is_none() {
            self.dialed_number.pop();
        }
    }

    pub fn call_back(&mut self, number: String) -> Vec<Effect> {
        info!("Call back selected: {}", number);
        let effect = Effect::Notify(Notification::info(
            "Número seleccionado",
            format!("{} listo para marcar", number),
        ));
        self.dialed_number = number;
        vec![effect]
    }

    pub fn toggle_hold(&mut self) -> Vec<Effect> {
        let Some(call) = self.call.as_mut() else {
            debug!("Hold ignored, no active call");
            return Vec::new();
        };
        let CallStage::Connected { ref mut on_hold, .. } = call.stage else {
            debug!("Hold ignored in stage {:?}", call.stage);
            return Vec::new();
        };

        *on_hold = !*on_hold;
        info!("Call {} hold = {}", call.id, on_hold);
        let notification = if *on_hold {
            Notification::info("Llamada en espera", "La llamada ha sido puesta en espera")
        } else {
            Notification::info("Llamada reanudada", "La llamada ha sido reanudada")
        };
        vec![Effect::Notify(notification)]
    }

    pub fn toggle_mute(&mut self) -> Vec<Effect> {
        let Some(call) = self.call.as_mut() else {
            debug!("Mute ignored, no active call");
            return Vec::new();
        };

        call.muted = !call.muted;
        info!("Call {} muted = {}", call.id, call.muted);
        let notification = if call.muted {
            Notification::info("Micrófono silenciado", "Su micrófono está silenciado")
        } else {
            Notification::info("Micrófono activado", "Audio restaurado")
        };
        vec![Effect::Notify(notification.with_duration(TOGGLE_TOAST))]
    }

    pub fn toggle_speaker(&mut self) -> Vec<Effect> {
        let Some(call) = self.call.as_mut() else {
            debug!("Speaker ignored, no active call");
            return Vec::new();
        };

        call.speaker_on = !call.speaker_on;
        info!("Call {} speaker = {}", call.id, call.speaker_on);
        let notification = if call.speaker_on {
            Notification::info("Altavoz activado", "Audio por altavoz")
        } else {
            Notification::info("Altavoz desactivado", "Audio por auriculares")
        };
        vec![Effect::Notify(notification.with_duration(TOGGLE_TOAST))]
    }

    pub fn transfer(&mut self) -> Vec<Effect> {
        if self.call.is_none() {
            debug!("Transfer ignored, no active call");
            return Vec::new();
        }
        vec![Effect::Notify(Notification::info(
            "Transferencia",
            "Función de transferencia iniciada",
        ))]
    }
}
