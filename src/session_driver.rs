use log::{info, warn};
use tokio::sync::mpsc;

use crate::call_timers::{CallTiming, CallTimers};
use crate::commands::SessionCommand;
use crate::notifications::Notification;
use crate::softphone::{Effect, SessionController, SessionSnapshot, TimerEvent};

/// Runs a [`SessionController`] against real tokio timers.
///
/// The UI coroutine owns one driver per logged-in session and feeds it both
/// UI commands and the timer events it scheduled itself.
pub struct SessionDriver {
    session: SessionController,
    timers: CallTimers,
    timer_events: mpsc::UnboundedReceiver<TimerEvent>,
}

impl SessionDriver {
    pub fn new(timing: CallTiming) -> Self {
        let (timers, timer_events) = CallTimers::new(timing);
        Self {
            session: SessionController::new(),
            timers,
            timer_events,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Resolves when one of this session's timers fires.
    pub async fn next_timer_event(&mut self) -> Option<TimerEvent> {
        self.timer_events.recv().await
    }

    /// Applies a UI command and returns the notifications to display.
    pub fn handle_command(&mut self, command: SessionCommand) -> Vec<Notification> {
        info!("Session command: {:?}", command);

        let effects = match command {
            SessionCommand::SetDialedNumber(number) => {
                self.session.set_dialed_number(number);
                Vec::new()
            }
            SessionCommand::Backspace => {
                self.session.backspace();
                Vec::new()
            }
            SessionCommand::KeyPress(key) => self.session.key_press(&key),
            SessionCommand::Dial => match self.session.dial() {
                Ok(effects) => effects,
                Err(e) => {
                    warn!("Dial rejected: {}", e);
                    return vec![e.notification()];
                }
            },
            SessionCommand::Hangup => self.session.hangup(),
            SessionCommand::ToggleHold => self.session.toggle_hold(),
            SessionCommand::ToggleMute => self.session.toggle_mute(),
            SessionCommand::ToggleSpeaker => self.session.toggle_speaker(),
            SessionCommand::Transfer => self.session.transfer(),
            SessionCommand::CallBack(number) => self.session.call_back(number),
        };

        self.apply(effects)
    }

    pub fn handle_timer_event(&mut self, event: TimerEvent) -> Vec<Notification> {
        let effects = self.session.on_timer(event);
        self.apply(effects)
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notification) => notifications.push(notification),
                Effect::ScheduleProgress(call_id) => {
                    // a new attempt never inherits timers from an older one
                    self.timers.cancel_all();
                    self.timers.schedule_progress(call_id);
                }
                Effect::StartTicker(call_id) => self.timers.start_ticker(call_id),
                Effect::CancelTimers => self.timers.cancel_all(),
            }
        }
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::softphone::{CallStatus, TimerKind};
    use std::time::Duration;
    use tokio::time::{timeout, Instant};

    async fn step(driver: &mut SessionDriver) -> TimerEvent {
        let event = driver.next_timer_event().await.unwrap();
        driver.handle_timer_event(event);
        event
    }

    fn start_call(driver: &mut SessionDriver, number: &str) {
        driver.handle_command(SessionCommand::SetDialedNumber(number.to_string()));
        let notes = driver.handle_command(SessionCommand::Dial);
        assert_eq!(notes[0].title, "Marcando");
    }

    #[tokio::test(start_paused = true)]
    async fn call_progresses_on_schedule() {
        let mut driver = SessionDriver::new(CallTiming::default());
        let started = Instant::now();
        start_call(&mut driver, "+34911111111");
        assert_eq!(driver.snapshot().status, CallStatus::Dialing);

        let event = step(&mut driver).await;
        assert_eq!(event.kind, TimerKind::Ringing);
        assert_eq!(started.elapsed(), Duration::from_millis(1500));
        assert_eq!(driver.snapshot().status, CallStatus::Ringing);

        let event = step(&mut driver).await;
        assert_eq!(event.kind, TimerKind::Connected);
        assert_eq!(started.elapsed(), Duration::from_millis(4000));
        assert_eq!(driver.snapshot().status, CallStatus::Connected);

        for _ in 0..65 {
            assert_eq!(step(&mut driver).await.kind, TimerKind::Tick);
        }
        assert_eq!(started.elapsed(), Duration::from_secs(69));
        assert_eq!(driver.snapshot().elapsed_text().as_deref(), Some("01:05"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_dial_schedules_nothing() {
        let mut driver = SessionDriver::new(CallTiming::default());
        driver.handle_command(SessionCommand::SetDialedNumber("  ".to_string()));
        let notes = driver.handle_command(SessionCommand::Dial);

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].description, "Ingrese un número para marcar");
        assert_eq!(driver.snapshot().status, CallStatus::Idle);
        assert_eq!(driver.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn hangup_while_ringing_cancels_pending_connect() {
        let mut driver = SessionDriver::new(CallTiming::default());
        start_call(&mut driver, "100");
        step(&mut driver).await;
        assert_eq!(driver.snapshot().status, CallStatus::Ringing);

        driver.handle_command(SessionCommand::Hangup);
        assert_eq!(driver.pending_timers(), 0);

        let late = timeout(Duration::from_secs(10), driver.next_timer_event()).await;
        assert!(late.is_err(), "no timer may fire after hangup");
        assert_eq!(driver.snapshot().status, CallStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_stops_on_hangup_and_restarts_from_zero() {
        let mut driver = SessionDriver::new(CallTiming::default());
        start_call(&mut driver, "100");
        step(&mut driver).await;
        step(&mut driver).await;
        for _ in 0..3 {
            step(&mut driver).await;
        }
        assert_eq!(driver.snapshot().elapsed_secs, 3);

        let notes = driver.handle_command(SessionCommand::Hangup);
        assert_eq!(notes[0].description, "Duración: 0:03");
        assert_eq!(driver.snapshot().elapsed_secs, 0);
        assert!(timeout(Duration::from_secs(5), driver.next_timer_event()).await.is_err());

        start_call(&mut driver, "200");
        let started = Instant::now();
        step(&mut driver).await;
        step(&mut driver).await;
        assert_eq!(started.elapsed(), Duration::from_millis(4000));
        assert_eq!(driver.snapshot().elapsed_secs, 0);
        step(&mut driver).await;
        assert_eq!(driver.snapshot().elapsed_secs, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn key_press_during_call_is_tone_only() {
        let mut driver = SessionDriver::new(CallTiming::default());
        start_call(&mut driver, "100");
        let notes = driver.handle_command(SessionCommand::KeyPress("9".to_string()));

        assert_eq!(notes[0].title, "DTMF");
        assert_eq!(driver.snapshot().dialed_number, "100");
    }
}
