use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant};

use crate::softphone::{CallId, TimerEvent, TimerKind};

/// Delays of the simulated call progression. Both progress delays are
/// measured from the moment the call is dialed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallTiming {
    pub ringing_after: Duration,
    pub connected_after: Duration,
    pub tick: Duration,
}

impl Default for CallTiming {
    fn default() -> Self {
        Self {
            ringing_after: Duration::from_millis(1500),
            connected_after: Duration::from_millis(4000),
            tick: Duration::from_secs(1),
        }
    }
}

/// Owns every spawned timer task of a session.
///
/// Tasks report back through the channel returned by [`CallTimers::new`].
/// Cancelling aborts the tasks outright; dropping the struct cancels too.
pub struct CallTimers {
    timing: CallTiming,
    sender: mpsc::UnboundedSender<TimerEvent>,
    progress: Vec<JoinHandle<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl CallTimers {
    pub fn new(timing: CallTiming) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let timers = Self {
            timing,
            sender,
            progress: Vec::new(),
            ticker: None,
        };
        (timers, receiver)
    }

    pub fn schedule_progress(&mut self, call_id: CallId) {
        self.progress.retain(|task| !task.is_finished());
        let start = Instant::now();
        for (kind, delay) in [
            (TimerKind::Ringing, self.timing.ringing_after),
            (TimerKind::Connected, self.timing.connected_after),
        ] {
            let deadline = start + delay;
            let sender = self.sender.clone();
            self.progress.push(tokio::spawn(async move {
                sleep_until(deadline).await;
                let _ = sender.send(TimerEvent { call_id, kind });
            }));
        }
    }

    pub fn start_ticker(&mut self, call_id: CallId) {
        self.stop_ticker();

        let period = self.timing.tick;
        let sender = self.sender.clone();
        let mut interval = interval_at(Instant::now() + period, period);
        self.ticker = Some(tokio::spawn(async move {
            loop {
                interval.tick().await;
                if sender.send(TimerEvent { call_id, kind: TimerKind::Tick }).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        let pending = self.pending();
        if pending > 0 {
            debug!("Cancelling {} call timer task(s)", pending);
        }
        for task in self.progress.drain(..) {
            task.abort();
        }
        self.stop_ticker();
    }

    /// Number of timer tasks that have not finished yet.
    pub fn pending(&self) -> usize {
        self.progress.iter().filter(|task| !task.is_finished()).count()
            + self.ticker.iter().filter(|task| !task.is_finished()).count()
    }
}

impl Drop for CallTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test(start_paused = true)]
    async fn progress_fires_relative_to_schedule_time() {
        let (mut timers, mut events) = CallTimers::new(CallTiming::default());
        let call_id = Uuid::new_v4();
        let start = Instant::now();
        timers.schedule_progress(call_id);

        let ringing = events.recv().await.unwrap();
        assert_eq!(ringing, TimerEvent { call_id, kind: TimerKind::Ringing });
        assert_eq!(start.elapsed(), Duration::from_millis(1500));

        let connected = events.recv().await.unwrap();
        assert_eq!(connected.kind, TimerKind::Connected);
        assert_eq!(start.elapsed(), Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_waits_one_period_before_first_tick() {
        let (mut timers, mut events) = CallTimers::new(CallTiming::default());
        let start = Instant::now();
        timers.start_ticker(Uuid::new_v4());

        events.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        events.recv().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(2));

        timers.stop_ticker();
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timers_aborts_every_task() {
        let (mut timers, mut events) = CallTimers::new(CallTiming::default());
        timers.schedule_progress(Uuid::new_v4());
        timers.start_ticker(Uuid::new_v4());
        assert_eq!(timers.pending(), 3);

        drop(timers);
        assert_eq!(events.recv().await, None);
    }
}
