//! Runs the watch face: minute ticker, companion and event loop.
//!
//! The face is owned by a single loop that waits on three things at once:
//! a shutdown signal, the next minute tick and the next inbox event. Ticks
//! and temperature updates therefore never interleave inside a render, and
//! no display state is shared between tasks.
//!
//! ```text
//! ┌──────────────┐  TimeFields   ┌────────────┐  set_text  ┌─────────────┐
//! │ minute ticker│──────────────▶│ WatchLoop  │───────────▶│ DisplaySink │
//! └──────────────┘               │ (WatchFace)│            └─────────────┘
//!                                └────────────┘
//!                                   ▲      │ fetch
//!                       temperature │      ▼
//!                                ┌────────────┐
//!                                │ Companion  │
//!                                └────────────┘
//! ```

use super::channel::{channel, Endpoint, Inbox, Outbox};
use super::companion::{Companion, WeatherSource};
use super::config::WatchConfig;
use super::face::{DisplaySink, TickOutcome, WatchFace};
use super::messages::Message;
use super::phrase::PhraseError;
use super::protocol::Dictionary;
use super::schedule::FetchSchedule;
use super::time_fields::TimeFields;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Local, Timelike};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the tick queue. Ticks arrive once a minute.
const TICK_QUEUE: usize = 4;

/// The watch side of the link, driving one [`WatchFace`].
pub struct WatchLoop<S: DisplaySink> {
    face: WatchFace,
    sink: S,
    outbox: Outbox,
    inbox: Inbox,
}

impl<S: DisplaySink> WatchLoop<S> {
    pub fn new(face: WatchFace, sink: S, endpoint: Endpoint) -> Self {
        let (outbox, inbox) = endpoint.split();
        Self { face, sink, outbox, inbox }
    }

    pub fn face(&self) -> &WatchFace {
        &self.face
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders the first minute and asks for the weather straight away.
    pub fn start(&mut self, time: &TimeFields) -> Result<(), PhraseError> {
        let outcome = self.tick(time)?;
        if !outcome.fetch_weather {
            self.request_weather();
        }
        Ok(())
    }

    /// Renders one minute, requesting the weather when it is due.
    pub fn tick(&mut self, time: &TimeFields) -> Result<TickOutcome, PhraseError> {
        let outcome = self.face.on_tick(time, &mut self.sink)?;
        if outcome.fetch_weather {
            self.request_weather();
        }
        Ok(outcome)
    }

    /// Applies every inbox event that is already waiting.
    pub fn drain_inbox(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.inbox.try_recv() {
            self.face.on_inbox(event, &mut self.sink);
            applied += 1;
        }
        applied
    }

    fn request_weather(&self) {
        match self.outbox.send(&Dictionary::fetch_request()) {
            Ok(()) => tracing::debug!("weather fetch requested"),
            Err(e) => self.face.on_send_failed(&e),
        }
    }

    /// Processes ticks and inbox events until `shutdown` resolves or the ticks run out.
    ///
    /// Returns the sink so callers can inspect the final display.
    pub async fn run<F>(mut self, mut ticks: mpsc::Receiver<TimeFields>, shutdown: F) -> Result<S>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut inbox_open = true;

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    msg_info!(Message::WatchShuttingDown);
                    break;
                }
                event = self.inbox.recv(), if inbox_open => match event {
                    Some(event) => self.face.on_inbox(event, &mut self.sink),
                    None => {
                        tracing::warn!("companion closed the link, temperature will no longer update");
                        inbox_open = false;
                    }
                },
                tick = ticks.recv() => match tick {
                    Some(time) => {
                        self.tick(&time)?;
                    }
                    None => break,
                },
            }
        }

        Ok(self.sink)
    }
}

/// Time left until the next wall-clock minute starts.
pub fn until_next_minute(second: u32, nanosecond: u32) -> Duration {
    // Leap seconds report nanosecond values above one billion.
    let elapsed = Duration::from_secs(second.min(59) as u64) + Duration::from_nanos((nanosecond % 1_000_000_000) as u64);
    Duration::from_secs(60).saturating_sub(elapsed).max(Duration::from_millis(1))
}

/// Sends the local time at the start of every minute until the receiver is gone.
pub async fn minute_ticker(tx: mpsc::Sender<TimeFields>) {
    loop {
        let now = Local::now();
        tokio::time::sleep(until_next_minute(now.second(), now.nanosecond())).await;

        if tx.send(TimeFields::now()).await.is_err() {
            msg_debug!(Message::TickerStopped);
            break;
        }
    }
}

/// Resolves on SIGTERM or SIGINT (unix) or Ctrl-C (windows).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut sigterm, mut sigint) = match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(sigterm), Ok(sigint)) => (sigterm, sigint),
            (Err(_), _) => {
                msg_error!(Message::FailedToCreateSigtermHandler);
                return std::future::pending().await;
            }
            (_, Err(_)) => {
                msg_error!(Message::FailedToCreateSigintHandler);
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => msg_info!(Message::WatchReceivedSigterm),
            _ = sigint.recv() => msg_info!(Message::WatchReceivedSigint),
        }
    }

    #[cfg(windows)]
    {
        match tokio::signal::ctrl_c().await {
            Ok(()) => msg_info!(Message::WatchReceivedCtrlC),
            Err(e) => {
                msg_error!(Message::WatchCtrlCListenFailed(e.to_string()));
                std::future::pending::<()>().await;
            }
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        msg_warning!(Message::WatchSignalHandlingNotSupported);
        std::future::pending::<()>().await;
    }
}

/// Runs the face with a live clock until a shutdown signal arrives.
pub async fn run<W, S>(config: WatchConfig, source: W, sink: S) -> Result<()>
where
    W: WeatherSource,
    S: DisplaySink,
{
    let (watch_end, companion_end) = channel(config.mailbox_capacity);
    let face = WatchFace::new(FetchSchedule::new(config.refresh_interval), config.date_limit);
    let mut watch = WatchLoop::new(face, sink, watch_end);
    let companion = Companion::new(source, companion_end);

    msg_info!(Message::WatchStarted {
        refresh_interval: watch.face.schedule().interval(),
    });

    let (tick_tx, tick_rx) = mpsc::channel(TICK_QUEUE);
    let ticker = tokio::spawn(minute_ticker(tick_tx));

    watch.start(&TimeFields::now())?;

    // The companion only ends with an error; a clean end means the watch hung up first.
    let companion = async move {
        if let Err(e) = companion.run().await {
            msg_warning!(Message::WatchError(e.to_string()));
        }
        msg_info!(Message::CompanionStopped);
        std::future::pending::<()>().await;
    };

    let result = tokio::select! {
        result = watch.run(tick_rx, shutdown_signal()) => result.map(|_| ()),
        _ = companion => Ok(()),
    };

    ticker.abort();
    match &result {
        Ok(()) => msg_info!(Message::WatchExitedNormally),
        Err(e) => msg_error!(Message::WatchError(e.to_string())),
    }
    result
}
