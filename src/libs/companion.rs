//! Host side of the message link.
//!
//! The companion waits for fetch requests from the watch and answers each one
//! with the current reading of a [`WeatherSource`]. It also pushes a reading
//! once on start-up so the face does not wait half an hour for its first
//! temperature.
//!
//! When no reading is available the reply says so explicitly:
//! `City = "Location Unavailable"` and `Temperature = "N/A"` as text. The
//! watch treats a text temperature as "no reading" and keeps what it shows.

use super::channel::{ChannelError, Endpoint, Inbox, InboxEvent, Outbox};
use super::config::WeatherConfig;
use super::messages::Message;
use super::protocol::{Dictionary, MessageKey, ProtocolError, TupleValue};
use super::temperature::round_celsius;
use crate::msg_error_anyhow;
use anyhow::Result;

pub const LOCATION_UNAVAILABLE: &str = "Location Unavailable";
pub const NOT_AVAILABLE: &str = "N/A";

/// A temperature reading and the place it was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub celsius: f64,
    pub city: String,
}

impl Reading {
    pub fn from_kelvin(kelvin: f64, city: impl Into<String>) -> Self {
        Self {
            celsius: kelvin - 273.15,
            city: city.into(),
        }
    }

    /// Whole degrees as the watch displays them.
    pub fn whole_degrees(&self) -> i32 {
        round_celsius(self.celsius)
    }
}

/// Anything that can tell the current temperature.
#[allow(async_fn_in_trait)]
pub trait WeatherSource {
    async fn current(&self) -> Result<Reading>;
}

/// A source that always reports the configured reading.
#[derive(Debug, Clone, Default)]
pub struct StaticWeather {
    reading: Option<Reading>,
}

impl StaticWeather {
    pub fn new(reading: Option<Reading>) -> Self {
        Self { reading }
    }

    pub fn celsius(celsius: f64, city: impl Into<String>) -> Self {
        Self::new(Some(Reading {
            celsius,
            city: city.into(),
        }))
    }

    pub fn kelvin(kelvin: f64, city: impl Into<String>) -> Self {
        Self::new(Some(Reading::from_kelvin(kelvin, city)))
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }
}

impl From<&WeatherConfig> for StaticWeather {
    fn from(config: &WeatherConfig) -> Self {
        match config.temperature {
            Some(celsius) => Self::celsius(celsius, config.city.clone()),
            None => Self::unavailable(),
        }
    }
}

impl WeatherSource for StaticWeather {
    async fn current(&self) -> Result<Reading> {
        self.reading
            .clone()
            .ok_or_else(|| msg_error_anyhow!(Message::WeatherUnavailable("no temperature configured".to_string())))
    }
}

pub struct Companion<W: WeatherSource> {
    source: W,
    outbox: Outbox,
    inbox: Inbox,
}

impl<W: WeatherSource> Companion<W> {
    pub fn new(source: W, endpoint: Endpoint) -> Self {
        let (outbox, inbox) = endpoint.split();
        Self { source, outbox, inbox }
    }

    /// Serves fetch requests until the watch side goes away.
    pub async fn run(mut self) -> Result<()> {
        self.push_reading().await?;

        while let Some(event) = self.inbox.recv().await {
            match event {
                InboxEvent::Received(dict) if dict.contains(MessageKey::Fetch) => {
                    tracing::debug!("fetch request received");
                    self.push_reading().await?;
                }
                InboxEvent::Received(dict) => {
                    tracing::debug!(tuples = dict.len(), "message without fetch flag ignored");
                }
                InboxEvent::Dropped(reason) => {
                    // A lost fetch is answered anyway, the watch only ever asks for one thing.
                    tracing::warn!(?reason, "request from watch dropped, sending a reading");
                    self.push_reading().await?;
                }
            }
        }

        tracing::debug!("watch side closed");
        Ok(())
    }

    async fn push_reading(&self) -> Result<()> {
        let mut reply = match self.source.current().await {
            Ok(reading) => {
                tracing::debug!(celsius = reading.celsius, city = %reading.city, "sending reading");
                Dictionary::weather_reply(reading.whole_degrees(), &reading.city)
            }
            Err(e) => {
                tracing::warn!(error = %e, "no reading available");
                unavailable_reply()
            }
        };

        // The temperature alone always fits, the city is dropped to make room.
        if let Err(ProtocolError::TooLarge { size, limit }) = reply.encode() {
            tracing::warn!(size, limit, "reading exceeds the mailbox, sending it without the city");
            reply.remove(MessageKey::City);
        }

        match self.outbox.send(&reply) {
            Ok(()) => Ok(()),
            Err(ChannelError::Full) => {
                tracing::warn!("watch mailbox full, reading dropped");
                Ok(())
            }
            Err(ChannelError::Closed) => {
                tracing::debug!("watch side closed before the reading was sent");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Reply sent when the source has nothing to report.
pub fn unavailable_reply() -> Dictionary {
    Dictionary::new()
        .with(MessageKey::City, TupleValue::CString(LOCATION_UNAVAILABLE.to_string()))
        .with(MessageKey::Temperature, TupleValue::CString(NOT_AVAILABLE.to_string()))
}
