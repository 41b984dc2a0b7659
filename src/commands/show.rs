//! One-shot rendering of the face for a given moment.

use crate::{
    libs::{
        channel::InboxEvent,
        config::Config,
        face::{FaceText, MemorySink, WatchFace},
        messages::Message,
        protocol::Dictionary,
        schedule::FetchSchedule,
        time_fields::TimeFields,
        view::View,
    },
    msg_error_anyhow,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(long, help = "Time to show as HH:MM, defaults to now")]
    at: Option<String>,
    #[arg(long, help = "Date to show as YYYY-MM-DD, defaults to today")]
    date: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Temperature in °C to show next to the date")]
    temperature: Option<i32>,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let at = moment(now, args.at.as_deref(), args.date.as_deref())?;
    let watch = Config::read()?.watch.unwrap_or_default();

    let text = render(&at, args.temperature, watch.date_limit)?;
    View::face(&text);
    Ok(())
}

/// Combines the optional time and date arguments with `now`.
pub fn moment(now: NaiveDateTime, at: Option<&str>, date: Option<&str>) -> Result<NaiveDateTime> {
    let time = match at {
        Some(value) => NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| msg_error_anyhow!(Message::InvalidTime(value.to_string())))?,
        None => now.time(),
    };
    let date = match date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))?,
        None => now.date(),
    };
    Ok(date.and_time(time))
}

/// Renders the face for `at`, with an optional temperature reading.
pub fn render(at: &NaiveDateTime, temperature: Option<i32>, date_limit: usize) -> Result<FaceText> {
    let mut face = WatchFace::new(FetchSchedule::default(), date_limit);
    let mut sink = MemorySink::default();

    face.on_tick(&TimeFields::from_datetime(at), &mut sink)?;
    if let Some(celsius) = temperature {
        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(celsius, "")), &mut sink);
    }

    Ok(face.text().clone())
}
