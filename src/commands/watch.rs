use crate::libs::{
    companion::StaticWeather,
    config::{parse_temperature, Config},
    runtime,
    view::TerminalDisplay,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[arg(long, allow_hyphen_values = true, help = "Temperature in °C reported by the companion")]
    temperature: Option<String>,
    #[arg(long, help = "City reported by the companion")]
    city: Option<String>,
    #[arg(long, help = "Minutes between weather refreshes")]
    refresh_interval: Option<u32>,
}

// Runs the face until interrupted, with command line values taking precedence over the config file.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    let config = Config::read()?;
    let mut watch = config.watch.unwrap_or_default();
    let mut weather = config.weather.unwrap_or_default();

    if let Some(interval) = args.refresh_interval {
        watch.refresh_interval = interval;
    }
    if let Some(temperature) = args.temperature {
        weather.temperature = parse_temperature(&temperature)?;
    }
    if let Some(city) = args.city {
        weather.city = city;
    }

    runtime::run(watch, StaticWeather::from(&weather), TerminalDisplay::new()).await
}
