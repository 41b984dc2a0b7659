//! Text of every [`Message`].

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleWatch => "Watch face".to_string(),
            Message::ConfigModuleWeather => "Weather".to_string(),
            Message::SelectConfigModules => "Select modules to configure".to_string(),
            Message::PromptRefreshInterval => "Weather refresh interval in minutes (must divide 60)".to_string(),
            Message::PromptDateLimit => "Maximum length of the date line".to_string(),
            Message::PromptCity => "City name".to_string(),
            Message::PromptTemperature => "Temperature in °C (leave empty for none)".to_string(),
            Message::InvalidTemperature(value) => format!("'{}' is not a temperature", value),

            // === WATCH MESSAGES ===
            Message::WatchStarted { refresh_interval } => {
                format!("Watch face started, weather refreshes every {} minutes. Press Ctrl-C to stop.", refresh_interval)
            }
            Message::WatchShuttingDown => "Watch face shutting down".to_string(),
            Message::TickerStopped => "Tick receiver gone, minute ticker stopping".to_string(),
            Message::WatchExitedNormally => "Watch face stopped".to_string(),
            Message::WatchError(error) => format!("Watch face error: {}", error),
            Message::WatchReceivedSigterm => "Received SIGTERM".to_string(),
            Message::WatchReceivedSigint => "Received SIGINT".to_string(),
            Message::WatchReceivedCtrlC => "Received Ctrl-C".to_string(),
            Message::WatchCtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),
            Message::WatchSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === COMPANION MESSAGES ===
            Message::CompanionStopped => "Companion stopped".to_string(),
            Message::WeatherUnavailable(reason) => format!("Weather unavailable: {}", reason),

            // === SHOW MESSAGES ===
            Message::InvalidTime(value) => format!("'{}' is not a valid time, expected HH:MM", value),
            Message::InvalidDate(value) => format!("'{}' is not a valid date, expected YYYY-MM-DD", value),
            Message::PhrasesHeader => "Minute phrases".to_string(),
        };
        write!(f, "{}", text)
    }
}
