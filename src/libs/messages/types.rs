//! Every user-facing message of the application.
//!
//! Text lives in [`display`](super::display); this enum only names the
//! messages and carries their parameters.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleWatch,
    ConfigModuleWeather,
    SelectConfigModules,
    PromptRefreshInterval,
    PromptDateLimit,
    PromptCity,
    PromptTemperature,
    InvalidTemperature(String),

    // === WATCH MESSAGES ===
    WatchStarted {
        refresh_interval: u32,
    },
    WatchShuttingDown,
    TickerStopped,
    WatchExitedNormally,
    WatchError(String),
    WatchReceivedSigterm,
    WatchReceivedSigint,
    WatchReceivedCtrlC,
    WatchCtrlCListenFailed(String),
    WatchSignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === COMPANION MESSAGES ===
    CompanionStopped,
    WeatherUnavailable(String),

    // === SHOW MESSAGES ===
    InvalidTime(String),
    InvalidDate(String),
    PhrasesHeader,
}
