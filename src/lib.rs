//! # Textwatch - a word-clock watch face
//!
//! Tells the time in English words across two lines, with a short date and
//! a temperature fetched through a message link to a companion.
//!
//! ## Features
//!
//! - **Time Phrases**: "twelve / forty / five", "one / four / teen", "three / o'clock"
//! - **Date Line**: bounded abbreviations such as "Thurs. July 31"
//! - **Temperature**: refreshed at :00 and :30 over an app-message link
//! - **Terminal Face**: live rendering driven by a minute ticker
//!
//! ## Usage
//!
//! ```rust,no_run
//! use textwatch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
