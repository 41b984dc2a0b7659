//! Core library modules for the textwatch application.
//!
//! ## Layout
//!
//! - **Formatting**: [`phrase`], [`date`], [`temperature`], [`time_fields`]
//! - **Policy**: [`schedule`]
//! - **Message Link**: [`protocol`], [`channel`], [`companion`]
//! - **Face and Runtime**: [`face`], [`runtime`], [`view`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]
//!
//! ## Usage
//!
//! ```rust
//! use textwatch::libs::face::{MemorySink, WatchFace};
//! use textwatch::libs::time_fields::TimeFields;
//!
//! let mut face = WatchFace::default();
//! let mut sink = MemorySink::default();
//! let time = TimeFields::new(21, 14, 4, 6, 31).unwrap();
//!
//! face.on_tick(&time, &mut sink).unwrap();
//! assert_eq!(sink.text.hour, "nine");
//! assert_eq!(sink.text.minute_line_one, "four");
//! assert_eq!(sink.text.minute_line_two, "teen");
//! ```

pub mod channel;
pub mod companion;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod face;
pub mod messages;
pub mod phrase;
pub mod protocol;
pub mod runtime;
pub mod schedule;
pub mod temperature;
pub mod time_fields;
pub mod view;
