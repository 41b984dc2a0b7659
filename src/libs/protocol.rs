//! App-message dictionaries exchanged between the watch and its companion.
//!
//! A message is a small dictionary of tuples keyed by integer tags. Only three
//! keys are in use:
//!
//! | Key           | Tag | Direction          | Value                     |
//! |---------------|-----|--------------------|---------------------------|
//! | `Fetch`       | 1   | watch → companion  | integer flag, always 1    |
//! | `Temperature` | 2   | companion → watch  | whole degrees Celsius     |
//! | `City`        | 3   | companion → watch  | city name, not displayed  |
//!
//! ## Wire Format
//!
//! All multi-byte values are little endian.
//!
//! ```text
//! ┌───────┬──────────────────────────────────────────────┬─────┐
//! │ count │ key:u32 │ type:u8 │ length:u16 │ payload ... │ ... │
//! │  u8   │                 one tuple                    │     │
//! └───────┴──────────────────────────────────────────────┴─────┘
//! ```
//!
//! Types are 0 (byte array), 1 (NUL-terminated string), 2 (unsigned integer)
//! and 3 (signed integer). Integers are written as 4 bytes but accepted with a
//! width of 1, 2 or 4.

use std::collections::BTreeMap;
use thiserror::Error;

/// Largest encoded message either mailbox accepts, in bytes.
pub const MAILBOX_SIZE: usize = 256;

const TYPE_BYTES: u8 = 0;
const TYPE_CSTRING: u8 = 1;
const TYPE_UINT: u8 = 2;
const TYPE_INT: u8 = 3;

const TUPLE_HEADER_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("message is truncated: needed {needed} more byte(s)")]
    Truncated { needed: usize },
    #[error("tuple {key} has unknown type {kind}")]
    UnknownType { key: u32, kind: u8 },
    #[error("tuple {key} has unsupported integer width {width}")]
    IntegerWidth { key: u32, width: usize },
    #[error("tuple {key} is not valid UTF-8")]
    InvalidString { key: u32 },
    #[error("{0} trailing byte(s) after the last tuple")]
    TrailingBytes(usize),
    #[error("message of {size} bytes exceeds the {limit} byte mailbox")]
    TooLarge { size: usize, limit: usize },
    #[error("message holds {0} tuples, at most 255 fit")]
    TooManyTuples(usize),
}

/// Integer tags understood by both ends of the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum MessageKey {
    Fetch = 1,
    Temperature = 2,
    City = 3,
}

impl MessageKey {
    pub fn tag(self) -> u32 {
        self as u32
    }
}

/// The value carried by one tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TupleValue {
    Bytes(Vec<u8>),
    CString(String),
    Uint(u32),
    Int(i32),
}

/// An ordered set of tuples keyed by tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    tuples: BTreeMap<u32, TupleValue>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request the watch sends to ask for a new temperature.
    pub fn fetch_request() -> Self {
        Self::new().with(MessageKey::Fetch, TupleValue::Int(1))
    }

    /// A companion reply carrying a reading.
    pub fn weather_reply(celsius: i32, city: &str) -> Self {
        Self::new()
            .with(MessageKey::Temperature, TupleValue::Int(celsius))
            .with(MessageKey::City, TupleValue::CString(city.to_string()))
    }

    pub fn with(mut self, key: MessageKey, value: TupleValue) -> Self {
        self.insert(key.tag(), value);
        self
    }

    pub fn insert(&mut self, tag: u32, value: TupleValue) -> Option<TupleValue> {
        self.tuples.insert(tag, value)
    }

    pub fn remove(&mut self, key: MessageKey) -> Option<TupleValue> {
        self.tuples.remove(&key.tag())
    }

    pub fn get(&self, key: MessageKey) -> Option<&TupleValue> {
        self.tuples.get(&key.tag())
    }

    pub fn contains(&self, key: MessageKey) -> bool {
        self.tuples.contains_key(&key.tag())
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Integer temperature, if the message carries one.
    ///
    /// A temperature sent as text (the companion sends `"N/A"` when it has no
    /// location) is not a reading and yields `None`.
    pub fn temperature(&self) -> Option<i32> {
        match self.get(MessageKey::Temperature)? {
            TupleValue::Int(value) => Some(*value),
            TupleValue::Uint(value) => i32::try_from(*value).ok(),
            _ => None,
        }
    }

    pub fn city(&self) -> Option<&str> {
        match self.get(MessageKey::City)? {
            TupleValue::CString(city) => Some(city),
            _ => None,
        }
    }

    /// Serializes the dictionary, refusing anything larger than the mailbox.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        let count = u8::try_from(self.tuples.len()).map_err(|_| ProtocolError::TooManyTuples(self.tuples.len()))?;

        let mut out = vec![count];
        for (key, value) in &self.tuples {
            let (kind, payload) = match value {
                TupleValue::Bytes(bytes) => (TYPE_BYTES, bytes.clone()),
                TupleValue::CString(text) => {
                    let mut bytes = text.as_bytes().to_vec();
                    bytes.push(0);
                    (TYPE_CSTRING, bytes)
                }
                TupleValue::Uint(number) => (TYPE_UINT, number.to_le_bytes().to_vec()),
                TupleValue::Int(number) => (TYPE_INT, number.to_le_bytes().to_vec()),
            };
            let length = u16::try_from(payload.len()).map_err(|_| ProtocolError::TooLarge {
                size: payload.len(),
                limit: MAILBOX_SIZE,
            })?;

            out.extend_from_slice(&key.to_le_bytes());
            out.push(kind);
            out.extend_from_slice(&length.to_le_bytes());
            out.extend_from_slice(&payload);
        }

        if out.len() > MAILBOX_SIZE {
            return Err(ProtocolError::TooLarge {
                size: out.len(),
                limit: MAILBOX_SIZE,
            });
        }
        Ok(out)
    }

    /// Parses a serialized dictionary.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProtocolError> {
        if bytes.len() > MAILBOX_SIZE {
            return Err(ProtocolError::TooLarge {
                size: bytes.len(),
                limit: MAILBOX_SIZE,
            });
        }

        let mut reader = Reader { bytes, pos: 0 };
        let count = reader.take(1)?[0];

        let mut dict = Dictionary::new();
        for _ in 0..count {
            let header = reader.take(TUPLE_HEADER_LEN)?;
            let key = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
            let kind = header[4];
            let length = u16::from_le_bytes([header[5], header[6]]) as usize;
            let payload = reader.take(length)?;

            let value = match kind {
                TYPE_BYTES => TupleValue::Bytes(payload.to_vec()),
                TYPE_CSTRING => {
                    let text = payload.strip_suffix(&[0u8]).unwrap_or(payload);
                    let text = std::str::from_utf8(text).map_err(|_| ProtocolError::InvalidString { key })?;
                    TupleValue::CString(text.to_string())
                }
                TYPE_UINT => TupleValue::Uint(match payload.len() {
                    1 => payload[0] as u32,
                    2 => u16::from_le_bytes([payload[0], payload[1]]) as u32,
                    4 => u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]),
                    width => return Err(ProtocolError::IntegerWidth { key, width }),
                }),
                TYPE_INT => TupleValue::Int(match payload.len() {
                    1 => payload[0] as i8 as i32,
                    2 => i16::from_le_bytes([payload[0], payload[1]]) as i32,
                    4 => i32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]),
                    width => return Err(ProtocolError::IntegerWidth { key, width }),
                }),
                kind => return Err(ProtocolError::UnknownType { key, kind }),
            };
            dict.insert(key, value);
        }

        let rest = reader.remaining();
        if rest > 0 {
            return Err(ProtocolError::TrailingBytes(rest));
        }
        Ok(dict)
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], ProtocolError> {
        let available = self.remaining();
        if len > available {
            return Err(ProtocolError::Truncated { needed: len - available });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}
