//! Sink records and the decoder for `pactl --format=json list sinks`
//!
//! Decoding is kept separate from command orchestration so malformed
//! server output is a unit-testable condition.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::Result;

/// Property key carrying the hardware serial, when the device reports one.
const SERIAL_PROPERTY: &str = "device.serial";

/// An audio output device as enumerated by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    /// Server-assigned sink index (distinct from the position in the list).
    pub index: u32,
    /// Stable identifier used for matching and for set-default commands.
    pub name: String,
    /// Human-readable description; empty when the server reports none.
    pub description: String,
    /// Hardware serial from the sink's property table, when present.
    pub serial: Option<String>,
}

impl Sink {
    /// Description if the server reported one, identifier otherwise.
    pub fn display_name(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// Wire shape of one entry in the JSON listing. Only the fields we use are
/// modeled; pactl emits many more and serde ignores them.
#[derive(Debug, Deserialize)]
struct RawSink {
    index: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    properties: HashMap<String, serde_json::Value>,
}

impl From<RawSink> for Sink {
    fn from(raw: RawSink) -> Self {
        let serial = raw
            .properties
            .get(SERIAL_PROPERTY)
            .and_then(|v| v.as_str())
            .map(str::to_owned);

        Self {
            index: raw.index,
            name: raw.name,
            description: raw.description.unwrap_or_default(),
            serial,
        }
    }
}

/// Decode the JSON document produced by `pactl --format=json list sinks`
/// into sink records, preserving the server's enumeration order.
pub fn decode_sink_list(json: &str) -> Result<Vec<Sink>> {
    let raw: Vec<RawSink> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(Sink::from).collect())
}
