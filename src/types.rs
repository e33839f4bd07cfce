// src/types.rs
use serde::{Deserialize, Serialize};

/// One historical ruler record as served by the monarchs endpoint.
///
/// The wire format uses short keys (`nm`, `cty`, `hse`, `yrs`). The derived
/// reign years are populated from `years_raw` right after deserialization;
/// both are always set afterwards, with 0 standing in for anything the
/// lenient parser could not read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Monarch {
    pub id: u32,
    #[serde(rename = "nm")]
    pub name: String,
    #[serde(rename = "cty")]
    pub country: String,
    #[serde(rename = "hse")]
    pub house: String,
    /// Raw year-range text as received, e.g. "1016", "1509-1547", "1952-".
    #[serde(rename = "yrs", default)]
    pub years_raw: String,
    #[serde(skip)]
    pub start_year: i32,
    #[serde(skip)]
    pub end_year: i32,
}

impl Monarch {
    /// Reign length in years. May be negative for malformed ranges; the
    /// aggregates deliberately let that reduce house totals.
    pub fn reign_years(&self) -> i32 {
        self.end_year - self.start_year
    }
}

/// Success-or-failure envelope used by both the source fetch and the
/// service-level get-monarchs operation, so callers have one shape to check.
///
/// Expected failures travel as values; only unmodeled faults are raised as
/// errors and caught once at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome<T> {
    pub ok: bool,
    pub payload: Option<T>,
    pub message: String,
}

impl<T> FetchOutcome<T> {
    pub fn success(payload: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            payload: Some(payload),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            payload: None,
            message: message.into(),
        }
    }

    /// True only when the flag is set and a payload is actually present.
    pub fn is_usable(&self) -> bool {
        self.ok && self.payload.is_some()
    }
}
