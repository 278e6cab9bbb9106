use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct History {
    pub logs: Vec<HistoryEntry>,
}

/// One event from the panel's log, with its time normalized to ISO-8601 and
/// the remaining event fields passed through untouched.
#[derive(Debug, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub time: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
