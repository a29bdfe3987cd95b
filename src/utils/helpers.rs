//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use serde_json::{Map, Value};

/// Parse the data sent by the Mini App.
///
/// Anything that is not a JSON object is kept verbatim as `{"raw": <text>}`.
pub fn parse_web_app_payload(data: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(data) {
        Ok(Value::Object(map)) => map,
        _ => {
            let mut map = Map::new();
            map.insert("raw".to_string(), Value::String(data.to_string()));
            map
        }
    }
}
