use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_CITY: &str = "the location";

pub const UNKNOWN_WEATHER: &str = "unknown";

/// A tool call decoded from the model's free-form reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(default, deserialize_with = "name_or_empty")]
    pub function_name: String,
    #[serde(default = "empty_params")]
    pub function_parms: serde_json::Value,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

// A missing or non-string name decodes to "", which no tool is registered under.
fn name_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Falls back to [`DEFAULT_CITY`] when `city` is missing, blank or not a string.
    pub fn from_params(params: &serde_json::Value) -> Self {
        let city = params
            .get("city")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CITY);

        Self {
            city: city.to_string(),
        }
    }
}

/// What a tool hands back to the model as `Action_Response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolObservation(pub String);

impl fmt::Display for ToolObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User-visible result of one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent { recipient: String, answer: String },
    Unrecognized,
    Failed(String),
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sent { recipient, answer } => {
                write!(f, "✅ Answer sent to {recipient}\n\n{answer}")
            }
            Outcome::Unrecognized => f.write_str("Function not recognized."),
            Outcome::Failed(reason) => write!(f, "❌ Something went wrong: {reason}"),
        }
    }
}
