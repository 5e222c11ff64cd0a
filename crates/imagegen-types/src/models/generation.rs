use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of every image returned by the relay.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Body of `POST /generate-image`.
///
/// `prompt` is kept as raw JSON so that presence and truthiness can be judged
/// the same way for every shape a client might send.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: Some(Value::String(prompt.into())) }
    }

    /// Read a request from an arbitrary JSON body.
    ///
    /// Only a JSON object can carry a prompt; any other shape yields an empty
    /// request.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => Self { prompt: fields.remove("prompt") },
            _ => Self::default(),
        }
    }

    /// The prompt, if it is present and truthy.
    ///
    /// `null`, `false`, `""` and numeric zero count as missing.
    pub fn prompt(&self) -> Option<&Value> {
        self.prompt.as_ref().filter(|value| is_truthy(value))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Successful response: the generated image as a data URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    pub image: String,
}

/// Failure response: a short human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
