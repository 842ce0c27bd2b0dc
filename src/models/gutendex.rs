use serde::Deserialize;
use serde_json::{Map, Value};

// `results` is required: a body without it is treated as an upstream failure.
// Entries stay raw so one malformed record can be skipped on its own.
#[derive(Debug, Deserialize)]
pub struct GutendexResponse {
    pub results: Vec<Value>,
}

/// The fields of one search hit that the proxy reshapes.
#[derive(Debug, Deserialize)]
pub struct GutendexBook {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<GutendexAuthor>,
    /// MIME type -> download URL, in upstream key order.
    #[serde(default)]
    pub formats: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct GutendexAuthor {
    #[serde(default)]
    pub name: Option<String>,
}
