use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Request body for adding a note
///
/// `note` is optional at the type level so that a missing field reaches the
/// handler and gets the same answer as an empty one.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub note: Option<String>,
}

impl AddNoteRequest {
    /// Read the request out of an already-parsed JSON object.
    ///
    /// Going through an object first keeps arrays from filling the struct
    /// positionally.
    pub fn from_object(body: Map<String, JsonValue>) -> serde_json::Result<Self> {
        serde_json::from_value(JsonValue::Object(body))
    }
}

/// Response type for a successfully added note
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddNoteResponse {
    pub success: bool,
    pub note: String,
}
