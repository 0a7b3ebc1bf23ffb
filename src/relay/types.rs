use serde::{Deserialize, Serialize};

/// Roles accepted from the chat widget. Anything else fails deserialization
/// and is rejected before the request leaves the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// Body of the outbound Messages API call. Model, token cap, and system
/// prompt are fixed per process; only `messages` varies per request.
#[derive(Debug, Serialize)]
pub struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub system: &'a str,
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

/// Error body shape used by the upstream API: `{"error": {"message": ...}}`.
/// Both levels default so that a non-JSON or differently-shaped body simply
/// yields an empty message.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub error: UpstreamErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamErrorDetail {
    #[serde(default)]
    pub message: String,
}
