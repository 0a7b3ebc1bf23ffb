mod client;
mod types;

pub use client::{AnthropicClient, UpstreamClient, translate_error};
pub use types::{ContentBlock, Message, MessagesRequest, MessagesResponse, Role};
