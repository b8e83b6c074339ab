use serde::{Deserialize, Serialize};

/// URI of the principles document.
pub const PRINCIPLES_URI: &str = "process://principles";
/// URI of the practices document.
pub const PRACTICES_URI: &str = "process://practices";
/// URI of the raw insight log.
pub const INSIGHTS_URI: &str = "process://insights";
/// URI of the protocol text file.
pub const PROTOCOL_URI: &str = "process://protocol";

/// Envelope a client POSTs to read a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceReadRequest {
    pub uri: String,
}

/// Contents of a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Advertised metadata for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}
