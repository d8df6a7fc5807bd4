use std::collections::HashMap;

use uuid::Uuid;

/// Session/query parameter surface. In a browser this is the location
/// hash; embedders inject their own implementation.
pub trait SessionParams: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Plain in-memory implementation used by the demo binary and tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    params: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionParams for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.params.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.params.remove(key);
    }
}

pub const OPEN_CHANNEL_KEY: &str = "canal";

/// Encodes the open channel as the `canal/<channel-id>` fragment value.
pub fn encode_channel_param(channel_id: Uuid) -> String {
    let encoded: String =
        url::form_urlencoded::byte_serialize(channel_id.to_string().as_bytes()).collect();
    format!("{}/{}", OPEN_CHANNEL_KEY, encoded)
}

/// Parses a `canal/<channel-id>` fragment value back into a channel id.
pub fn decode_channel_param(value: &str) -> Option<Uuid> {
    let rest = value.strip_prefix(&format!("{}/", OPEN_CHANNEL_KEY))?;
    let decoded: String = url::form_urlencoded::parse(format!("v={}", rest).as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())?;
    Uuid::parse_str(&decoded).ok()
}
