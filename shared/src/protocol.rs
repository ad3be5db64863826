use crate::{Entry, STATUS_OK};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a daemon endpoint.
pub trait ApiRequest {
    /// The type carried in the envelope's `value` on success.
    type Response: DeserializeOwned;
    /// The URL path, relative to the daemon base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

/// The envelope every daemon response is wrapped in: `{"status": "...", "value": ...}`.
///
/// `value` stays untyped until `status` has been checked, because failed
/// calls carry an error message there instead of the endpoint's payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T = serde_json::Value> {
    pub status: String,
    #[serde(default)]
    pub value: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// The `entry` value as sent by the daemon.
///
/// The daemon serializes its entry to a JSON string before wrapping it, but
/// an inline object is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryValue {
    Encoded(String),
    Record(Entry),
}

impl EntryValue {
    pub fn into_entry(self) -> Result<Entry, serde_json::Error> {
        match self {
            EntryValue::Encoded(raw) => serde_json::from_str(&raw),
            EntryValue::Record(entry) => Ok(entry),
        }
    }
}

// =========================================================
// Request Definitions
// =========================================================

macro_rules! local_get {
    ($(#[$doc:meta])* $name:ident, $key:literal, $response:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl ApiRequest for $name {
            type Response = $response;
            const PATH: &'static str = concat!("/self/get/", $key, "/");
            const METHOD: HttpMethod = HttpMethod::Get;
        }
    };
}

local_get!(
    /// The full local entry
    GetEntryRequest, "entry", EntryValue
);
local_get!(
    /// The encoded network address of the local peer
    GetZifRequest, "zif", String
);
local_get!(GetNameRequest, "name", String);
local_get!(GetDescRequest, "desc", String);
local_get!(GetPublicRequest, "public", String);
local_get!(
    /// Number of posts, sent as a decimal string
    GetPostCountRequest, "postcount", String
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bootstrap_paths() {
        assert_eq!(GetEntryRequest::PATH, "/self/get/entry/");
        assert_eq!(GetZifRequest::PATH, "/self/get/zif/");
        assert_eq!(GetPostCountRequest::PATH, "/self/get/postcount/");
    }

    #[test]
    fn envelope_without_value() {
        let env: ApiEnvelope = serde_json::from_value(json!({ "status": "err" })).unwrap();
        assert!(!env.is_ok());
        assert!(env.value.is_none());
    }

    #[test]
    fn entry_value_accepts_string_and_object() {
        let encoded: EntryValue =
            serde_json::from_value(json!("{\"name\":\"alice\",\"address\":{}}")).unwrap();
        let inline: EntryValue =
            serde_json::from_value(json!({ "name": "alice", "address": {} })).unwrap();

        assert_eq!(encoded.into_entry().unwrap(), inline.into_entry().unwrap());
    }

    #[test]
    fn entry_value_rejects_garbage_string() {
        let value: EntryValue = serde_json::from_value(json!("not json")).unwrap();
        assert!(value.into_entry().is_err());
    }
}
