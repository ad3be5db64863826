use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::UnixSeconds;
pub use protocol::{
    ApiEnvelope, ApiRequest, EntryValue, GetDescRequest, GetEntryRequest, GetNameRequest,
    GetPostCountRequest, GetPublicRequest, GetZifRequest, HttpMethod,
};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 守护进程响应信封中表示成功的状态值
pub const STATUS_OK: &str = "ok";

/// 本地守护进程控制接口的默认地址
pub const DEFAULT_DAEMON_URL: &str = "http://127.0.0.1:8080";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 节点的网络地址
///
/// `encoded` 由独立的 `zif` 请求填充，其余字段原样保留。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Address {
    /// 已设置且非空的编码地址
    pub fn encoded(&self) -> Option<&str> {
        self.encoded.as_deref().filter(|s| !s.is_empty())
    }
}

/// 本地用户的身份记录 (Entry)
///
/// `Default` 即初始占位值 `{"address": {}}`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(default)]
    pub address: Address,
    /// 未建模的字段，保证与守护进程返回的记录一致
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// 显示名称，未加载时为 `None`
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// 搜索结果中的一条内容记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub info_hash: String,
    pub title: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub file_count: u32,
    #[serde(default)]
    pub seeders: u32,
    #[serde(default)]
    pub leechers: u32,
    #[serde(default)]
    pub upload_date: UnixSeconds,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub meta: String,
}

impl Post {
    /// 以逗号分隔的标签列表
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placeholder_entry_serializes_to_empty_address() {
        let entry = Entry::default();
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!({ "address": {} }));
    }

    #[test]
    fn entry_keeps_unknown_fields() {
        let raw = json!({
            "name": "alice",
            "postCount": 12,
            "address": { "raw": [1, 2, 3] },
            "signature": "c2ln"
        });

        let entry: Entry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.display_name(), Some("alice"));
        assert_eq!(entry.post_count, Some(12));
        assert!(entry.address.encoded().is_none());
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn empty_encoded_address_counts_as_unset() {
        let address = Address {
            encoded: Some(String::new()),
            ..Default::default()
        };
        assert!(address.encoded().is_none());
    }

    #[test]
    fn post_tag_list_skips_blanks() {
        let post = Post {
            tags: "linux, iso,, ".to_string(),
            ..Default::default()
        };
        assert_eq!(post.tag_list().collect::<Vec<_>>(), vec!["linux", "iso"]);
    }
}
