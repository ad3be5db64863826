//! 时间类型模块
//!
//! 守护进程以 Unix 秒传输时间，这里提供可序列化的 `UnixSeconds`
//! 以及到 `chrono` 时间类型的转换。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 秒级 Unix 时间戳，用于序列化传输
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct UnixSeconds(i64);

impl UnixSeconds {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// 转换为 UTC 时间，超出范围时返回 `None`
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// 以 `YYYY-MM-DD` 形式显示日期
    pub fn format_date(&self) -> String {
        self.to_datetime()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

impl From<i64> for UnixSeconds {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl From<UnixSeconds> for i64 {
    fn from(ts: UnixSeconds) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_upload_date() {
        assert_eq!(UnixSeconds::new(1_500_000_000).format_date(), "2017-07-14");
    }

    #[test]
    fn out_of_range_formats_empty() {
        assert_eq!(UnixSeconds::new(i64::MAX).format_date(), "");
    }
}
