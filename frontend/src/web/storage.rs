//! LocalStorage 封装模块
//!
//! 面板只从 localStorage 读取配置，不写入。

use zif_panel::ConfigSource;

/// 浏览器 localStorage 的只读访问
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get_item(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }
}

impl ConfigSource for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        WebStorage::get_item(key)
    }
}
