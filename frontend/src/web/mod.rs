//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装：fetch、localStorage、
//! History 路由以及本地任务调度。

mod http;
pub mod router;
mod storage;
mod task;

pub use http::FetchHttpClient;
pub use storage::WebStorage;
pub use task::LeptosSpawner;
