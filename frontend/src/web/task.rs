//! 本地任务调度
//!
//! 让核心库通过 `futures` 的 `LocalSpawn` 接口把任务交给 Leptos 的
//! `spawn_local`，在浏览器事件循环上执行。

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosSpawner;

impl LocalSpawn for LeptosSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        spawn_local(future);
        Ok(())
    }
}
