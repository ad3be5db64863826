//! 面板上下文模块
//!
//! 把核心库的 `Shell` 接到 Leptos 的响应式系统上：
//! Shell 本身只在当前线程可用，存放在 `StoredValue::new_local` 里；
//! 界面需要跟踪的状态（加载动画、抽屉、搜索结果）以信号形式镜像一份，
//! 通过上下文订阅保持同步。

use std::rc::Rc;

use crate::web::router::provide_router;
use crate::web::{FetchHttpClient, LeptosSpawner, WebStorage};
use leptos::prelude::*;
use zif_panel::{AppContext, ContextEvent, PanelConfig, SharedDaemonApi, Shell};

/// 面板上下文
///
/// 包含 Shell 句柄与界面信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct PanelContext {
    shell: StoredValue<Shell, LocalStorage>,
    /// 加载动画是否显示（只读）
    pub show_spinner: ReadSignal<bool>,
    /// 导航抽屉是否展开（只读）
    pub drawer_open: ReadSignal<bool>,
    set_drawer_open: WriteSignal<bool>,
    /// 搜索结果每被替换一次加一
    pub results_version: ReadSignal<u64>,
}

impl PanelContext {
    /// 在 Shell 的应用上下文上执行闭包
    ///
    /// 存储已被回收时返回 `None`。
    pub fn with_context<R>(&self, f: impl FnOnce(&AppContext) -> R) -> Option<R> {
        self.shell.try_with_value(|shell| f(shell.context()))
    }

    /// 守护进程接口客户端
    pub fn api(&self) -> Option<SharedDaemonApi> {
        self.with_context(|ctx| ctx.daemon())
    }

    pub fn set_spinner(&self, on: bool) {
        self.shell.try_with_value(|shell| shell.set_spinner(on));
    }

    pub fn toggle_drawer(&self) {
        if let Some(open) = self.shell.try_with_value(|shell| shell.handle_toggle()) {
            self.set_drawer_open.set(open);
        }
    }

    pub fn home(&self) {
        self.shell.try_with_value(|shell| shell.home_button_click());
    }
}

/// 从 Context 获取面板上下文
pub fn use_panel() -> PanelContext {
    use_context::<PanelContext>().expect("PanelContext should be provided")
}

/// 初始化面板
///
/// 读取配置、创建路由与 Shell，并把面板上下文提供给子组件。
/// 身份引导请求在这里提交，不等待完成。
pub fn init_panel() -> PanelContext {
    let config = PanelConfig::load(&WebStorage);
    let router = provide_router();
    let shell = Shell::new(
        config,
        Rc::new(router),
        Rc::new(FetchHttpClient),
        &LeptosSpawner,
    );

    let initial = shell.state();
    let (show_spinner, set_show_spinner) = signal(initial.show_spinner);
    let (drawer_open, set_drawer_open) = signal(initial.drawer_open);
    let (results_version, set_results_version) = signal(0u64);

    // 上下文的生命周期与应用相同，订阅不取消
    shell.context().subscribe(move |event| match event {
        ContextEvent::SpinnerChanged(on) => {
            set_show_spinner.try_set(*on);
        }
        ContextEvent::ResultsChanged => {
            set_results_version.try_update(|v| *v += 1);
        }
        ContextEvent::IdentityChanged => {}
    });

    let ctx = PanelContext {
        shell: StoredValue::new_local(shell),
        show_spinner,
        drawer_open,
        set_drawer_open,
        results_version,
    };
    provide_context(ctx);
    ctx
}
