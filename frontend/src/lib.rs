//! Zif 控制面板前端
//!
//! 采用 Context-Driven 的架构：
//! - `zif_panel`: 路由表、应用上下文与 Shell 状态机（平台无关）
//! - `web::router`: 基于 hash 的路由服务
//! - `panel`: 把 Shell 接入 Leptos 的响应式上下文
//! - `components`: UI 组件层

mod panel;
mod components {
    pub mod nav_bar;
    pub mod screens;
    pub mod welcome;
}

use crate::components::nav_bar::NavBar;
use crate::components::screens::{
    DownloadsScreen, HomeScreen, NotFoundScreen, SearchResultsScreen, StreamScreen,
    SubscriptionsScreen,
};
use crate::components::welcome::WelcomeDialog;
use crate::panel::init_panel;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web;

use web::router::RouterOutlet;
use zif_panel::{AppRoute, ZIF_THEME};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomeScreen /> }.into_any(),
        AppRoute::Search => view! { <SearchResultsScreen /> }.into_any(),
        AppRoute::Stream { infohash } => view! { <StreamScreen infohash=infohash /> }.into_any(),
        AppRoute::Downloads => view! { <DownloadsScreen /> }.into_any(),
        AppRoute::Subscriptions => view! { <SubscriptionsScreen /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundScreen /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建面板上下文（同时提供路由服务并提交身份引导请求）
    let panel = init_panel();

    let page_style = format!(
        "background-color: {}; --zif-accent: {};",
        ZIF_THEME.secondary, ZIF_THEME.accent
    );
    let link_style = format!("color: {};", ZIF_THEME.primary);

    view! {
        <div class="min-h-screen font-sans" style=page_style>
            // 2. 欢迎对话框总是挂载，打开与否由配置决定
            <WelcomeDialog />

            // 3. 加载动画覆盖层
            <Show when=move || panel.show_spinner.get()>
                <div style="position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); z-index: 100;">
                    <span
                        class="loading loading-spinner loading-lg"
                        style=format!("color: {};", ZIF_THEME.highlight)
                    ></span>
                </div>
            </Show>

            <NavBar />

            <div class="flex">
                <Show when=move || panel.drawer_open.get()>
                    <ul class="menu bg-base-100 w-56 min-h-screen shadow-xl">
                        <li><a href="#/" style=link_style.clone()>"Home"</a></li>
                        <li><a href="#/search" style=link_style.clone()>"Search"</a></li>
                        <li><a href="#/downloads" style=link_style.clone()>"Downloads"</a></li>
                        <li><a href="#/subscriptions" style=link_style.clone()>"Subscriptions"</a></li>
                    </ul>
                </Show>

                <main class="flex-1 p-4 md:p-8">
                    // 4. 路由出口
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </div>
    }
}
