use crate::panel::use_panel;
use leptos::prelude::*;
use zif_panel::{ContextEvent, ZIF_THEME};

/// 顶部导航栏
///
/// 显示本机名称；身份记录在引导完成后才到达，所以订阅身份变化再刷新。
#[component]
pub fn NavBar() -> impl IntoView {
    let panel = use_panel();

    let read_name = move || {
        panel
            .with_context(|ctx| ctx.display_name())
            .flatten()
            .unwrap_or_else(|| "zif".to_string())
    };
    let (name, set_name) = signal(read_name());

    let subscription = panel.with_context(|ctx| {
        ctx.subscribe(move |event| {
            if *event == ContextEvent::IdentityChanged {
                // 组件已卸载时 try_set 是空操作
                set_name.try_set(read_name());
            }
        })
    });

    on_cleanup(move || {
        if let Some(id) = subscription {
            panel.with_context(|ctx| ctx.unsubscribe(id));
        }
    });

    let nav_style = format!(
        "background-color: {}; color: {};",
        ZIF_THEME.primary, ZIF_THEME.secondary
    );

    view! {
        <div class="navbar shadow-xl" style=nav_style>
            <div class="flex-none">
                <button
                    on:click=move |_| panel.toggle_drawer()
                    class="btn btn-ghost btn-square"
                    aria-label="menu"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        fill="none"
                        viewBox="0 0 24 24"
                        class="inline-block w-6 h-6 stroke-current"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M4 6h16M4 12h16M4 18h16"
                        ></path>
                    </svg>
                </button>
            </div>
            <div class="flex-1">
                <a on:click=move |_| panel.home() class="btn btn-ghost text-xl">
                    {move || name.get()}
                </a>
            </div>
        </div>
    }
}
