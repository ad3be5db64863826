use crate::panel::use_panel;
use leptos::prelude::*;
use zif_panel::ZIF_THEME;

/// 欢迎对话框
///
/// 是否在启动时打开由配置项 `zif_show_welcome` 决定。
#[component]
pub fn WelcomeDialog() -> impl IntoView {
    let panel = use_panel();
    let show_welcome = panel
        .with_context(|ctx| ctx.config().show_welcome)
        .unwrap_or(false);
    let (is_open, set_is_open) = signal(show_welcome);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg" style=format!("color: {};", ZIF_THEME.highlight)>
                        "Welcome to Zif"
                    </h3>
                    <p class="py-4">
                        "Zif is a peer-to-peer torrent index. Search posts, stream what you find "
                        "and follow the peers you trust."
                    </p>
                    <div class="modal-action">
                        <button on:click=move |_| set_is_open.set(false) class="btn btn-primary">
                            "Get started"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
