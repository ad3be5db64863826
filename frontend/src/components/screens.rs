//! 各路由对应的页面
//!
//! 页面只做最简单的展示；搜索结果页从应用上下文读取当前结果，
//! 不依赖路由表携带数据。

use crate::panel::use_panel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use zif_shared::Post;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let panel = use_panel();
    let (post_count, set_post_count) = signal(Option::<u64>::None);
    let (error, set_error) = signal(Option::<String>::None);

    if let Some(api) = panel.api() {
        panel.set_spinner(true);
        spawn_local(async move {
            match api.fetch_post_count().await {
                Ok(count) => {
                    set_post_count.try_set(Some(count));
                }
                Err(e) => {
                    log::debug!("post count unavailable: {}", e);
                    set_error.try_set(Some(e.to_string()));
                }
            }
            panel.set_spinner(false);
        });
    }

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Home"</h2>
                <div class="stat">
                    <div class="stat-title">"Local posts"</div>
                    <div class="stat-value text-primary">
                        {move || post_count.get().map(|c| c.to_string()).unwrap_or("-".to_string())}
                    </div>
                    <Show when=move || error.get().is_some()>
                        <div class="stat-desc text-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

fn post_row(post: Post) -> impl IntoView {
    let link = format!("#/stream/{}", post.info_hash);
    let tags = post
        .tag_list()
        .map(|tag| view! { <span class="badge badge-ghost badge-sm mr-1">{tag.to_string()}</span> })
        .collect_view();
    view! {
        <tr>
            <td>
                <a href=link class="link link-hover font-bold">{post.title.clone()}</a>
                <div>{tags}</div>
            </td>
            <td class="font-mono text-sm">{format_size(post.size)}</td>
            <td class="text-success">{post.seeders}</td>
            <td class="text-error">{post.leechers}</td>
            <td class="hidden md:table-cell opacity-70">{post.upload_date.format_date()}</td>
        </tr>
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[component]
pub fn SearchResultsScreen() -> impl IntoView {
    let panel = use_panel();

    let rows = move || {
        // 结果被替换时重新读取
        panel.results_version.track();
        let results = panel.with_context(|ctx| ctx.search_results()).flatten();
        match results {
            Some(posts) if !posts.is_empty() => posts
                .iter()
                .cloned()
                .map(post_row)
                .collect_view()
                .into_any(),
            Some(_) => view! {
                <tr>
                    <td colspan="5" class="text-center py-8 text-base-content/50">"No posts found."</td>
                </tr>
            }
            .into_any(),
            None => view! {
                <tr>
                    <td colspan="5" class="text-center py-8 text-base-content/50">"Nothing searched yet."</td>
                </tr>
            }
            .into_any(),
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <h2 class="card-title p-6 pb-2">"Search results"</h2>
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Size"</th>
                                <th>"Seeders"</th>
                                <th>"Leechers"</th>
                                <th class="hidden md:table-cell">"Uploaded"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn StreamScreen(infohash: String) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Stream"</h2>
                <p class="font-mono text-sm break-all">{infohash}</p>
            </div>
        </div>
    }
}

#[component]
pub fn DownloadsScreen() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Downloads"</h2>
                <p class="text-base-content/70">"No active downloads."</p>
            </div>
        </div>
    }
}

#[component]
pub fn SubscriptionsScreen() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Subscriptions"</h2>
                <p class="text-base-content/70">"You are not following any peers."</p>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[50vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }
}
