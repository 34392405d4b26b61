//! 页面头部组件

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"天气穿搭 AI - 出行穿搭推荐"</h1>
        </header>
    }
}
