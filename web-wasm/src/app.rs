//! 主应用组件
//!
//! 持有全部表单状态与凭证，提交时触发取数流水线。
//! 并发提交用单调递增的请求序号守护：只有序号仍是最新的
//! 响应才会写入展示状态，晚到的旧响应直接丢弃

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    header::Header, result_card::ResultCard, selection_form::SelectionForm,
    settings_panel::SettingsPanel,
};
use crate::storage;
use outfit_ai_common::{
    ColorSeason, Gender, OutfitReport, Selection, StylePreference, TargetDay, TimeOfDay,
};

/// 主应用组件
#[component]
pub fn App() -> impl IntoView {
    // 凭证与设置面板
    let (api_key, set_api_key) = signal(storage::load_api_key());
    let (key_status, set_key_status) = signal(String::new());
    let (show_settings, set_show_settings) = signal(api_key.get_untracked().is_empty());

    // 表单状态
    let (location, set_location) = signal(String::new());
    let (target_day, set_target_day) = signal(TargetDay::default());
    let (time_of_day, set_time_of_day) = signal(TimeOfDay::default());
    let (gender, set_gender) = signal(Gender::default());
    let (style, set_style) = signal(StylePreference::default());
    let (color_season, set_color_season) = signal(ColorSeason::default());

    // 请求与展示状态
    let (is_loading, set_is_loading) = signal(false);
    let (status, set_status) = signal(None::<String>);
    let (report, set_report) = signal(None::<OutfitReport>);
    let (latest_seq, set_latest_seq) = signal(0u64);

    // 保存 API Key
    let on_save_key = move |_| {
        let key = api_key.get_untracked();
        if key.trim().is_empty() {
            set_key_status.set("请先输入 API Key".to_string());
            return;
        }
        match storage::save_api_key(&key) {
            Ok(()) => set_key_status.set("已保存到浏览器本地".to_string()),
            Err(e) => set_key_status.set(e),
        }
    };

    // 清除 API Key
    let on_clear_key = move |_| {
        storage::clear_api_key();
        set_api_key.set(String::new());
        set_key_status.set("已清除".to_string());
    };

    // 提交：校验 -> 发号 -> 流水线 -> 按序号决定是否应用
    let on_submit = move |_| {
        let loc = location.get_untracked().trim().to_string();
        if loc.is_empty() {
            set_status.set(Some("请先输入出行地点".to_string()));
            return;
        }
        let key = api_key.get_untracked();
        if key.trim().is_empty() {
            // 不发任何网络请求，直接弹出配置提示
            set_status.set(Some(outfit_ai_common::Error::ConfigMissing.to_string()));
            set_show_settings.set(true);
            return;
        }

        let selection = Selection {
            location: loc,
            target_day: target_day.get_untracked(),
            time_of_day: time_of_day.get_untracked(),
            gender: gender.get_untracked(),
            style: style.get_untracked(),
            color_season: color_season.get_untracked(),
        };

        let seq = latest_seq.get_untracked() + 1;
        set_latest_seq.set(seq);
        set_is_loading.set(true);
        set_status.set(None);

        spawn_local(async move {
            let result = api::produce_suggestion(&selection, &key).await;

            // 期间有新请求发出时丢弃本次响应
            if latest_seq.get_untracked() != seq {
                web_sys::console::log_1(&"丢弃过期的穿搭请求响应".into());
                return;
            }

            set_is_loading.set(false);
            match result {
                Ok(new_report) => {
                    set_report.set(Some(new_report));
                }
                Err(e) => {
                    // 失败时保留已展示的旧结果
                    set_status.set(Some(e.to_string()));
                    if e.is_credential_error() && !storage::is_env_key() {
                        set_show_settings.set(true);
                    }
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <button
                class="btn btn-secondary settings-toggle"
                on:click=move |_| set_show_settings.update(|visible| *visible = !*visible)
            >
                {move || if show_settings.get() { "收起设置" } else { "⚙ 设置" }}
            </button>

            <Show when=move || show_settings.get()>
                <SettingsPanel
                    api_key=api_key
                    set_api_key=set_api_key
                    key_status=key_status
                    on_save=on_save_key
                    on_clear=on_clear_key
                />
            </Show>

            <SelectionForm
                location=location
                set_location=set_location
                target_day=target_day
                set_target_day=set_target_day
                time_of_day=time_of_day
                set_time_of_day=set_time_of_day
                gender=gender
                set_gender=set_gender
                style=style
                set_style=set_style
                color_season=color_season
                set_color_season=set_color_season
                is_loading=is_loading
                on_submit=on_submit
            />

            {move || status.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            {move || report.get().map(|current| view! {
                <ResultCard report=current />
            })}
        </div>
    }
}
