//! 选择表单组件
//!
//! 地点、日期、时段与个人风格属性的输入区。请求进行中时
//! 提交按钮置灰，但不取消已发出的请求

use leptos::prelude::*;
use outfit_ai_common::{ColorSeason, Gender, StylePreference, TargetDay, TimeOfDay};

/// 常用地点快捷按钮
const PRESET_LOCATIONS: &[&str] = &["北京", "上海", "广州", "泰山"];

#[component]
pub fn SelectionForm<F>(
    location: ReadSignal<String>,
    set_location: WriteSignal<String>,
    target_day: ReadSignal<TargetDay>,
    set_target_day: WriteSignal<TargetDay>,
    time_of_day: ReadSignal<TimeOfDay>,
    set_time_of_day: WriteSignal<TimeOfDay>,
    gender: ReadSignal<Gender>,
    set_gender: WriteSignal<Gender>,
    style: ReadSignal<StylePreference>,
    set_style: WriteSignal<StylePreference>,
    color_season: ReadSignal<ColorSeason>,
    set_color_season: WriteSignal<ColorSeason>,
    is_loading: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let form_submit = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            on_submit(());
        }
    };

    view! {
        <form class="selection-form" on:submit=form_submit>
            <div class="form-group">
                <label for="location">"出行地点"</label>
                <input
                    type="text"
                    id="location"
                    placeholder="城市或景点名称..."
                    prop:value=move || location.get()
                    on:input=move |ev| {
                        set_location.set(event_target_value(&ev));
                    }
                />
                <div class="preset-locations">
                    {PRESET_LOCATIONS.iter().map(|preset| {
                        let preset = *preset;
                        view! {
                            <button
                                type="button"
                                class="btn btn-secondary btn-small"
                                on:click=move |_| set_location.set(preset.to_string())
                            >
                                {preset}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label for="target-day">"出行日期"</label>
                    <select
                        id="target-day"
                        on:change=move |ev| {
                            set_target_day.set(TargetDay::from_value(&event_target_value(&ev)));
                        }
                    >
                        {TargetDay::ALL.iter().map(|day| {
                            let day = *day;
                            view! {
                                <option
                                    value=day.as_str()
                                    selected=move || target_day.get() == day
                                >
                                    {day.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="time-of-day">"出行时段"</label>
                    <select
                        id="time-of-day"
                        on:change=move |ev| {
                            set_time_of_day.set(TimeOfDay::from_value(&event_target_value(&ev)));
                        }
                    >
                        {TimeOfDay::ALL.iter().map(|time| {
                            let time = *time;
                            view! {
                                <option
                                    value=time.as_str()
                                    selected=move || time_of_day.get() == time
                                >
                                    {time.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="gender">"性别"</label>
                    <select
                        id="gender"
                        on:change=move |ev| {
                            set_gender.set(Gender::from_value(&event_target_value(&ev)));
                        }
                    >
                        {Gender::ALL.iter().map(|g| {
                            let g = *g;
                            view! {
                                <option value=g.as_str() selected=move || gender.get() == g>
                                    {g.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="style">"穿搭风格"</label>
                    <select
                        id="style"
                        on:change=move |ev| {
                            set_style.set(StylePreference::from_value(&event_target_value(&ev)));
                        }
                    >
                        {StylePreference::ALL.iter().map(|s| {
                            let s = *s;
                            view! {
                                <option value=s.as_str() selected=move || style.get() == s>
                                    {s.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="color-season">"色彩季型"</label>
                    <select
                        id="color-season"
                        on:change=move |ev| {
                            set_color_season.set(ColorSeason::from_value(&event_target_value(&ev)));
                        }
                    >
                        {ColorSeason::ALL.iter().map(|season| {
                            let season = *season;
                            view! {
                                <option
                                    value=season.as_str()
                                    selected=move || color_season.get() == season
                                >
                                    {season.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "推荐生成中..." } else { "获取穿搭推荐" }}
            </button>
        </form>
    }
}
