//! 设置面板组件
//!
//! 生成式 API Key 的填写/保存/清除。构建时注入了环境变量 Key 时，
//! 输入区整体替换为只读提示，不允许编辑

use leptos::prelude::*;

use crate::storage;

#[component]
pub fn SettingsPanel<FS, FC>(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
    key_status: ReadSignal<String>,
    on_save: FS,
    on_clear: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="settings-panel">
            <Show
                when=|| !storage::is_env_key()
                fallback=|| view! {
                    <p class="api-key-env-notice">
                        "API Key 已通过构建环境注入，本会话内不可修改"
                    </p>
                }
            >
                <div class="form-group">
                    <label for="api-key">"DeepSeek API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="请输入 API Key..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            set_api_key.set(event_target_value(&ev));
                        }
                    />
                    <a
                        href="https://platform.deepseek.com/api_keys"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="api-key-link"
                    >
                        "获取 API Key →"
                    </a>
                    <div class="api-actions">
                        <button
                            class="btn btn-primary btn-small"
                            on:click={
                                let on_save = on_save.clone();
                                move |_| on_save(())
                            }
                        >
                            "保存"
                        </button>
                        <button
                            class="btn btn-tertiary btn-small"
                            on:click={
                                let on_clear = on_clear.clone();
                                move |_| on_clear(())
                            }
                        >
                            "清除"
                        </button>
                    </div>
                    <div class="api-key-status">
                        {move || key_status.get()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
