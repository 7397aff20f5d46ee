//! Settings Page
//!
//! Backend address and dashboard status policy.

use leptos::*;
use plantwatch::model::StatusPolicy;

use crate::api;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Plantwatch dashboard"</p>
            </div>

            // API Connection
            <ApiSettings />

            // Status display
            <StatusSettings />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);
        state.set_api_base(&api_url.get());

        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(plants) => {
                    set_test_result.set(Some(true));
                    state.show_success(&format!("Connection successful! {} plants", plants.len()));
                }
                Err(e) => {
                    set_test_result.set(Some(false));
                    state.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        state.set_api_base(&api_url.get());
        set_api_url.set(state.api_base.get_untracked());
        state.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Backend URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            placeholder=api::DEFAULT_API_BASE
                            prop:value=move || api_url.get()
                            on:input=move |ev| set_api_url.set(event_target_value(&ev))
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Which status the dashboard shows
#[component]
fn StatusSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Status Display"</h2>

            <label class="block text-sm text-gray-400 mb-2">"Dashboard status source"</label>
            <select
                prop:value=move || api::policy_value(state.status_policy.get())
                on:change=move |ev| {
                    let policy = event_target_value(&ev).parse::<StatusPolicy>().unwrap_or_default();
                    state.set_status_policy(policy);
                    state.show_success("Status source saved");
                }
                class="bg-gray-700 rounded-lg px-4 py-3 w-full max-w-xs
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="server">"Backend status (classify locally when missing)"</option>
                <option value="client">"Always classify the last reading locally"</option>
            </select>
            <p class="text-sm text-gray-500 mt-2">
                "The plant details page always classifies the newest reading locally."
            </p>
        </section>
    }
}
