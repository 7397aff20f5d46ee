//! Dashboard Page
//!
//! Status summary and a searchable, filterable table of all plants.

use leptos::*;
use leptos_router::*;

use plantwatch::model::PlantStatus;
use plantwatch::views::dashboard::delete_prompt;
use plantwatch::views::{DashboardRow, DashboardView, Route, StatusFilter};

use crate::api;
use crate::components::{Loading, StatusPill, SummaryCards};
use crate::dialog;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let dashboard = create_rw_signal(DashboardView::default());
    let (loaded, set_loaded) = create_signal(false);
    let (load_failed, set_load_failed) = create_signal(false);

    // Fetch the plant list on mount and whenever the policy changes
    create_effect(move |_| {
        let policy = state.status_policy.get();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_dashboard().await {
                Ok(plants) => {
                    // Keep the current search and filter across reloads
                    let filter = dashboard.with_untracked(|d| d.filter().clone());
                    let mut view = DashboardView::new(plants, policy);
                    view.set_filter(filter);
                    dashboard.set(view);
                    set_load_failed.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading dashboard: {}", e).into());
                    state.show_error(&e);
                    set_load_failed.set(true);
                }
            }

            set_loaded.set(true);
            state.loading.set(false);
        });
    });

    let on_delete = move |id: i64| {
        let Some(plant) = dashboard.with_untracked(|d| d.find(id).cloned()) else {
            return;
        };
        if !dialog::confirm(&delete_prompt(&plant)) {
            return;
        }

        spawn_local(async move {
            match api::delete_plant(id).await {
                Ok(()) => {
                    // Drop the row locally; no reload
                    dashboard.update(|d| {
                        d.remove(id);
                    });
                    state.show_success(&format!("Deleted \"{}\"", plant.name));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting plant: {}", e).into());
                    state.show_error(&e);
                    dialog::alert("Failed to delete plant. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Moisture status of all your plants"</p>
                </div>
                <A
                    href=Route::AddPlant.path()
                    class="px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Plant"
                </A>
            </div>

            <SummaryCards summary=Signal::derive(move || dashboard.with(|d| d.summary())) />

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <Filters dashboard=dashboard />

                {move || {
                    if !loaded.get() {
                        view! { <Loading /> }.into_view()
                    } else if load_failed.get() {
                        view! {
                            <p class="text-red-400">"Failed to load plants. Please refresh the page."</p>
                        }.into_view()
                    } else {
                        let rows = dashboard.with(|d| d.rows(chrono::Utc::now()));
                        let empty_message = if dashboard.with(|d| d.plants().is_empty()) {
                            "No plants yet."
                        } else {
                            "No plants match the current filter."
                        };
                        view! { <PlantTable rows=rows empty_message=empty_message on_delete=on_delete /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Search box and status filter
#[component]
fn Filters(dashboard: RwSignal<DashboardView>) -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row gap-4">
            <input
                type="search"
                placeholder="Search by name or species"
                prop:value=move || dashboard.with(|d| d.filter().search_input().to_string())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    dashboard.update(|d| d.set_search(&term));
                }
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <select
                prop:value=move || dashboard.with(|d| d.filter().status.value())
                on:change=move |ev| {
                    let filter = StatusFilter::from_value(&event_target_value(&ev));
                    dashboard.update(|d| d.set_status_filter(filter));
                }
                class="bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="all">"All statuses"</option>
                {PlantStatus::all().iter().map(|status| view! {
                    <option value=status.as_str()>{status.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn PlantTable(
    rows: Vec<DashboardRow>,
    empty_message: &'static str,
    on_delete: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="text-gray-400 text-sm">{empty_message}</p> }.into_view();
    }

    view! {
        <table class="w-full text-left">
            <thead class="text-gray-400 text-sm border-b border-gray-700">
                <tr>
                    <th class="py-2">"Name"</th>
                    <th>"Species"</th>
                    <th>"Ideal Range"</th>
                    <th>"Last Reading"</th>
                    <th>"Status"</th>
                    <th class="text-right">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| {
                    let id = row.id;
                    view! {
                        <tr class="border-b border-gray-700 last:border-0">
                            <td class="py-3">
                                <A href=Route::PlantDetails(id).path() class="font-medium hover:underline">
                                    {row.name}
                                </A>
                            </td>
                            <td class="text-gray-300">{row.species}</td>
                            <td>{row.ideal_range}</td>
                            <td class="text-gray-300">{row.last_reading}</td>
                            <td><StatusPill status=row.status /></td>
                            <td class="text-right space-x-2">
                                <A href=Route::AddReading { plant_id: Some(id) }.path() class="text-sm text-primary-400 hover:underline">
                                    "Log"
                                </A>
                                <A href=Route::EditPlant(id).path() class="text-sm text-gray-300 hover:underline">
                                    "Edit"
                                </A>
                                <button
                                    on:click=move |_| on_delete(id)
                                    class="text-sm text-red-400 hover:underline"
                                >
                                    "Delete"
                                </button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }.into_view()
}
