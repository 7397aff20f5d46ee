//! Plant Details Page
//!
//! One plant with its status recomputed from the newest reading, and the
//! full reading history.

use leptos::*;
use leptos_router::*;

use plantwatch::views::details::{HistoryRow, LOAD_FAILED_MESSAGE, NO_READINGS_MESSAGE};
use plantwatch::views::format::{format_absolute, format_percent};
use plantwatch::views::route::parse_plant_id;
use plantwatch::views::{PlantDetails, Route};

use crate::api;
use crate::components::{Loading, StatusPill};
use crate::dialog;
use crate::state::global::GlobalState;

#[component]
pub fn PlantDetailsPage() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let params = use_params_map();
    let navigate = use_navigate();

    let id = match parse_plant_id(params.with_untracked(|p| p.get("id").cloned()).as_deref()) {
        Ok(id) => id,
        Err(e) => {
            dialog::alert(&e.to_string());
            navigate(&Route::Dashboard.path(), Default::default());
            return ().into_view();
        }
    };

    let (details, set_details) = create_signal(None::<PlantDetails>);

    spawn_local(async move {
        state.loading.set(true);
        match api::fetch_plant(id).await {
            Ok(plant) => {
                let readings = api::fetch_readings(id).await;
                set_details.set(Some(PlantDetails::new(plant, readings)));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error loading plant {}: {}", id, e).into());
                state.show_error(&e);
                dialog::alert(LOAD_FAILED_MESSAGE);
                navigate(&Route::Dashboard.path(), Default::default());
            }
        }
        state.loading.set(false);
    });

    view! {
        {move || match details.get() {
            Some(details) => view! { <DetailsCard details=details /> }.into_view(),
            None => view! { <Loading /> }.into_view(),
        }}
    }.into_view()
}

#[component]
fn DetailsCard(details: PlantDetails) -> impl IntoView {
    let id = details.plant().id;
    let now = chrono::Utc::now();

    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-start justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">{details.plant().name.clone()}</h1>
                        <p class="text-gray-400 mt-1">{details.species_label().to_string()}</p>
                    </div>
                    <StatusPill status=details.status() />
                </div>

                <dl class="grid grid-cols-2 md:grid-cols-3 gap-4 mt-6">
                    <Stat label="Ideal range" value=details.ideal_range_label() />
                    <Stat label="Last moisture" value=details.last_moisture_label() />
                    <Stat label="Last reading at" value=details.last_reading_time() />
                </dl>
                <p class="text-sm text-gray-400 mt-4">{details.last_reading_short(now)}</p>

                <div class="flex space-x-3 mt-6">
                    <A
                        href=Route::AddReading { plant_id: Some(id) }.path()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Log Reading"
                    </A>
                    <A
                        href=Route::EditPlant(id).path()
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "Edit"
                    </A>
                    <A href=Route::Dashboard.path() class="px-4 py-2 text-gray-300 hover:text-white">
                        "Back"
                    </A>
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Reading History"</h2>
                <HistoryTable rows=details.history() />
            </section>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4">
            <dt class="text-sm text-gray-400">{label}</dt>
            <dd class="text-xl font-semibold mt-1">{value}</dd>
        </div>
    }
}

#[component]
fn HistoryTable(rows: Vec<HistoryRow>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="text-gray-400 text-sm">{NO_READINGS_MESSAGE}</p> }.into_view();
    }

    view! {
        <table class="w-full text-left">
            <thead class="text-gray-400 text-sm border-b border-gray-700">
                <tr>
                    <th class="py-2">"Time"</th>
                    <th>"Moisture"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr class="border-b border-gray-700 last:border-0">
                        <td class="py-2 text-gray-300">{format_absolute(Some(row.timestamp))}</td>
                        <td>{format_percent(row.moisture_percent)}</td>
                        <td><StatusPill status=row.status /></td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }.into_view()
}
