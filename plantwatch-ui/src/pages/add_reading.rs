//! Add Reading Page
//!
//! `/readings/new`, optionally scoped with `?plant_id=`. A scoped form
//! returns to that plant's details after saving; otherwise to the
//! dashboard.

use leptos::*;
use leptos_router::*;

use plantwatch::views::reading_form::{
    self, PlantOption, ReadingForm, ReadingFormErrors, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
};
use plantwatch::views::route::parse_plant_id;
use plantwatch::views::Route;

use crate::api;
use crate::components::{InlineLoading, Loading};
use crate::dialog;
use crate::pages::plant_form::FieldError;
use crate::state::global::GlobalState;

#[component]
pub fn AddReading() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let query = use_query_map();
    let navigate = use_navigate();

    // An unparseable plant_id is ignored rather than rejected
    let scoped = query
        .with_untracked(|q| q.get("plant_id").cloned())
        .and_then(|raw| parse_plant_id(Some(&raw)).ok());

    let (options, set_options) = create_signal(None::<Vec<PlantOption>>);
    let (plant_id, set_plant_id) = create_signal(String::new());
    let (moisture, set_moisture) = create_signal(String::new());
    let (errors, set_errors) = create_signal(ReadingFormErrors::default());
    let (submitting, set_submitting) = create_signal(false);

    spawn_local(async move {
        match api::fetch_plants().await {
            Ok(plants) => {
                let opts = reading_form::plant_options(&plants);
                if let Some(id) = reading_form::preselect(&opts, scoped) {
                    set_plant_id.set(id.to_string());
                }
                set_options.set(Some(opts));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error loading plants: {}", e).into());
                dialog::alert(LOAD_FAILED_MESSAGE);
                set_options.set(Some(Vec::new()));
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = ReadingForm {
            plant_id: plant_id.get(),
            moisture_percent: moisture.get(),
        };
        let reading = match form.validate() {
            Ok(reading) => reading,
            Err(e) => {
                set_errors.set(e);
                return;
            }
        };
        set_errors.set(ReadingFormErrors::default());
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_reading(&reading).await {
                Ok(_) => {
                    state.show_success("Reading saved");
                    let next = reading_form::redirect_after_save(scoped, &reading);
                    navigate(&next.path(), Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error creating reading: {}", e).into());
                    dialog::alert(SAVE_FAILED_MESSAGE);
                }
            }
            set_submitting.set(false);
        });
    };

    let back = match scoped {
        Some(id) => Route::PlantDetails(id),
        None => Route::Dashboard,
    };

    view! {
        <div class="max-w-xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold">"Log Reading"</h1>

            {move || match options.get() {
                None => view! { <Loading /> }.into_view(),
                Some(opts) => view! {
                    <form on:submit=on_submit.clone() class="bg-gray-800 rounded-xl p-6 space-y-6">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Plant"</label>
                            <select
                                prop:value=move || plant_id.get()
                                on:change=move |ev| set_plant_id.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            >
                                <option value="">"Select a plant"</option>
                                {opts.into_iter().map(|opt| view! {
                                    <option value=opt.id.to_string()>{opt.label}</option>
                                }).collect_view()}
                            </select>
                            <FieldError message=Signal::derive(move || errors.get().plant.map(|e| e.to_string())) />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Moisture (%)"</label>
                            <input
                                type="number"
                                min="0"
                                max="100"
                                step="0.1"
                                prop:value=move || moisture.get()
                                on:input=move |ev| set_moisture.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                            />
                            <FieldError message=Signal::derive(move || errors.get().moisture.map(|e| e.to_string())) />
                        </div>

                        <div class="flex items-center justify-end space-x-3">
                            <A href=back.path() class="px-4 py-3 text-gray-300 hover:text-white">
                                "Cancel"
                            </A>
                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors flex items-center space-x-2"
                            >
                                {move || submitting.get().then(|| view! { <InlineLoading /> })}
                                <span>"Save Reading"</span>
                            </button>
                        </div>
                    </form>
                }.into_view(),
            }}
        </div>
    }
}
