//! Plant Form Pages
//!
//! Add and edit a plant. Both share one form; edit pre-fills it from the
//! backend.

use leptos::*;
use leptos_router::*;

use plantwatch::views::plant_form::{FormMode, PlantForm, PlantFormErrors, RangeSliders};
use plantwatch::views::route::parse_plant_id;
use plantwatch::views::Route;

use crate::api;
use crate::components::{InlineLoading, Loading, RangeSlider};
use crate::dialog;
use crate::state::global::GlobalState;

/// `/plants/new`
#[component]
pub fn AddPlant() -> impl IntoView {
    view! { <PlantFormView mode=FormMode::Create initial=PlantForm::default() /> }
}

/// `/plants/:id/edit`
#[component]
pub fn EditPlant() -> impl IntoView {
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

    let (initial, set_initial) = create_signal(None::<PlantForm>);

    spawn_local(async move {
        match api::fetch_plant(id).await {
            Ok(plant) => set_initial.set(Some(PlantForm::from_plant(&plant))),
            Err(e) => {
                web_sys::console::error_1(&format!("Error loading plant {}: {}", id, e).into());
                dialog::alert("Could not load plant.");
                navigate(&Route::Dashboard.path(), Default::default());
            }
        }
    });

    view! {
        {move || match initial.get() {
            Some(form) => view! { <PlantFormView mode=FormMode::Edit(id) initial=form /> }.into_view(),
            None => view! { <Loading /> }.into_view(),
        }}
    }.into_view()
}

#[component]
fn PlantFormView(mode: FormMode, initial: PlantForm) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(initial.name.clone());
    let (species, set_species) = create_signal(initial.species.clone());
    let sliders = create_rw_signal(RangeSliders::new(
        initial.ideal_moisture_min,
        initial.ideal_moisture_max,
    ));
    let (errors, set_errors) = create_signal(PlantFormErrors::default());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = PlantForm {
            name: name.get(),
            species: species.get(),
            ..PlantForm::default()
        }
        .with_sliders(sliders.get());

        // Invalid input never reaches the network
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                set_errors.set(e);
                return;
            }
        };
        set_errors.set(PlantFormErrors::default());
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match mode {
                FormMode::Create => api::create_plant(&payload).await,
                FormMode::Edit(id) => api::update_plant(id, &payload).await,
            };

            match result {
                Ok(plant) => {
                    state.show_success(&format!("Saved \"{}\"", plant.name));
                    navigate(&Route::Dashboard.path(), Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving plant: {}", e).into());
                    dialog::alert(mode.failure_message());
                }
            }
            set_submitting.set(false);
        });
    };

    let title = match mode {
        FormMode::Create => "Add Plant",
        FormMode::Edit(_) => "Edit Plant",
    };

    view! {
        <div class="max-w-xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold">{title}</h1>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-6">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <FieldError message=Signal::derive(move || errors.get().name.map(|e| e.to_string())) />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Species"</label>
                    <input
                        type="text"
                        placeholder="Unknown"
                        prop:value=move || species.get()
                        on:input=move |ev| set_species.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <RangeSlider sliders=sliders />
                    <FieldError message=Signal::derive(move || errors.get().min.map(|e| e.to_string())) />
                    <FieldError message=Signal::derive(move || errors.get().max.map(|e| e.to_string())) />
                </div>

                <div class="flex items-center justify-end space-x-3">
                    <A href=Route::Dashboard.path() class="px-4 py-3 text-gray-300 hover:text-white">
                        "Cancel"
                    </A>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-semibold transition-colors flex items-center space-x-2"
                    >
                        {move || submitting.get().then(|| view! { <InlineLoading /> })}
                        <span>{mode.submit_label()}</span>
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Inline validation message under a field
#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <p class="text-sm text-red-400 mt-1">{msg}</p>
        })
    }
}
