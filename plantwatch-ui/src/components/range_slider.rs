//! Range Slider Component
//!
//! Linked min/max sliders for a plant's ideal moisture range. Raising the
//! minimum past the maximum drags the maximum along, and vice versa.

use leptos::*;
use plantwatch::views::plant_form::{RangeSliders, MOISTURE_LOWER, MOISTURE_UPPER};

#[component]
pub fn RangeSlider(sliders: RwSignal<RangeSliders>) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <SliderRow
                label="Ideal minimum"
                value=Signal::derive(move || sliders.get().min())
                on_change=move |v| sliders.update(|s| s.set_min(v))
            />
            <SliderRow
                label="Ideal maximum"
                value=Signal::derive(move || sliders.get().max())
                on_change=move |v| sliders.update(|s| s.set_max(v))
            />
        </div>
    }
}

#[component]
fn SliderRow(
    label: &'static str,
    value: Signal<i32>,
    on_change: impl Fn(i32) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex items-center justify-between mb-2">
                <label class="text-sm text-gray-400">{label}</label>
                <span class="font-semibold">{move || format!("{}%", value.get())}</span>
            </div>
            <input
                type="range"
                min=MOISTURE_LOWER
                max=MOISTURE_UPPER
                step="1"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                        on_change(v);
                    }
                }
                style=move || {
                    let fill = RangeSliders::track_fill(value.get());
                    format!("background: linear-gradient(to right, #16a34a {0}, #374151 {0})", fill)
                }
                class="w-full"
            />
        </div>
    }
}
