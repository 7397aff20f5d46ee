//! Summary Cards Component
//!
//! Per-status plant counts above the dashboard table.

use leptos::*;
use plantwatch::model::PlantStatus;
use plantwatch::views::StatusSummary;

#[component]
pub fn SummaryCards(
    #[prop(into)]
    summary: Signal<StatusSummary>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
            <SummaryCard label="Total" count=Signal::derive(move || summary.get().total) accent="" />
            {PlantStatus::all().iter().map(|status| {
                let status = *status;
                view! {
                    <SummaryCard
                        label=status.label()
                        count=Signal::derive(move || summary.get().count(status))
                        accent=status.css_class()
                    />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn SummaryCard(
    label: &'static str,
    count: Signal<usize>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gray-800 rounded-lg p-4 border border-gray-700 {}", accent)>
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{move || count.get()}</div>
        </div>
    }
}
