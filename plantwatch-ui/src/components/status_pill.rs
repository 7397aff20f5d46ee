//! Status pill for a plant's watering status

use leptos::*;
use plantwatch::model::PlantStatus;

#[component]
pub fn StatusPill(status: PlantStatus) -> impl IntoView {
    view! {
        <span class=pill_class(status)>{status.label()}</span>
    }
}

fn pill_class(status: PlantStatus) -> String {
    let color = match status {
        PlantStatus::Ok => "bg-green-700 text-green-100",
        PlantStatus::NeedsWater => "bg-amber-600 text-amber-50",
        PlantStatus::Overwatered => "bg-blue-700 text-blue-100",
        PlantStatus::NoData => "bg-gray-600 text-gray-200",
    };
    format!(
        "status-pill {} {} px-3 py-1 rounded-full text-xs font-semibold",
        status.css_class(),
        color
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_class_carries_status_class() {
        for status in PlantStatus::all() {
            assert!(pill_class(*status).contains(status.css_class()));
        }
    }
}
