//! Save/delete feedback toasts fed by `GlobalState`

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Saved,
    Failed,
}

/// Icon and background for an outcome
fn toast_style(outcome: Outcome) -> (&'static str, &'static str) {
    match outcome {
        Outcome::Saved => ("🌱", "bg-green-600"),
        Outcome::Failed => ("🥀", "bg-red-600"),
    }
}

/// Bottom-right stack showing the current success and error messages
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let toast = move |signal: RwSignal<Option<String>>, outcome: Outcome| {
        move || {
            signal.get().map(|message| {
                let (icon, bg) = toast_style(outcome);
                view! {
                    <div class=format!("flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg", bg)>
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                }
            })
        }
    };

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {toast(state.success, Outcome::Saved)}
            {toast(state.error, Outcome::Failed)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_style() {
        assert_eq!(toast_style(Outcome::Saved), ("🌱", "bg-green-600"));
        assert_eq!(toast_style(Outcome::Failed), ("🥀", "bg-red-600"));
    }
}
