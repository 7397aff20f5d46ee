//! Global Application State
//!
//! Reactive state management using Leptos signals. Page data (plant lists,
//! forms, histories) is owned by each page; only cross-page concerns live
//! here.

use leptos::*;
use plantwatch::model::StatusPolicy;

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Backend base URL in use
    pub api_base: RwSignal<String>,
    /// Which status the dashboard trusts
    pub status_policy: RwSignal<StatusPolicy>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api_base: create_rw_signal(api::get_api_base()),
        status_policy: create_rw_signal(api::get_status_policy()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Persist and apply a new backend URL
    pub fn set_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.api_base.set(api::get_api_base());
    }

    /// Persist and apply a new status policy
    pub fn set_status_policy(&self, policy: StatusPolicy) {
        api::set_status_policy(policy);
        self.status_policy.set(policy);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }
}
