//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use plantwatch::views::Route as Page;

use crate::components::{Nav, Toast};
use crate::pages::{AddPlant, AddReading, Dashboard, EditPlant, PlantDetailsPage, Settings};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/plants/new" view=AddPlant />
                        <Route path="/plants/:id/edit" view=EditPlant />
                        <Route path="/plants/:id" view=PlantDetailsPage />
                        <Route path="/readings/new" view=AddReading />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with backend address
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing the backend in use
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">
                    {move || format!("Backend: {}", state.api_base.get())}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        ().into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let message = move || {
        let path = location.pathname.get();
        let search = location.search.get();
        match search.trim_start_matches('?') {
            "" => not_found_message(&path),
            query => not_found_message(&format!("{}?{}", path, query)),
        }
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🪴"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">{message}</p>
            <A
                href=Page::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}

/// Explain why a path matched no page
fn not_found_message(path: &str) -> String {
    match Page::parse(path) {
        Ok(page) => format!("Try {} instead.", page),
        Err(e) => format!("{}.", e),
    }
}
