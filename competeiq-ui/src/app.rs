//! App Root Component
//!
//! Main application component with routing and global providers. The root
//! path always redirects to the dashboard; the four known paths render
//! their page inside the shared shell.

use leptos::*;
use leptos_router::*;

use competeiq::pages::Page;

use crate::components::{Sidebar, Toast};
use crate::pages::{BriefDetail, CreateBrief, Dashboard, Research};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state (store + signals) to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex">
                // Sidebar navigation
                <Sidebar />

                // Main content area
                <main class="flex-1 overflow-auto px-8 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=Page::Dashboard.path() /> } />
                        <Route path=Page::Dashboard.path() view=Dashboard />
                        <Route path=Page::CreateBrief.path() view=CreateBrief />
                        <Route path=Page::BriefDetail.path() view=BriefDetail />
                        <Route path=Page::Research.path() view=Research />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Dashboard.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
