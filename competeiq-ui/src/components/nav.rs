//! Navigation Component
//!
//! Sidebar with brand block and navigation links. Brief Detail is reached
//! from cards, not from the nav.

use leptos::*;
use leptos_router::*;

use competeiq::pages::Page;

/// Sidebar navigation component
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 bg-gray-800 border-r border-gray-700 flex flex-col">
            <div class="p-6">
                // Brand block
                <A href=Page::Dashboard.path() class="flex items-center space-x-3 mb-8">
                    <span class="text-2xl">"📈"</span>
                    <div>
                        <h1 class="text-lg font-bold text-white">"CompeteIQ"</h1>
                        <p class="text-xs text-gray-400">"Intelligence Platform"</p>
                    </div>
                </A>

                // Navigation links
                <nav class="space-y-2">
                    <NavLink page=Page::Dashboard />
                    <NavLink page=Page::CreateBrief />
                    <NavLink page=Page::Research />
                </nav>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    view! {
        <A
            href=page.path()
            class="block px-4 py-3 rounded-lg text-sm font-medium text-gray-300
                   hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {page.title()}
        </A>
    }
}
