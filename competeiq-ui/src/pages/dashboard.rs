//! Dashboard Page
//!
//! Overview of the brief collection: stat cards plus the full listing,
//! newest first.

use leptos::*;
use leptos_router::*;
use std::collections::HashSet;

use competeiq::pages::Page;

use crate::components::BriefCard;
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let briefs = state.briefs;

    // Pick up mutations made on other pages
    create_effect(move |_| state.refresh());
    let total = move || briefs.get().len();
    let industries = move || {
        briefs
            .get()
            .iter()
            .filter_map(|b| b.text("industry").map(str::to_string))
            .collect::<HashSet<_>>()
            .len()
    };
    let latest = move || {
        briefs
            .get()
            .first()
            .and_then(|b| b.text("competitor_name").map(str::to_string))
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your competitor briefs at a glance"</p>
                </div>
                <A
                    href=Page::CreateBrief.path()
                    class="px-5 py-2.5 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "New Analysis"
                </A>
            </div>

            // Stat cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <StatCard label="Briefs on file" value=Signal::derive(move || total().to_string()) />
                <StatCard label="Industries covered" value=Signal::derive(move || industries().to_string()) />
                <StatCard label="Latest analysis" value=Signal::derive(latest) />
            </div>

            // Brief listing, newest first
            <section>
                <h2 class="text-lg font-semibold mb-4">"All Briefs"</h2>
                {move || {
                    let items = briefs.get();
                    if items.is_empty() {
                        view! { <EmptyState /> }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {items
                                    .into_iter()
                                    .map(|brief| view! { <BriefCard brief=brief /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Single stat tile
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="text-2xl font-bold mt-1">{move || value.get()}</p>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 bg-gray-800 rounded-xl border border-dashed border-gray-600 text-center">
            <p class="text-gray-400 mb-4">"No briefs yet. Start by analyzing your first competitor."</p>
            <A
                href=Page::CreateBrief.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Create your first brief"
            </A>
        </div>
    }
}
