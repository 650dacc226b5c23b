//! Brief Card Component
//!
//! Compact card for one brief, linking into the detail page.

use leptos::*;
use leptos_router::*;

use competeiq::pages::create_page_url;
use competeiq::store::Brief;

use crate::state::format_date;

/// Card showing one brief's headline fields
#[component]
pub fn BriefCard(brief: Brief) -> impl IntoView {
    let name = brief
        .text("competitor_name")
        .unwrap_or("Untitled brief")
        .to_string();
    let industry = brief.text("industry").map(str::to_string);
    let created = format_date(&brief.created_date);
    let detail_url = create_page_url("BriefDetail", &format!("?id={}", brief.id));

    view! {
        <A
            href=detail_url
            class="block bg-gray-800 hover:bg-gray-750 rounded-xl p-5 transition-colors
                   border border-gray-700 hover:border-gray-600"
        >
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="font-semibold text-white">{name}</h3>
                    {industry.map(|i| view! {
                        <p class="text-sm text-gray-400 mt-1">{i}</p>
                    })}
                </div>
                <span class="text-xs text-gray-500">{created}</span>
            </div>
        </A>
    }
}
