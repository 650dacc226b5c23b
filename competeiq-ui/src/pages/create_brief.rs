//! Create Brief Page
//!
//! Form for starting a new competitor analysis.

use leptos::*;
use leptos_router::use_navigate;
use serde_json::{Map, Value};

use competeiq::pages::Page;

use crate::state::GlobalState;

/// Brief creation page component
#[component]
pub fn CreateBrief() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (industry, set_industry) = create_signal(String::new());
    let (website, set_website) = create_signal(String::new());
    let (summary, set_summary) = create_signal(String::new());

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let competitor = name.get().trim().to_string();
        if competitor.is_empty() {
            state.show_error("Competitor name is required");
            return;
        }

        let mut fields = Map::new();
        fields.insert("competitor_name".to_string(), Value::String(competitor));
        for (key, signal) in [
            ("industry", industry),
            ("website", website),
            ("summary", summary),
        ] {
            let value = signal.get().trim().to_string();
            if !value.is_empty() {
                fields.insert(key.to_string(), Value::String(value));
            }
        }

        match state.create_brief(fields) {
            Ok(brief) => {
                state.show_success(&format!("Created brief #{}", brief.id));
                navigate(Page::Dashboard.path(), Default::default());
            }
            Err(e) => state.show_error(&e),
        }
    };

    view! {
        <div class="max-w-2xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"New Analysis"</h1>
                <p class="text-gray-400 mt-1">"Capture what you know about a competitor"</p>
            </div>

            <form on:submit=on_submit class="space-y-5 bg-gray-800 rounded-xl p-6 border border-gray-700">
                <Field label="Competitor name">
                    <input
                        type="text"
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                               focus:outline-none focus:border-blue-500"
                        placeholder="Acme Corp"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </Field>

                <Field label="Industry">
                    <input
                        type="text"
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                               focus:outline-none focus:border-blue-500"
                        placeholder="SaaS"
                        prop:value=industry
                        on:input=move |ev| set_industry.set(event_target_value(&ev))
                    />
                </Field>

                <Field label="Website">
                    <input
                        type="text"
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                               focus:outline-none focus:border-blue-500"
                        placeholder="https://acme.example"
                        prop:value=website
                        on:input=move |ev| set_website.set(event_target_value(&ev))
                    />
                </Field>

                <Field label="Summary">
                    <textarea
                        class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5 h-32
                               focus:outline-none focus:border-blue-500"
                        placeholder="Positioning, strengths, weaknesses..."
                        prop:value=summary
                        on:input=move |ev| set_summary.set(event_target_value(&ev))
                    />
                </Field>

                <button
                    type="submit"
                    class="w-full bg-blue-600 hover:bg-blue-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "Create Brief"
                </button>
            </form>
        </div>
    }
}

/// Labelled form field wrapper
#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-300 mb-1.5">{label}</label>
            {children()}
        </div>
    }
}
