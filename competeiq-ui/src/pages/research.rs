//! Research Hub Page
//!
//! Exact-match lookup across the brief collection, plus attaching research
//! notes to an existing brief. Automated research feeds are an external
//! collaborator and not part of this application.

use leptos::*;
use serde_json::{Map, Value};

use competeiq::store::Brief;

use crate::components::BriefCard;
use crate::state::GlobalState;

/// Research hub page component
#[component]
pub fn Research() -> impl IntoView {
    view! {
        <div class="max-w-3xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Research Hub"</h1>
                <p class="text-gray-400 mt-1">"Dig through your briefs and capture findings"</p>
            </div>

            <Lookup />
            <NoteCapture />
        </div>
    }
}

/// Exact-match field lookup over the collection
#[component]
fn Lookup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (field, set_field) = create_signal("industry".to_string());
    let (value, set_value) = create_signal(String::new());
    // None until the first search runs
    let (results, set_results) = create_signal::<Option<Vec<Brief>>>(None);

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let field = field.get().trim().to_string();
        if field.is_empty() {
            state.show_error("Field name is required");
            return;
        }

        let mut criteria = Map::new();
        criteria.insert(field, Value::String(value.get().trim().to_string()));
        set_results.set(Some(state.lookup(&criteria)));
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4">
            <h2 class="text-lg font-semibold">"Find briefs"</h2>
            <p class="text-sm text-gray-400">"Matches are exact, field against value."</p>

            <form on:submit=on_search class="flex flex-col md:flex-row gap-3">
                <input
                    type="text"
                    class="md:w-48 bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                           focus:outline-none focus:border-blue-500"
                    placeholder="field (e.g. industry)"
                    prop:value=field
                    on:input=move |ev| set_field.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="flex-1 bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                           focus:outline-none focus:border-blue-500"
                    placeholder="value (e.g. SaaS)"
                    prop:value=value
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2.5 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Search"
                </button>
            </form>

            {move || results.get().map(|hits| {
                if hits.is_empty() {
                    view! { <p class="text-gray-500 italic">"No matching briefs."</p> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-3">
                            {hits
                                .into_iter()
                                .map(|brief| view! { <BriefCard brief=brief /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            })}
        </section>
    }
}

/// Append a research note onto an existing brief
#[component]
fn NoteCapture() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (brief_id, set_brief_id) = create_signal(String::new());
    let (note, set_note) = create_signal(String::new());

    let on_attach = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(id) = brief_id.get().trim().parse::<u64>() else {
            state.show_error("Enter a numeric brief id");
            return;
        };

        let mut partial = Map::new();
        partial.insert(
            "research_notes".to_string(),
            Value::String(note.get().trim().to_string()),
        );

        match state.update_brief(id, partial) {
            Ok(brief) => {
                state.show_success(&format!("Note attached to brief #{}", brief.id));
                set_note.set(String::new());
            }
            Err(e) => state.show_error(&e),
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 border border-gray-700 space-y-4">
            <h2 class="text-lg font-semibold">"Attach a research note"</h2>

            <form on:submit=on_attach class="space-y-3">
                <input
                    type="text"
                    class="md:w-48 bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5
                           focus:outline-none focus:border-blue-500"
                    placeholder="brief id"
                    prop:value=brief_id
                    on:input=move |ev| set_brief_id.set(event_target_value(&ev))
                />
                <textarea
                    class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5 h-28
                           focus:outline-none focus:border-blue-500"
                    placeholder="What did you learn?"
                    prop:value=note
                    on:input=move |ev| set_note.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-6 py-2.5 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                >
                    "Attach Note"
                </button>
            </form>
        </section>
    }
}
