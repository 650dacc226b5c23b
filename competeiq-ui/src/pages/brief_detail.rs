//! Brief Detail Page
//!
//! Shows a single brief resolved from the `?id=` query parameter, with
//! summary editing and deletion.

use leptos::*;
use leptos_router::*;
use serde_json::{Map, Value};

use competeiq::pages::Page;
use competeiq::store::Brief;

use crate::state::{format_date, GlobalState};

/// Brief detail page component
#[component]
pub fn BriefDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let query = use_query_map();

    // Re-resolved whenever the query string or the collection changes
    let brief = create_memo(move |_| {
        let _ = state.briefs.get();
        query
            .with(|q| q.get("id").and_then(|raw| raw.trim().parse::<u64>().ok()))
            .and_then(|id| state.find(id))
    });

    view! {
        {move || match brief.get() {
            Some(b) => view! { <BriefView brief=b /> }.into_view(),
            None => view! { <MissingBrief /> }.into_view(),
        }}
    }
}

/// Loaded-brief view with edit and delete actions
#[component]
fn BriefView(brief: Brief) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = brief.id;
    let name = brief
        .text("competitor_name")
        .unwrap_or("Untitled brief")
        .to_string();
    let summary = brief.text("summary").unwrap_or("").to_string();
    let created = format_date(&brief.created_date);
    let updated = format_date(&brief.updated_date);

    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(String::new());

    let begin_edit = {
        let summary = summary.clone();
        move |_| {
            set_draft.set(summary.clone());
            set_editing.set(true);
        }
    };

    let on_save = {
        let state = state.clone();
        move |_| {
            let mut partial = Map::new();
            partial.insert("summary".to_string(), Value::String(draft.get()));
            match state.update_brief(id, partial) {
                Ok(_) => {
                    state.show_success("Brief updated");
                    set_editing.set(false);
                }
                Err(e) => state.show_error(&e),
            }
        }
    };

    let on_delete = {
        let state = state.clone();
        let navigate = use_navigate();
        move |_| match state.delete_brief(id) {
            Ok(_) => {
                state.show_success("Brief deleted");
                navigate(Page::Dashboard.path(), Default::default());
            }
            Err(e) => state.show_error(&e),
        }
    };

    // Remaining attributes, summary shown separately below
    let rows: Vec<(String, String)> = brief
        .fields
        .iter()
        .filter(|(key, _)| *key != "summary" && *key != "competitor_name")
        .map(|(key, value)| {
            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.replace('_', " "), shown)
        })
        .collect();

    view! {
        <div class="max-w-3xl space-y-8">
            // Header with actions
            <div class="flex items-start justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{name}</h1>
                    <p class="text-sm text-gray-400 mt-1">
                        {format!("Brief #{id} · created {created} · updated {updated}")}
                    </p>
                </div>
                <button
                    on:click=on_delete
                    class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm font-medium transition-colors"
                >
                    "Delete"
                </button>
            </div>

            // Attributes
            {(!rows.is_empty()).then(|| view! {
                <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <h2 class="text-lg font-semibold mb-4">"Details"</h2>
                    <dl class="grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-3">
                        {rows
                            .into_iter()
                            .map(|(key, value)| view! {
                                <div>
                                    <dt class="text-xs uppercase tracking-wide text-gray-500">{key}</dt>
                                    <dd class="text-sm text-gray-200 mt-0.5">{value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </section>
            })}

            // Summary with inline editing
            <section class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Summary"</h2>
                    {move || {
                        if !editing.get() {
                            view! {
                                <button
                                    on:click=begin_edit.clone()
                                    class="text-sm text-blue-400 hover:text-blue-300"
                                >
                                    "Edit"
                                </button>
                            }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>

                {move || {
                    if editing.get() {
                        view! {
                            <div class="space-y-3">
                                <textarea
                                    class="w-full bg-gray-900 border border-gray-700 rounded-lg px-4 py-2.5 h-32
                                           focus:outline-none focus:border-blue-500"
                                    prop:value=draft
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                />
                                <div class="flex space-x-2">
                                    <button
                                        on:click=on_save.clone()
                                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "Save"
                                    </button>
                                    <button
                                        on:click=move |_| set_editing.set(false)
                                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        }.into_view()
                    } else if summary.is_empty() {
                        view! { <p class="text-gray-500 italic">"No summary yet."</p> }.into_view()
                    } else {
                        view! { <p class="text-gray-200 whitespace-pre-wrap">{summary.clone()}</p> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Shown when the query names no existing brief
#[component]
fn MissingBrief() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-2xl font-bold mb-2">"Brief not found"</h1>
            <p class="text-gray-400 mb-6">"This brief doesn't exist or was deleted."</p>
            <A
                href=Page::Dashboard.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Back to Dashboard"
            </A>
        </div>
    }
}
