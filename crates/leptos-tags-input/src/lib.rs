//! Leptos Tags Input
//!
//! Reusable tag-list control: renders tags as removable chips with an
//! add-input, gated by an `editable` signal. The control owns the chip
//! model and mutates the bound signal itself; hosts observe changes
//! through the add/remove callbacks. No backend knowledge lives here.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

/// A single tag value.
///
/// Serializes as the bare JSON string, so a tag travels unwrapped in
/// request bodies (`"Brazil"`, not `{"text":"Brazil"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for Tag {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Turn raw input into a tag candidate: trims whitespace, rejects empties.
pub fn normalize_input(raw: &str) -> Option<Tag> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(Tag::new(trimmed))
    }
}

/// Tag-list control
///
/// Shows one chip per tag in the model. While `editable`, each chip gets a
/// remove button and an add-input row is rendered; submitting a non-empty
/// value appends it. The model signal is updated first, then the matching
/// callback fires with the affected tag. Duplicates are not rejected here;
/// whoever stores the tags decides about uniqueness.
///
/// # Arguments
/// * `tags` - Model signal the control reads and mutates
/// * `editable` - Gates the add-input and the per-chip remove buttons
/// * `on_tag_added` / `on_tag_removed` - Change notifications
/// * `editable_class` / `uneditable_class` - Wrapper class per editability
/// * `placeholder` - Add-input placeholder, "Add a tag" by default
#[component]
pub fn TagsInput(
    tags: RwSignal<Vec<Tag>>,
    editable: ReadSignal<bool>,
    #[prop(optional, into)] on_tag_added: Option<Callback<Tag>>,
    #[prop(optional, into)] on_tag_removed: Option<Callback<Tag>>,
    #[prop(optional, into)] editable_class: String,
    #[prop(optional, into)] uneditable_class: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    let placeholder = if placeholder.is_empty() {
        "Add a tag".to_string()
    } else {
        placeholder
    };

    let wrapper_class = move || {
        let custom = if editable.get() {
            editable_class.clone()
        } else {
            uneditable_class.clone()
        };
        if custom.is_empty() {
            "tags-input".to_string()
        } else {
            format!("tags-input {}", custom)
        }
    };

    let add_tag = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = input_value.get();
        let Some(tag) = normalize_input(&raw) else {
            return;
        };
        tags.update(|list| list.push(tag.clone()));
        set_input_value.set(String::new());
        if let Some(cb) = on_tag_added {
            cb.run(tag);
        }
    };

    let remove_tag = move |tag: Tag| {
        tags.update(|list| {
            if let Some(idx) = list.iter().position(|t| *t == tag) {
                list.remove(idx);
            }
        });
        if let Some(cb) = on_tag_removed {
            cb.run(tag);
        }
    };

    view! {
        <div class=wrapper_class>
            <ul class="tags-input-list">
                // Keyed by position: the model may hold duplicates until
                // the authoritative store has its say.
                <For
                    each=move || tags.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, tag): (usize, Tag)| {
                        let label = tag.to_string();
                        let chip_tag = tag;
                        view! {
                            <li class="tags-input-chip">
                                <span class="tags-input-text">{label}</span>
                                {move || {
                                    if editable.get() {
                                        let tag = chip_tag.clone();
                                        view! {
                                            <button
                                                class="tags-input-remove"
                                                on:click=move |_| remove_tag(tag.clone())
                                            >
                                                "×"
                                            </button>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="tags-input-locked"></span> }.into_any()
                                    }
                                }}
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || editable.get()>
                <form class="tags-input-form" on:submit=add_tag>
                    <input
                        type="text"
                        placeholder=placeholder.clone()
                        prop:value=move || input_value.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_input_value.set(input.value());
                        }
                    />
                    <button type="submit">"+"</button>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_serializes_as_bare_string() {
        let tag = Tag::new("Brazil");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"Brazil\"");
    }

    #[test]
    fn test_tag_deserializes_from_bare_string() {
        let tag: Tag = serde_json::from_str("\"Chile\"").unwrap();
        assert_eq!(tag, Tag::new("Chile"));
    }

    #[test]
    fn test_tag_list_round_trips() {
        let tags: Vec<Tag> = serde_json::from_str(r#"["Chile","Peru"]"#).unwrap();
        assert_eq!(tags, vec![Tag::new("Chile"), Tag::new("Peru")]);
    }

    #[test]
    fn test_normalize_input_trims() {
        assert_eq!(normalize_input("  Peru "), Some(Tag::new("Peru")));
    }

    #[test]
    fn test_normalize_input_rejects_blank() {
        assert_eq!(normalize_input(""), None);
        assert_eq!(normalize_input("   "), None);
    }
}
