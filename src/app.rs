//! Doc-Tags Demo App
//!
//! Mounts two tag boxes against a local metadata service: an editable one
//! wired to a confirm listener, and a readonly mirror of the same document.

use leptos::prelude::*;
use leptos_tags_input::Tag;

use crate::components::DocumentTags;

const DEMO_SRC: &str = "http://localhost:8000/api";

#[component]
pub fn App() -> impl IntoView {
    let on_confirm = Callback::new(|tags: Vec<Tag>| {
        let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        log::info!("country tags confirmed: [{}]", names.join(", "));
    });

    view! {
        <div class="app-layout">
            <h1>"Doc-Tags"</h1>

            <section>
                <h2>"Countries (editable)"</h2>
                <DocumentTags
                    identifier="DOC1"
                    kind="country"
                    src=DEMO_SRC
                    on_confirm=on_confirm
                    editable_class="tags-open"
                    uneditable_class="tags-locked"
                    confirm_button_class="confirm-btn"
                />
            </section>

            <section>
                <h2>"Countries (readonly)"</h2>
                <DocumentTags
                    identifier="DOC1"
                    kind="country"
                    src=DEMO_SRC
                    readonly=true
                    uneditable_class="tags-locked"
                />
            </section>
        </div>
    }
}
