//! Document Tags Component
//!
//! The tag box widget: binds a tag-input control to one document's tag
//! metadata and adds the confirm/reopen button. The backend is contacted
//! on mount; edits are pushed one request per change.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_tags_input::{Tag, TagsInput};

use crate::api::RestTagStore;
use crate::config::TagBoxConfig;
use crate::state::TagBoxState;
use crate::tag_box::TagBox;

/// Tag box for one document
///
/// # Arguments
/// * `identifier` - Document the tags belong to
/// * `kind` - Tag category, part of the endpoint path (e.g. "country")
/// * `src` - Base URL of the metadata service
/// * `readonly` - Renders the tags uneditable and hides the confirm button
/// * `on_confirm` - Receives the tag list after a confirmation is accepted
/// * `editable_class` / `uneditable_class` - Forwarded to the input control
/// * `confirm_button_class` - CSS class of the confirm/reopen button
#[component]
pub fn DocumentTags(
    #[prop(into)] identifier: String,
    #[prop(into)] kind: String,
    #[prop(into)] src: String,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] on_confirm: Option<Callback<Vec<Tag>>>,
    #[prop(optional, into)] editable_class: String,
    #[prop(optional, into)] uneditable_class: String,
    #[prop(optional, into)] confirm_button_class: String,
) -> impl IntoView {
    let config = TagBoxConfig {
        document_id: identifier,
        kind,
        base_url: src,
        readonly,
        editable_class,
        uneditable_class,
        confirm_button_class,
    };
    let store = RestTagStore::new(&config);

    let editable_class = config.editable_class.clone();
    let uneditable_class = config.uneditable_class.clone();
    let confirm_button_class = config.confirm_button_class.clone();

    let mut tag_box = TagBox::new(config, store);
    if let Some(cb) = on_confirm {
        tag_box = tag_box.with_confirm_listener(move |tags| cb.run(tags));
    }
    // The controller is single-threaded state; only the handle crosses
    // into the callbacks below, and a task that outlives the widget finds
    // it already disposed and bails out.
    let tag_box = StoredValue::new_local(Rc::new(tag_box));

    let tags_model = RwSignal::new(Vec::<Tag>::new());
    let (editable, set_editable) = signal(!readonly);
    let (button_disabled, set_button_disabled) = signal(true);
    let (button_label, set_button_label) = signal(None::<&'static str>);

    let apply_state = move |state: TagBoxState| {
        set_editable.set(state.allow_edit);
        set_button_disabled.set(state.confirm_button_disabled);
        set_button_label.set(state.button_label.map(|label| label.as_str()));
    };

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(tag_box) = tag_box.try_get_value() else {
                return;
            };
            let _ = tag_box.fetch_tags().await;
            let state = tag_box.snapshot();
            tags_model.set(state.tags.clone());
            apply_state(state);
        });
    });

    // The control has already updated its model when these fire; the
    // controller mirrors the change and persists it. Failures are logged
    // inside the controller and the visible list is left as-is.
    let on_added = Callback::new(move |tag: Tag| {
        spawn_local(async move {
            let Some(tag_box) = tag_box.try_get_value() else {
                return;
            };
            let _ = tag_box.add_tag(tag).await;
        });
    });
    let on_removed = Callback::new(move |tag: Tag| {
        spawn_local(async move {
            let Some(tag_box) = tag_box.try_get_value() else {
                return;
            };
            let _ = tag_box.remove_tag(&tag).await;
        });
    });

    view! {
        <div class="document-tags">
            <TagsInput
                tags=tags_model
                editable=editable
                on_tag_added=on_added
                on_tag_removed=on_removed
                editable_class=editable_class
                uneditable_class=uneditable_class
            />
            <Show when=move || !readonly>
                <button
                    class=confirm_button_class.clone()
                    disabled=move || button_disabled.get()
                    on:click=move |_| {
                        spawn_local(async move {
                            let Some(tag_box) = tag_box.try_get_value() else {
                                return;
                            };
                            let _ = tag_box.toggle_confirmation().await;
                            apply_state(tag_box.snapshot());
                        });
                    }
                >
                    {move || button_label.get().unwrap_or_default()}
                </button>
            </Show>
        </div>
    }
}
