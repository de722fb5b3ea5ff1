//! Tag Box Controller
//!
//! Drives one document's tag set: mirrors the backend tag list, tracks the
//! confirmation flag and decides when edits are allowed. Operations are
//! fire-and-forget against the store; nothing queues or serializes
//! overlapping requests, and failures are logged and handed back to the
//! caller, never retried.

use std::cell::RefCell;
use std::rc::Rc;

use leptos_tags_input::Tag;

use crate::api::{ConfirmAction, TagStore};
use crate::config::TagBoxConfig;
use crate::error::TagBoxError;
use crate::state::TagBoxState;

pub struct TagBox<S> {
    config: TagBoxConfig,
    store: S,
    state: RefCell<TagBoxState>,
    on_confirm: Option<Rc<dyn Fn(Vec<Tag>)>>,
}

impl<S: TagStore> TagBox<S> {
    pub fn new(config: TagBoxConfig, store: S) -> Self {
        let state = TagBoxState::new(config.readonly);
        Self {
            config,
            store,
            state: RefCell::new(state),
            on_confirm: None,
        }
    }

    /// Registers the listener invoked with the tag list when the set is
    /// confirmed. Reopening never notifies.
    pub fn with_confirm_listener(mut self, listener: impl Fn(Vec<Tag>) + 'static) -> Self {
        self.on_confirm = Some(Rc::new(listener));
        self
    }

    /// Clone of the current state, for mirroring into view signals.
    pub fn snapshot(&self) -> TagBoxState {
        self.state.borrow().clone()
    }

    /// Replaces the tag list from the backend, then queries the
    /// confirmation status. The status is only queried once the list is
    /// in: a failed GET leaves the confirm button disabled.
    pub async fn fetch_tags(&self) -> Result<(), TagBoxError> {
        let tags = match self.store.fetch_tags().await {
            Ok(tags) => tags,
            Err(source) => {
                let err = TagBoxError::FetchTags { source };
                log::error!("{}", err);
                return Err(err);
            }
        };
        log::debug!(
            "{}/{}: loaded {} tags",
            self.config.document_id,
            self.config.kind,
            tags.len()
        );
        self.state.borrow_mut().tags = tags;
        self.fetch_confirmation_status().await
    }

    /// Queries whether the tag set is confirmed, then enables the confirm
    /// button. On failure the button stays disabled.
    pub async fn fetch_confirmation_status(&self) -> Result<(), TagBoxError> {
        match self.store.confirmation_status().await {
            Ok(confirmed) => {
                let mut state = self.state.borrow_mut();
                state.apply_confirmation(self.config.readonly, confirmed);
                state.confirm_button_disabled = false;
                Ok(())
            }
            Err(source) => {
                let err = TagBoxError::FetchConfirmationStatus { source };
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Mirrors a tag the input control already shows, then persists it.
    /// The visible list is authoritative client-side: a failed PUT is
    /// logged but not rolled back.
    pub async fn add_tag(&self, tag: Tag) -> Result<(), TagBoxError> {
        self.state.borrow_mut().tags.push(tag.clone());
        match self.store.add_tag(&tag).await {
            Ok(()) => Ok(()),
            Err(source) => {
                let err = TagBoxError::AddTag { tag, source };
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Drops the first matching tag from the mirror, then persists the
    /// removal. Same best-effort contract as `add_tag`.
    pub async fn remove_tag(&self, tag: &Tag) -> Result<(), TagBoxError> {
        {
            let mut state = self.state.borrow_mut();
            if let Some(idx) = state.tags.iter().position(|t| t == tag) {
                state.tags.remove(idx);
            }
        }
        match self.store.remove_tag(tag).await {
            Ok(()) => Ok(()),
            Err(source) => {
                let err = TagBoxError::RemoveTag {
                    tag: tag.clone(),
                    source,
                };
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Asks the backend to confirm or reopen the tag set.
    ///
    /// A request that would not change the currently known state is
    /// rejected before any I/O. The local state only moves once the
    /// backend accepts; a failed POST changes nothing.
    pub async fn set_confirmation(&self, desired: bool) -> Result<(), TagBoxError> {
        {
            let state = self.state.borrow();
            if state.confirmed == Some(desired) {
                let err = TagBoxError::RedundantConfirmation { confirmed: desired };
                log::warn!("{}", err);
                return Err(err);
            }
        }

        let action = if desired {
            ConfirmAction::Confirm
        } else {
            ConfirmAction::Reopen
        };
        match self.store.set_confirmation(action).await {
            Ok(()) => {
                self.state
                    .borrow_mut()
                    .apply_confirmation(self.config.readonly, desired);
                Ok(())
            }
            Err(source) => {
                let err = match action {
                    ConfirmAction::Confirm => TagBoxError::Confirm { source },
                    ConfirmAction::Reopen => TagBoxError::Reopen { source },
                };
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Confirm/reopen button behavior: flips the confirmation state. A
    /// successful transition into the confirmed state hands the tag list
    /// to the confirm listener; reopening stays silent.
    pub async fn toggle_confirmation(&self) -> Result<(), TagBoxError> {
        let desired = !self.state.borrow().confirmed.unwrap_or(false);
        self.set_confirmation(desired).await?;
        if desired {
            if let Some(listener) = &self.on_confirm {
                let tags = self.state.borrow().tags.clone();
                listener(tags);
            }
        }
        Ok(())
    }
}
