//! Widget State
//!
//! The mutable state of one tag box instance and the rules that keep its
//! flags consistent. One instance owns its state exclusively; it is
//! created on mount and dropped with the widget.

use leptos_tags_input::Tag;

/// Text of the confirm/reopen button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Confirm,
    Reopen,
}

impl ButtonLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLabel::Confirm => "Confirm",
            ButtonLabel::Reopen => "Reopen",
        }
    }
}

impl std::fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one tag box
///
/// `confirmed` stays `None` until the first confirmation-status fetch
/// succeeds; the button starts disabled and without a label until then.
#[derive(Debug, Clone, PartialEq)]
pub struct TagBoxState {
    /// Tag list mirrored from the backend / input control
    pub tags: Vec<Tag>,
    /// Confirmation flag, `None` while still undetermined
    pub confirmed: Option<bool>,
    /// Whether the input control permits add/remove
    pub allow_edit: bool,
    /// Confirm button stays disabled until the status fetch succeeds
    pub confirm_button_disabled: bool,
    /// `None` renders as an empty label
    pub button_label: Option<ButtonLabel>,
}

impl TagBoxState {
    pub fn new(readonly: bool) -> Self {
        Self {
            tags: Vec::new(),
            confirmed: None,
            allow_edit: !readonly,
            confirm_button_disabled: true,
            button_label: None,
        }
    }

    /// Record a known confirmation state and recompute the dependent flags.
    ///
    /// Readonly widgets only record the flag: edits stay locked and the
    /// button never gets a label.
    pub fn apply_confirmation(&mut self, readonly: bool, confirmed: bool) {
        self.confirmed = Some(confirmed);
        if readonly {
            return;
        }
        self.allow_edit = !confirmed;
        self.button_label = Some(if confirmed {
            ButtonLabel::Reopen
        } else {
            ButtonLabel::Confirm
        });
    }
}
