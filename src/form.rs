//! Headless state machine for the two-username submission form.
//!
//! Pure and synchronous: the TUI owns all IO. Editing a field reports
//! whether an avatar lookup should fire; submitting validates presence and
//! latches the form until the outcome settles.

use crate::models::ComparisonRequest;

/// Inline message shown under an empty required field.
pub const REQUIRED_MESSAGE: &str = "GitHub username is required";

/// Identifies one of the two username fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username1,
    Username2,
}

impl FieldId {
    pub const ALL: [FieldId; 2] = [FieldId::Username1, FieldId::Username2];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Username1 => "First GitHub Username",
            FieldId::Username2 => "Second GitHub Username",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::Username1 => "e.g. octocat",
            FieldId::Username2 => "e.g. torvalds",
        }
    }
}

/// One text field: its value, inline error, and resolved avatar URL.
#[derive(Debug, Clone, Default)]
pub struct Field {
    pub value: String,
    pub error: Option<&'static str>,
    pub avatar_url: Option<String>,
}

/// An avatar lookup the caller should fire after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarLookup {
    pub field: FieldId,
    pub username: String,
}

#[derive(Debug)]
pub struct ComparisonForm {
    username1: Field,
    username2: Field,
    focus: FieldId,
    submitting: bool,
}

impl Default for ComparisonForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonForm {
    pub fn new() -> Self {
        Self {
            username1: Field::default(),
            username2: Field::default(),
            focus: FieldId::Username1,
            submitting: false,
        }
    }

    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Username1 => &self.username1,
            FieldId::Username2 => &self.username2,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Username1 => &mut self.username1,
            FieldId::Username2 => &mut self.username2,
        }
    }

    pub fn focused(&self) -> FieldId {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FieldId::Username1 => FieldId::Username2,
            FieldId::Username2 => FieldId::Username1,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two fields, so previous and next coincide.
        self.focus_next();
    }

    /// True while a submission is pending; the submit control is inert.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, ch: char) -> Option<AvatarLookup> {
        let id = self.focus;
        self.field_mut(id).value.push(ch);
        self.after_edit(id)
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) -> Option<AvatarLookup> {
        let id = self.focus;
        self.field_mut(id).value.pop();
        self.after_edit(id)
    }

    /// Clears the field's inline error and decides whether an avatar lookup
    /// should fire: non-empty value only. Emptying a field clears its avatar.
    fn after_edit(&mut self, id: FieldId) -> Option<AvatarLookup> {
        let field = self.field_mut(id);
        field.error = None;
        if field.value.is_empty() {
            field.avatar_url = None;
            return None;
        }
        Some(AvatarLookup {
            field: id,
            username: field.value.clone(),
        })
    }

    /// Record a resolved avatar. Lookups may settle out of order; the last
    /// write per field wins.
    pub fn set_avatar(&mut self, id: FieldId, url: String) {
        self.field_mut(id).avatar_url = Some(url);
    }

    /// Attempt to submit the form.
    ///
    /// Empty fields get an inline error and nothing is emitted. While a
    /// previous submission is pending, submit is inert. On success the form
    /// latches until [`settle`](Self::settle) is called.
    pub fn submit(&mut self) -> Option<ComparisonRequest> {
        if self.submitting {
            return None;
        }

        let mut valid = true;
        for id in FieldId::ALL {
            let field = self.field_mut(id);
            if field.value.is_empty() {
                field.error = Some(REQUIRED_MESSAGE);
                valid = false;
            }
        }
        if !valid {
            return None;
        }

        self.submitting = true;
        Some(ComparisonRequest::new(
            self.username1.value.clone(),
            self.username2.value.clone(),
        ))
    }

    /// Re-enable submission once the outcome has settled.
    pub fn settle(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(form: &mut ComparisonForm, word: &str) {
        for ch in word.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn submit_with_both_fields_empty_errors_both() {
        let mut form = ComparisonForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.field(FieldId::Username1).error, Some(REQUIRED_MESSAGE));
        assert_eq!(form.field(FieldId::Username2).error, Some(REQUIRED_MESSAGE));
        assert!(!form.is_submitting());
    }

    #[test]
    fn submit_with_one_empty_field_errors_only_that_field() {
        let mut form = ComparisonForm::new();
        type_word(&mut form, "octocat");
        assert!(form.submit().is_none());
        assert_eq!(form.field(FieldId::Username1).error, None);
        assert_eq!(form.field(FieldId::Username2).error, Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn valid_submit_emits_request_and_latches() {
        let mut form = ComparisonForm::new();
        type_word(&mut form, "octocat");
        form.focus_next();
        type_word(&mut form, "torvalds");

        let request = form.submit().unwrap();
        assert_eq!(request, ComparisonRequest::new("octocat", "torvalds"));
        assert!(form.is_submitting());

        // Inert while pending.
        assert!(form.submit().is_none());

        form.settle();
        assert!(form.submit().is_some());
    }

    #[test]
    fn editing_clears_inline_error() {
        let mut form = ComparisonForm::new();
        form.submit();
        assert!(form.field(FieldId::Username1).error.is_some());
        form.push_char('a');
        assert!(form.field(FieldId::Username1).error.is_none());
    }

    #[test]
    fn edits_fire_lookup_only_when_non_empty() {
        let mut form = ComparisonForm::new();
        let lookup = form.push_char('o').unwrap();
        assert_eq!(
            lookup,
            AvatarLookup {
                field: FieldId::Username1,
                username: "o".to_string()
            }
        );
        // Emptying the field fires nothing and clears the avatar.
        form.set_avatar(FieldId::Username1, "https://img".to_string());
        assert!(form.backspace().is_none());
        assert!(form.field(FieldId::Username1).avatar_url.is_none());
    }

    #[test]
    fn avatar_last_write_wins_per_field() {
        let mut form = ComparisonForm::new();
        form.set_avatar(FieldId::Username1, "first".to_string());
        form.set_avatar(FieldId::Username2, "other".to_string());
        form.set_avatar(FieldId::Username1, "second".to_string());
        assert_eq!(
            form.field(FieldId::Username1).avatar_url.as_deref(),
            Some("second")
        );
        assert_eq!(
            form.field(FieldId::Username2).avatar_url.as_deref(),
            Some("other")
        );
    }
}
