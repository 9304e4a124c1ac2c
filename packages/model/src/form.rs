//! Registration form state.
//!
//! [`RegistrationForm`] owns the draft, the set of touched fields and the
//! in-flight flag. A submission is split in two so the request itself can be
//! awaited outside any borrow of the form:
//!
//! 1. [`begin_submit`](RegistrationForm::begin_submit) touches every field and
//!    hands out the payload only when the draft is valid and nothing is in flight.
//! 2. [`finish_submit`](RegistrationForm::finish_submit) clears the in-flight
//!    flag and on success resets the form.

use std::collections::BTreeSet;

use crate::user::{Field, NewUser, UserDraft};
use crate::validation::{self, FieldErrors};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    draft: UserDraft,
    touched: BTreeSet<Field>,
    submitting: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn value(&self, field: Field) -> &str {
        self.draft.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Mark `field` as interacted with, so its error becomes visible.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Errors for the whole draft, touched or not.
    pub fn errors(&self) -> FieldErrors {
        validation::validate(&self.draft)
    }

    /// The error to show for `field`, if it is touched and failing.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    /// Start a submission. Returns the payload to send, or `None` when a
    /// submission is already in flight or the draft is invalid.
    pub fn begin_submit(&mut self) -> Option<NewUser> {
        if self.submitting {
            return None;
        }
        self.touched.extend(Field::ALL);
        let user = validation::to_new_user(&self.draft).ok()?;
        self.submitting = true;
        Some(user)
    }

    /// Finish a submission. Returns `true` when it succeeded, in which case
    /// the form is back to its initial state.
    pub fn finish_submit<T, E>(&mut self, result: &Result<T, E>) -> bool {
        self.submitting = false;
        if result.is_ok() {
            self.draft = UserDraft::default();
            self.touched.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for (field, value) in [
            (Field::Name, "Dev Patel"),
            (Field::Age, "35"),
            (Field::Gender, "male"),
            (Field::Address, "22 Station Road"),
            (Field::Password, "longenough"),
            (Field::ConfirmPassword, "longenough"),
        ] {
            form.set(field, value);
        }
        form
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = RegistrationForm::new();
        assert!(form.errors().contains(Field::Name));
        assert_eq!(form.visible_error(Field::Name), None);

        form.touch(Field::Name);
        assert_eq!(form.visible_error(Field::Name).as_deref(), Some("Required"));
        assert_eq!(form.visible_error(Field::Age), None);

        form.set(Field::Name, "Dev");
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn test_invalid_submit_touches_everything() {
        let mut form = RegistrationForm::new();
        form.set(Field::Name, "Dev");
        assert!(form.begin_submit().is_none());
        assert!(!form.is_submitting());
        assert!(Field::ALL.iter().all(|f| form.is_touched(*f)));
        assert_eq!(form.visible_error(Field::Age).as_deref(), Some("Required"));
        assert_eq!(form.value(Field::Name), "Dev");
    }

    #[test]
    fn test_submit_gated_while_in_flight() {
        let mut form = filled();
        let user = form.begin_submit().unwrap();
        assert_eq!(user.name, "Dev Patel");
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_success_resets_form() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.finish_submit::<(), ()>(&Ok(())));
        assert_eq!(form, RegistrationForm::new());
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let before = form.draft().clone();
        form.begin_submit().unwrap();
        assert!(!form.finish_submit::<(), &str>(&Err("connection refused")));
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &before);
        assert!(form.begin_submit().is_some());
    }
}
