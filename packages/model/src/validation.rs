//! Registration schema.
//!
//! [`validate`] checks a [`UserDraft`] against every rule and returns the
//! failing fields with their messages. [`to_new_user`] does the same and, when
//! nothing fails, converts the draft into the typed [`NewUser`] payload.

use std::collections::BTreeMap;

use crate::user::{Field, Gender, NewUser, UserDraft};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const PINCODE_LEN: usize = 6;

/// Failing fields mapped to a human-readable message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validate every field of `draft`.
pub fn validate(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Err(message) = check(field, draft) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validate `draft` and build the create payload from it.
pub fn to_new_user(draft: &UserDraft) -> Result<NewUser, FieldErrors> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Every rule passed, so both parses succeed.
    let (Ok(age), Ok(gender)) = (parse_age(&draft.age), draft.gender.parse::<Gender>()) else {
        return Err(errors);
    };

    Ok(NewUser {
        name: draft.name.trim().to_string(),
        age,
        gender,
        address: draft.address.trim().to_string(),
        pincode: (!draft.pincode.is_empty()).then(|| draft.pincode.clone()),
        password: draft.password.clone(),
    })
}

fn check(field: Field, draft: &UserDraft) -> Result<(), &'static str> {
    let value = draft.get(field);
    match field {
        Field::Name | Field::Address => required(value),
        Field::Age => parse_age(value).map(|_| ()),
        Field::Gender => {
            required(value)?;
            value
                .parse::<Gender>()
                .map(|_| ())
                .map_err(|_| "Select male, female or other")
        }
        Field::Pincode => {
            if value.is_empty() || is_pincode(value) {
                Ok(())
            } else {
                Err("Must be 6 digits")
            }
        }
        Field::Password => {
            if value.is_empty() {
                Err("Required")
            } else if value.chars().count() < MIN_PASSWORD_LEN {
                Err("Too short!")
            } else {
                Ok(())
            }
        }
        Field::ConfirmPassword => {
            if value.is_empty() {
                Err("Required")
            } else if value != draft.password {
                Err("Passwords must match")
            } else {
                Ok(())
            }
        }
    }
}

fn required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("Required")
    } else {
        Ok(())
    }
}

fn is_pincode(value: &str) -> bool {
    value.len() == PINCODE_LEN && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_age(value: &str) -> Result<u32, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Required");
    }
    let n: f64 = value.parse().map_err(|_| "Must be a number")?;
    if !n.is_finite() {
        return Err("Must be a number");
    }
    if n <= 0.0 {
        return Err("Must be a positive number");
    }
    if n.fract() != 0.0 {
        return Err("Must be an integer");
    }
    if n > f64::from(u32::MAX) {
        return Err("Must be a number");
    }
    Ok(n as u32)
}
