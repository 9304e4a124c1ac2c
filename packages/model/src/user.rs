//! # User models
//!
//! Three representations of a user, one per stage of its life on the client:
//!
//! | Type | Stage |
//! |------|-------|
//! | [`UserDraft`] | Raw text typed into the registration form, `confirm_password` included. |
//! | [`NewUser`] | A draft that passed [`crate::validate`]. This is the JSON body of the create request and has no confirmation field, so it cannot leak one. |
//! | [`UserRecord`] | A record as returned by the remote store, with its server-assigned [`RecordId`]. |
//!
//! [`Field`] names the seven draft fields and maps them to their wire names and
//! labels. [`Gender`] is the fixed set of gender values the form offers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A field of the registration draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Age,
    Gender,
    Address,
    Pincode,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::Address,
        Field::Pincode,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// JSON / DOM name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Address => "address",
            Field::Pincode => "pincode",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Address => "Address",
            Field::Pincode => "Pincode",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Gender values offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Value stored in the draft and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// In-progress registration form contents. Every field is raw text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub pincode: String,
    pub password: String,
    pub confirm_password: String,
}

impl UserDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::Pincode => &self.pincode,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
            Field::Pincode => &mut self.pincode,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }
}

/// A validated registration, ready to be posted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    pub password: String,
}

/// Identifier assigned by the remote store. Some stores number records,
/// others hand out opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A user as stored remotely. Missing fields default instead of failing
/// the whole listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserRecord {
    /// Build the record a store would return after creating `user`.
    pub fn from_new(id: RecordId, user: &NewUser) -> Self {
        Self {
            id,
            name: user.name.clone(),
            age: Some(user.age),
            gender: user.gender.as_str().to_string(),
            address: user.address.clone(),
            pincode: user.pincode.clone(),
            password: Some(user.password.clone()),
        }
    }

    /// Display text of the column keyed `key`. Unknown keys and absent
    /// values render as empty text.
    pub fn field_text(&self, key: &str) -> String {
        match key {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "age" => self.age.map(|a| a.to_string()).unwrap_or_default(),
            "gender" => self.gender.clone(),
            "address" => self.address.clone(),
            "pincode" => self.pincode.clone().unwrap_or_default(),
            "password" => self.password.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_ignores_case() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" MALE ".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("other".parse::<Gender>(), Ok(Gender::Other));
        assert!("robot".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_draft_get_set() {
        let mut draft = UserDraft::default();
        draft.set(Field::ConfirmPassword, "secret");
        assert_eq!(draft.confirm_password, "secret");
        assert_eq!(draft.get(Field::ConfirmPassword), "secret");
        assert_eq!(draft.get(Field::Name), "");
    }

    #[test]
    fn test_new_user_body_has_no_confirmation() {
        let user = NewUser {
            name: "Asha".to_string(),
            age: 31,
            gender: Gender::Female,
            address: "12 Lake Road".to_string(),
            pincode: None,
            password: "hunter2hunter2".to_string(),
        };
        let body = serde_json::to_value(&user).unwrap();
        let obj = body.as_object().unwrap();
        assert!(!obj.contains_key("confirmPassword"));
        assert!(!obj.contains_key("pincode"));
        assert_eq!(obj["gender"], "female");
        assert_eq!(obj["age"], 31);
    }

    #[test]
    fn test_record_accepts_numeric_and_string_ids() {
        let records: Vec<UserRecord> = serde_json::from_str(
            r#"[
                {
                    "id": 7, "name": "Ravi", "age": 40,
                    "gender": "male", "address": "A", "pincode": "560001"
                },
                {"id": "a9f3", "name": "Mira"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records[0].id, RecordId::Number(7));
        assert_eq!(records[0].field_text("pincode"), "560001");
        assert_eq!(records[1].id.to_string(), "a9f3");
        assert_eq!(records[1].field_text("age"), "");
        assert_eq!(records[1].field_text("nope"), "");
    }
}
