pub mod columns;
pub mod config;
pub mod form;
pub mod listing;
pub mod user;
pub mod validation;

pub use columns::{avatar_glyph, column_label, BadgeCategory, CellKind, Column, COLUMNS};
pub use config::{RegistryConfig, TableConfig};
pub use form::RegistrationForm;
pub use listing::{ListingView, PageState};
pub use user::{Field, Gender, NewUser, RecordId, UserDraft, UserRecord};
pub use validation::{to_new_user, validate, FieldErrors};
