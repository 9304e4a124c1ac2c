//! # API crate — gateway to the users endpoint
//!
//! Everything the UI needs to talk to the remote user collection.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | The [`UserGateway`] trait: list all users, create one user |
//! | [`client`] | [`UsersClient`], the `reqwest` implementation against the fixed [`USERS_URL`] |
//! | [`memory`] | [`MemoryGateway`], an in-memory implementation for tests |
//! | [`error`] | [`ApiError`], the single transport error type |
//! | [`workflow`] | Logged create/fetch calls and the full submit workflow over a [`model::RegistrationForm`] |
//!
//! Neither call retries, times out on its own, or paginates; pagination happens
//! on the client over the full list.

pub mod client;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod workflow;

pub use client::{UsersClient, USERS_URL};
pub use error::ApiError;
pub use gateway::UserGateway;
pub use memory::MemoryGateway;
pub use workflow::{create_user_logged, fetch_users, submit_registration, SubmitOutcome};
