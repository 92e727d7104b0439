//! # Auth crate — the account provider seam
//!
//! Everything the registration screen needs from an identity service lives behind
//! the [`AuthBackend`] trait: creating an account and watching who is signed in.
//! The UI never talks to a concrete service directly; it receives an [`AuthClient`]
//! through context and calls the trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`AuthBackend`] trait and the [`Session`] it reports |
//! | [`config`] | [`IdentityConfig`] read from the environment |
//! | [`error`] | [`ProviderError`] and the provider error codes |
//! | `identity` | [`IdentityToolkit`], the HTTP backend |
//! | `memory` | [`MemoryAuth`], the in-process backend for local runs and tests |
//! | `client` | [`AuthClient`], which picks one of the two at startup |

pub mod backend;
pub mod config;
pub mod error;

mod client;
mod identity;
mod memory;

pub use backend::{AuthBackend, Session};
pub use client::AuthClient;
pub use config::IdentityConfig;
pub use error::{codes, ProviderError};
pub use identity::IdentityToolkit;
pub use memory::MemoryAuth;
