//! This crate contains all shared UI for the workspace.

pub mod components;

mod context;
pub use context::{use_auth, use_auth_client, AuthProvider, AuthState};

mod navigate;
pub use navigate::{use_leave_once, use_screen_navigator, Navigate, ScreenNavigator};

pub mod register;
pub use register::RegisterScreen;

#[cfg(test)]
mod test_support;
