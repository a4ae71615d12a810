//! Session services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Services own session lookup and the user actions applied to a session,
//! so route handlers stay focused on request parsing and response shaping.

pub mod form_actions;
pub mod session;
