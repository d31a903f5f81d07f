//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the persisted, app-wide record of the signed-in user;
//! `login` is the per-form attempt counter that lives only while the login
//! page is mounted.

pub mod login;
pub mod session;
