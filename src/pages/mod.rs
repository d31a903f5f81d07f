//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submit flows live in `*_submit` modules as plain async
//! functions over injected collaborators.

pub mod dashboard;
pub mod login;
pub mod login_submit;
pub mod signup;
pub mod signup_submit;
pub mod team;
