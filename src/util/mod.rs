//! Shared client utility modules.
//!
//! DESIGN
//! ======
//! Pure helpers (input cleaning, validation, team lookup) stay free of Leptos
//! so they run under plain `cargo test`; `guard` and `liveness` are the only
//! modules that touch the reactive owner.

pub mod guard;
pub mod liveness;
pub mod pause;
pub mod sanitize;
pub mod teams;
pub mod validate;
