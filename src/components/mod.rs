//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared by the protected views and read the
//! session from Leptos context.

pub mod report_frame;
pub mod sign_out;
