//! Reactive state shared by the Leptos components in `app`.

pub mod session_context;

pub use session_context::SessionContext;
