//! Session gate: authentication state, credential check and navigation.

pub mod credentials;
pub mod entities;
pub mod navigation;

pub use credentials::*;
pub use entities::*;
pub use navigation::*;
