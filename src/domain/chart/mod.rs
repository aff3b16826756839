//! Chart aggregate: backend-agnostic layered chart descriptions.

pub mod annotations;
pub mod entities;
pub mod services;
pub mod value_objects;

pub use annotations::*;
pub use entities::*;
pub use services::*;
pub use value_objects::*;
