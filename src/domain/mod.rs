//! # Domain Layer
//!
//! Entities, value objects and the repository contracts of the meetup core.
//! Nothing here knows about SQL or HTTP.
//!
//! ## Structure
//!
//! - **entities**: User, Space (+ Form), Event (+ Review) and their repository traits
//! - **value_objects**: Tags

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
