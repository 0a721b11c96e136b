//! Application Services
//!
//! Use-cases that sequence repository calls into consistent operations.
//!
//! ## Available Services
//!
//! - **UserService**: sign-up, profile, blocks, holidays, forms
//! - **SpaceService**: spaces and their memberships
//! - **EventService**: events, event members, reviews
//!
//! Every service guards on the aggregate it mutates before writing and wraps
//! repository errors with its own operation name.

pub mod event_service;
pub mod space_service;
pub mod user_service;

pub use event_service::{EventService, EventServiceImpl};
pub use space_service::{SpaceService, SpaceServiceImpl};
pub use user_service::{UserService, UserServiceImpl};
