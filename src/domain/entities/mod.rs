//! # Domain Entities
//!
//! Core domain entities and the repository traits that persist them.
//!
//! - **User**: profile, holiday status, blocks
//! - **Space**: a named community ("group") with member forms
//! - **Event**: a meeting inside a space, with members and reviews
//!
//! Each repository trait is implemented in the infrastructure layer.
//! Every method reports failures as one of `NotFound`, `AlreadyExists`
//! or `Unexpected`.

mod event;
mod space;
mod user;

pub use event::{Event, EventRepository, Review};
pub use space::{Form, FormChanges, Space, SpaceRepository};
pub use user::{Holiday, User, UserChanges, UserRepository};

#[cfg(test)]
pub use event::MockEventRepository;
#[cfg(test)]
pub use space::MockSpaceRepository;
#[cfg(test)]
pub use user::MockUserRepository;
