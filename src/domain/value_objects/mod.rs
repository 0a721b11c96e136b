//! # Domain Value Objects
//!
//! - **Tags**: ordered key/value maps persisted verbatim as one text column

mod tags;

pub use tags::{Tag, Tags};
