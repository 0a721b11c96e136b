//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - users, blocks and holiday status
//! - **PgSpaceRepository** - spaces and membership forms
//! - **PgEventRepository** - events, event members and reviews
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgEventRepository, PgSpaceRepository, PgUserRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let space_repo = PgSpaceRepository::new(pool.clone());
//!     let event_repo = PgEventRepository::new(pool);
//! }
//! ```

pub mod event_repository;
pub mod space_repository;
pub mod user_repository;

pub use event_repository::PgEventRepository;
pub use space_repository::PgSpaceRepository;
pub use user_repository::PgUserRepository;
