//! Data Transfer Objects
//!
//! Commands consumed by the use-cases and response bodies produced for the
//! HTTP adapter.

pub mod commands;
pub mod request;
pub mod response;

pub use commands::{
    AddReviewCommand, BlockUserCommand, CreateEventCommand, CreateSpaceCommand,
    CreateUserCommand, FormByIdCommand, JoinEventCommand, SetHolidayCommand,
    SpaceMembershipCommand, UpdateFormCommand, UpdateSpaceCommand, UpdateUserCommand,
};
pub use request::{BlockUserRequest, MemberRequest, SetHolidayRequest};
pub use response::{EventResponse, FormResponse, HolidayResponse, SpaceResponse, UserResponse};
