pub mod announcements;
pub mod auth;
pub mod batches;
pub mod common;
pub mod files;
pub mod payments;
pub mod staff;
pub mod standards;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use common::{
    ActiveStatus, ApiResponse, ErrorCode, Gender, PaginatedResponse, PaginationInfo,
    PaginationQuery,
};

