pub mod dates;
pub mod enums;
pub mod error_code;
pub mod pagination;
pub mod response;

pub use enums::{ActiveStatus, Gender};
pub use error_code::ErrorCode;
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
