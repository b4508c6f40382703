pub mod requests;
pub mod responses;
pub mod rules;

pub use requests::LoginRequest;
pub use responses::LoginResponse;
