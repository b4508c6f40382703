pub mod entities;
pub mod requests;
pub mod responses;
pub mod rules;
