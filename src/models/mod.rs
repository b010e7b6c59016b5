pub mod host;
pub mod responses;
