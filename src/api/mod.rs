pub mod body;
pub mod response;

pub use response::{ApiResponse, ApiResult};
