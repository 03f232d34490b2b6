mod app_error;
mod envelope;

pub use app_error::AppError;
pub use envelope::{
    Envelope, ResponseError, INVALID_PRODUCT_ID, INVALID_REQUEST_PAYLOAD, PRODUCT_NOT_FOUND,
};

pub type Result<T> = std::result::Result<T, AppError>;
