pub mod albums;
pub mod media_items;
pub mod msgs;
pub mod query;
pub mod shared_albums;
pub mod transport;
pub mod uploads;

mod err;

pub use err::{ErrorBody, ErrorResponse, GoogleApiError};
