pub mod error;
pub mod handlers;
pub mod mock_data;
pub mod router;
pub mod server;
pub mod services;

pub use error::{ApiError, Result};
pub use router::create_router;
pub use server::run_server;
