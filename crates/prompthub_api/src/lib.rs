mod api;
mod env;
mod prompthub_api;

pub use api::*;
pub use env::*;
pub use prompthub_api::*;
pub use prompthub_domain::*;
