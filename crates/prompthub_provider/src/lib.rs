mod error;
mod langfuse;
mod response;
mod utils;

pub use error::Error;
pub use langfuse::{Langfuse, LangfuseBuilder};
