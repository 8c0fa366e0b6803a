mod compiler;
mod config;
mod error;
mod message;
mod prompt;
mod source;
mod template;
mod variables;

pub use compiler::*;
pub use config::*;
pub use error::*;
pub use message::*;
pub use prompt::*;
pub use source::*;
pub use variables::*;
