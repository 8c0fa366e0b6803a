mod cli;
mod command;
mod log;

pub use cli::*;
pub use command::*;
pub use log::*;
