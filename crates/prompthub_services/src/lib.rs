mod cache;
mod hub;
#[cfg(test)]
mod mock;
mod refresh;

pub use cache::*;
pub use hub::*;
pub use refresh::*;
