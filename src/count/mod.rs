//! Counter group sessions.

mod error;
mod read;
mod session;
pub mod sys;

pub use error::*;
pub use read::*;
pub use session::*;
