//! Interactive console front end for the tabiya rules engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::Command;
pub use error::CliError;
pub use session::{Session, SessionConfig};
