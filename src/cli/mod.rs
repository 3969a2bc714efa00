//! CLI command implementations

pub mod board;
pub mod generate;
pub mod init;
pub mod play;
pub mod reset;
