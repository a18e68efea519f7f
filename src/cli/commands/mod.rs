pub mod check;
mod command_result;
pub mod context;
pub mod format;
mod helper;
pub mod init;
pub mod languages;
pub mod translate;
pub mod url;

pub use command_result::*;
