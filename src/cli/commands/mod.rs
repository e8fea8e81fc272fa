mod command_result;
pub mod helper;
pub mod init;
pub mod paths;
pub mod status;

pub use command_result::*;
