//! CLI command implementations

pub mod collect;
pub mod flatten;
pub mod init;
pub mod profiles;
pub mod validate;
