//! External collaborators of the resolution core.
//!
//! - [`store`] - read capability over a named-value store ([`ValueReader`])
//! - [`target`] - apply capability for resolved profiles ([`ProfileTarget`])
//!
//! Both are narrow traits with blanket implementations for closures, so
//! callers can pass a plain function where a dedicated type would be overkill.

pub mod store;
pub mod target;

pub use store::{MapReader, SystemEnv, ValueReader};
pub use target::{ActiveProfiles, ProfileTarget};
