//! External entity records supplied by the roster and payments collaborators.

pub mod receipt;
pub mod tenant;

pub use receipt::Receipt;
pub use tenant::Tenant;
