pub mod dial;
pub mod phone;
pub mod session;
pub mod template;

pub use crate::domain::model::{Contact, PermissionStatus, Platform, Settings};
pub use crate::domain::ports::{ContactProvider, DialConfig, Dialer, KeyValueStore};
pub use crate::utils::error::Result;
