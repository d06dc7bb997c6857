// Adapters layer: concrete implementations of the domain ports (key-value
// storage, contact provider, dialer launcher).

pub mod contacts;
pub mod dialer;
pub mod store;

pub use contacts::JsonAddressBook;
pub use dialer::SystemDialer;
pub use store::JsonFileStore;
