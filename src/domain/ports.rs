use crate::domain::model::{Contact, PermissionStatus, Platform};
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Persistent string key-value storage. Absent keys read as `None`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Device contact list access. Permission must be requested before fetching;
/// `fetch_contacts` returns every contact that has at least one phone number.
#[async_trait]
pub trait ContactProvider: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus>;
    async fn fetch_contacts(&self) -> Result<Vec<Contact>>;
}

/// Hands a fully formed tel: URL to the system dialer. Returns whether the
/// URL could be opened; `false` is a user-visible condition, not a bug.
#[async_trait]
pub trait Dialer: Send + Sync {
    async fn open(&self, url: &Url) -> Result<bool>;
}

/// Read-only runtime configuration seam for the payment session.
pub trait DialConfig {
    fn platform(&self) -> Platform;
    fn country_code_digits(&self) -> usize;
}
