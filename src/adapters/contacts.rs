use crate::domain::model::{Contact, PermissionStatus};
use crate::domain::ports::ContactProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Contact provider backed by a JSON array file standing in for the device
/// address book.
///
/// Permission maps onto file access: an OS permission error on the file is a
/// permanent denial (the process cannot re-prompt its way out), while a
/// missing file is granted access to an empty book, which downstream code
/// reports as the informational no-contacts outcome.
#[derive(Debug, Clone)]
pub struct JsonAddressBook {
    path: PathBuf,
}

impl JsonAddressBook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContactProvider for JsonAddressBook {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(PermissionStatus::Granted),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PermissionStatus::Granted),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Ok(PermissionStatus::Denied {
                can_ask_again: false,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>> {
        let contacts: Vec<Contact> = match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => vec![],
            Err(e) => return Err(e.into()),
        };

        Ok(contacts
            .into_iter()
            .filter(|c| c.has_phone_numbers())
            .collect())
    }
}
