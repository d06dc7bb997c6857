use async_trait::async_trait;
use paydial::domain::ports::{DialConfig, Dialer};
use paydial::{
    filter_contacts, JsonAddressBook, JsonFileStore, PaySession, PaydialError, Platform,
    SettingsStore,
};
use std::sync::Mutex;
use tempfile::TempDir;
use url::Url;

struct RecordingDialer {
    can_open: bool,
    opened: Mutex<Vec<String>>,
}

impl RecordingDialer {
    fn new(can_open: bool) -> Self {
        Self {
            can_open,
            opened: Mutex::new(vec![]),
        }
    }

    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dialer for RecordingDialer {
    async fn open(&self, url: &Url) -> paydial::Result<bool> {
        if self.can_open {
            self.opened.lock().unwrap().push(url.to_string());
        }
        Ok(self.can_open)
    }
}

struct TestConfig {
    platform: Platform,
}

impl DialConfig for TestConfig {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn country_code_digits(&self) -> usize {
        3
    }
}

fn write_contacts(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("contacts.json");
    std::fs::write(
        &path,
        serde_json::json!([
            {"id": "1", "name": "Alice", "phone_numbers": ["+250 788 123 456"]},
            {"id": "2", "name": "Bob", "phone_numbers": ["0722000111", "0733000222"]},
            {"id": "3", "name": "No Phone", "phone_numbers": []}
        ])
        .to_string(),
    )
    .unwrap();
    path
}

fn session(
    dir: &TempDir,
    platform: Platform,
    can_open: bool,
) -> PaySession<JsonFileStore, JsonAddressBook, RecordingDialer> {
    let settings = SettingsStore::new(JsonFileStore::new(dir.path().join("settings.json")));
    PaySession::new(
        settings,
        JsonAddressBook::new(write_contacts(dir)),
        RecordingDialer::new(can_open),
        &TestConfig { platform },
    )
}

#[tokio::test]
async fn test_contact_to_dial_flow() {
    let dir = TempDir::new().unwrap();
    let session = session(&dir, Platform::Android, true);
    session.settings().load().await;

    let contacts = session.pick_contacts().await.unwrap();
    assert_eq!(contacts.len(), 2);

    let alice = &filter_contacts(&contacts, "alice")[0];
    let number = session.select_contact_number(&alice.phone_numbers[0]);
    assert_eq!(number, "0788123456");

    let code = session.pay_to_number(&number, "1000").await.unwrap();
    assert_eq!(code, "*182*1*1*0788123456*1000#");
    assert_eq!(
        session.dialer().opened(),
        vec!["tel:*182*1*1*0788123456*1000%23"]
    );
}

#[tokio::test]
async fn test_custom_format_survives_restart_and_drives_dialing() {
    let dir = TempDir::new().unwrap();

    {
        let settings = SettingsStore::new(JsonFileStore::new(dir.path().join("settings.json")));
        settings
            .set_code_format("*777*{code}*{amount}#")
            .await
            .unwrap();
    }

    let session = session(&dir, Platform::Android, true);
    session.settings().load().await;

    let code = session.pay_to_code("012345", "2500").await.unwrap();
    assert_eq!(code, "*777*012345*2500#");
}

#[tokio::test]
async fn test_ios_platform_encodes_whole_code() {
    let dir = TempDir::new().unwrap();
    let session = session(&dir, Platform::Ios, true);

    session.pay_to_number("0788123456", "1000").await.unwrap();
    assert_eq!(
        session.dialer().opened(),
        vec!["tel:*182*1*1*0788123456*1000%23"]
    );
}

#[tokio::test]
async fn test_validation_blocks_dialing() {
    let dir = TempDir::new().unwrap();
    let session = session(&dir, Platform::Android, true);

    let err = session.pay_to_number("0788123456", "").await.unwrap_err();
    assert!(matches!(err, PaydialError::ValidationError { .. }));
    let err = session.pay_to_code("", "100").await.unwrap_err();
    assert!(matches!(err, PaydialError::ValidationError { .. }));

    assert!(session.dialer().opened().is_empty());
}

#[tokio::test]
async fn test_unopenable_dialer_is_user_visible() {
    let dir = TempDir::new().unwrap();
    let session = session(&dir, Platform::Android, false);

    let err = session.pay_to_number("0788123456", "1000").await.unwrap_err();
    match err {
        PaydialError::DialerUnavailable { ref url } => {
            assert_eq!(url, "tel:*182*1*1*0788123456*1000%23")
        }
        other => panic!("expected DialerUnavailable, got {:?}", other),
    }
    assert!(!err.user_friendly_message().is_empty());
}
