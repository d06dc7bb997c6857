use crate::core::{dial, phone, template};
use crate::domain::model::{Contact, PermissionStatus, Platform};
use crate::domain::ports::{ContactProvider, DialConfig, Dialer, KeyValueStore};
use crate::settings::SettingsStore;
use crate::utils::error::{PaydialError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Orchestrates the payment flows over the injected ports: settings for the
/// templates, a contact provider for the picker, and a dialer for dispatch.
///
/// Everything runs on one logical sequencing point, so the only concurrency
/// guard is a single-flight busy flag around the contact picker. Operations
/// have no timeout and cannot be cancelled once started.
pub struct PaySession<S, C, D> {
    settings: SettingsStore<S>,
    contacts: C,
    dialer: D,
    platform: Platform,
    country_code_digits: usize,
    picker_busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<S, C, D> PaySession<S, C, D>
where
    S: KeyValueStore + 'static,
    C: ContactProvider,
    D: Dialer,
{
    pub fn new(
        settings: SettingsStore<S>,
        contacts: C,
        dialer: D,
        config: &impl DialConfig,
    ) -> Self {
        Self {
            settings,
            contacts,
            dialer,
            platform: config.platform(),
            country_code_digits: config.country_code_digits(),
            picker_busy: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> &SettingsStore<S> {
        &self.settings
    }

    pub fn dialer(&self) -> &D {
        &self.dialer
    }

    /// Pay-to-number flow: validates, normalizes the phone number, fills the
    /// number template, and dispatches. Returns the dial code that was sent.
    pub async fn pay_to_number(&self, number: &str, amount: &str) -> Result<String> {
        Self::validate_inputs(number, amount)?;
        let normalized = phone::normalize_with_country_code(number, self.country_code_digits);
        let dial_code =
            template::build_dial_code(&self.settings.number_format(), &normalized, amount);
        self.dispatch(dial_code).await
    }

    /// Pay-to-code flow: the merchant code is used verbatim, no
    /// normalization.
    pub async fn pay_to_code(&self, code: &str, amount: &str) -> Result<String> {
        Self::validate_inputs(code, amount)?;
        let dial_code = template::build_dial_code(&self.settings.code_format(), code, amount);
        self.dispatch(dial_code).await
    }

    /// Requests contacts permission and fetches the contact list, keeping
    /// only contacts with at least one phone number. Guarded by a busy flag:
    /// a second call while one is in flight fails instead of launching a
    /// duplicate permission prompt.
    pub async fn pick_contacts(&self) -> Result<Vec<Contact>> {
        if self
            .picker_busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PaydialError::OperationInFlight {
                operation: "contact picker",
            });
        }
        let _guard = BusyGuard(&self.picker_busy);

        match self.contacts.request_permission().await? {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied { can_ask_again: true } => {
                return Err(PaydialError::PermissionDenied)
            }
            PermissionStatus::Denied {
                can_ask_again: false,
            } => return Err(PaydialError::PermissionDeniedPermanently),
        }

        let contacts: Vec<Contact> = self
            .contacts
            .fetch_contacts()
            .await?
            .into_iter()
            .filter(|c| c.has_phone_numbers())
            .collect();

        tracing::debug!("Fetched {} contacts with phone numbers", contacts.len());

        if contacts.is_empty() {
            return Err(PaydialError::NoContacts);
        }
        Ok(contacts)
    }

    /// Normalizes a phone number picked from a contact before it enters the
    /// pay flow.
    pub fn select_contact_number(&self, raw: &str) -> String {
        phone::normalize_with_country_code(raw, self.country_code_digits)
    }

    fn validate_inputs(number_or_code: &str, amount: &str) -> Result<()> {
        if number_or_code.trim().is_empty() || amount.trim().is_empty() {
            return Err(PaydialError::ValidationError {
                message: "Please enter both phone number/code and amount.".to_string(),
            });
        }
        Ok(())
    }

    async fn dispatch(&self, dial_code: String) -> Result<String> {
        let url = dial::dial_url(&dial_code, self.platform)?;
        tracing::info!("Dialing {}", dial_code);

        if self.dialer.open(&url).await? {
            Ok(dial_code)
        } else {
            Err(PaydialError::DialerUnavailable {
                url: url.to_string(),
            })
        }
    }
}

/// Case-insensitive contact search: matches on the name or on a phone number
/// substring.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let query_lower = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query_lower)
                || c.phone_numbers.iter().any(|n| n.contains(query))
        })
        .cloned()
        .collect()
}
