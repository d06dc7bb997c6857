use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A contact record as surfaced by the contact provider. Providers only hand
/// out contacts that carry at least one phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl Contact {
    pub fn has_phone_numbers(&self) -> bool {
        self.phone_numbers.iter().any(|n| !n.is_empty())
    }
}

/// Outcome of a contacts permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    /// Denied; `can_ask_again` is false once the OS will no longer show the
    /// prompt and the user must go through system settings.
    Denied { can_ask_again: bool },
}

/// Target dialer platform. The two differ in how much of the USSD code must
/// be percent-encoded before the dialer accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(format!("unknown platform: {} (expected android or ios)", other)),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

/// The pair of persisted USSD format templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub number_format: String,
    pub code_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("android".parse::<Platform>().unwrap(), Platform::Android);
        assert_eq!("iOS".parse::<Platform>().unwrap(), Platform::Ios);
        assert!("blackberry".parse::<Platform>().is_err());
    }

    #[test]
    fn test_contact_has_phone_numbers() {
        let contact = Contact {
            id: "1".to_string(),
            name: "Alice".to_string(),
            phone_numbers: vec![],
        };
        assert!(!contact.has_phone_numbers());

        let contact = Contact {
            phone_numbers: vec!["0788123456".to_string()],
            ..contact
        };
        assert!(contact.has_phone_numbers());
    }
}
