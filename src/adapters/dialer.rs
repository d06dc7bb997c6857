use crate::domain::ports::Dialer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

/// Hands the tel: URL to the OS URL opener. If no opener exists on this
/// machine the URL simply "cannot be opened", mirroring a device without a
/// dialer, and the caller gets `false` rather than an error.
#[derive(Debug, Clone)]
pub struct SystemDialer {
    opener: String,
    args: Vec<String>,
}

impl SystemDialer {
    pub fn new() -> Self {
        let (opener, args) = if cfg!(target_os = "macos") {
            ("open", vec![])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C".to_string(), "start".to_string()])
        } else {
            ("xdg-open", vec![])
        };
        Self {
            opener: opener.to_string(),
            args,
        }
    }

    /// Overrides the opener command, mainly for tests.
    pub fn with_opener(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            args: vec![],
        }
    }
}

impl Default for SystemDialer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dialer for SystemDialer {
    async fn open(&self, url: &Url) -> Result<bool> {
        tracing::debug!("Opening {} via {}", url, self.opener);

        let status = Command::new(&self.opener)
            .args(&self.args)
            .arg(url.as_str())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) => Ok(status.success()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("URL opener {} not found", self.opener);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}
