//! Where the appointment list is fetched from.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;
use url::{Host, Url};

use crate::appointment::Appointment;
use crate::error::{ApptError, ApptResult};

/// A one-shot source of appointments: a local JSON file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Interpret `s` as a URL when it has an http(s) scheme, otherwise as a
    /// path (with `~` expanded).
    pub fn parse(s: &str) -> ApptResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ApptError::Config("Data source is empty".into()));
        }

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|e| ApptError::Config(format!("Invalid URL '{s}': {e}")))?;
            return Ok(DataSource::Url(url));
        }

        Ok(DataSource::File(PathBuf::from(shellexpand::tilde(s).into_owned())))
    }

    /// Fetch and parse the list. Called once per store.
    pub async fn fetch(&self) -> ApptResult<Vec<Appointment>> {
        let body = match self {
            DataSource::File(path) => {
                debug!(path = %path.display(), "Reading appointments file");
                tokio::fs::read_to_string(path).await?
            }
            DataSource::Url(url) => {
                debug!(%url, "Fetching appointments");
                http_client(url)?
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        parse_appointments(&body)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Loopback URLs skip any configured proxy.
fn http_client(url: &Url) -> ApptResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if is_loopback(url) {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        None => false,
    }
}

/// Parse a JSON array of appointments.
pub fn parse_appointments(json: &str) -> ApptResult<Vec<Appointment>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_urls() {
        let source = DataSource::parse("https://example.com/data.json").unwrap();
        assert!(matches!(source, DataSource::Url(ref u) if u.path() == "/data.json"));
    }

    #[test]
    fn parses_relative_paths() {
        assert_eq!(
            DataSource::parse("./data.json").unwrap(),
            DataSource::File(PathBuf::from("./data.json"))
        );
    }

    #[test]
    fn expands_tilde() {
        let DataSource::File(path) = DataSource::parse("~/data.json").unwrap() else {
            panic!("expected a file source");
        };
        assert!(!path.to_string_lossy().starts_with('~') || dirs::home_dir().is_none());
    }

    #[test]
    fn detects_loopback_hosts() {
        assert!(is_loopback(&Url::parse("http://127.0.0.1:8080/data.json").unwrap()));
        assert!(is_loopback(&Url::parse("http://[::1]/data.json").unwrap()));
        assert!(is_loopback(&Url::parse("http://LOCALHOST/data.json").unwrap()));
        assert!(!is_loopback(&Url::parse("https://example.com/data.json").unwrap()));
    }

    #[test]
    fn rejects_empty_source() {
        assert!(matches!(DataSource::parse("  "), Err(ApptError::Config(_))));
    }

    #[test]
    fn parse_appointments_rejects_non_array() {
        assert!(matches!(
            parse_appointments(r#"{"id":"1"}"#),
            Err(ApptError::Parse(_))
        ));
    }

    #[test]
    fn parse_appointments_reads_array() {
        let list = parse_appointments(
            r#"[{"id":"1","petName":"Rex","ownerName":"Ana","aptNotes":"","date":"2024-01-01 09:00"}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].pet_name, "Rex");
    }
}
