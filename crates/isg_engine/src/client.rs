use std::sync::Arc;

use isg_core::{
    detect_language, extract_firmware_version, extract_heat_pump_status, extract_info_heat_pump,
    extract_info_system, extract_mac_address, extract_system_status, DeviceIdentity, ExtractError,
    Language, Page, Snapshot,
};
use isg_logging::{isg_debug, isg_info};
use thiserror::Error;
use url::Url;

use crate::{
    decode_html, parse_page, ConsolePage, FailureKind, FetchError, FetchSettings, Fetcher,
    ReqwestFetcher,
};

/// Title every ISG console page carries, whatever the display language.
pub const EXPECTED_TITLE: &str = "STIEBEL ELTRON Reglersteuerung";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("access denied by {url} (http status {status})")]
    Authentication {
        url: String,
        status: u16,
        #[source]
        source: FetchError,
    },
    #[error("failed to fetch {url}: {source}")]
    Communication {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("{host} is not an ISG console, found title: {}", .title.as_deref().unwrap_or("no title found"))]
    ProtocolMismatch { host: String, title: Option<String> },
    #[error("failed to extract {page} page: {source}")]
    Extraction {
        page: ConsolePage,
        #[source]
        source: ExtractError,
    },
    #[error("invalid host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unexpected failure fetching {url}: {source}")]
    Scraping {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// How a caller should react to a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Credentials or device access were refused.
    Authentication,
    /// Network level failure; retry on the next cycle.
    Communication,
    /// The host answered, but not like an ISG console.
    Scraping,
}

impl ClientError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ClientError::Authentication { .. } => ErrorClass::Authentication,
            ClientError::Communication { .. } => ErrorClass::Communication,
            ClientError::ProtocolMismatch { .. }
            | ClientError::Extraction { .. }
            | ClientError::InvalidHost { .. }
            | ClientError::Scraping { .. } => ErrorClass::Scraping,
        }
    }

    fn from_fetch(url: &Url, err: FetchError) -> Self {
        let url = url.to_string();
        match err.kind {
            FailureKind::HttpStatus(status @ (401 | 403)) => ClientError::Authentication {
                url,
                status,
                source: err,
            },
            FailureKind::HttpStatus(_) | FailureKind::Timeout | FailureKind::Network => {
                ClientError::Communication { url, source: err }
            }
            FailureKind::InvalidUrl | FailureKind::TooLarge { .. } => {
                ClientError::Scraping { url, source: err }
            }
        }
    }
}

/// Read-only client for one ISG console.
///
/// The host and transport are fixed at construction; every call fetches
/// fresh pages and never reuses earlier results.
#[derive(Clone)]
pub struct IsgClient {
    host: String,
    base: Url,
    fetcher: Arc<dyn Fetcher>,
}

impl IsgClient {
    pub fn new(host: impl Into<String>, settings: FetchSettings) -> Result<Self, ClientError> {
        let host = host.into();
        let base = base_url(&host)?;
        let fetcher = ReqwestFetcher::new(settings).map_err(|source| ClientError::Scraping {
            url: base.to_string(),
            source,
        })?;
        Ok(Self {
            host,
            base,
            fetcher: Arc::new(fetcher),
        })
    }

    pub fn with_fetcher(
        host: impl Into<String>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Result<Self, ClientError> {
        let host = host.into();
        let base = base_url(&host)?;
        Ok(Self {
            host,
            base,
            fetcher,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn url_for(&self, page: ConsolePage) -> Url {
        let mut url = self.base.clone();
        url.set_query(page.section().map(|section| format!("s={section}")).as_deref());
        url
    }

    /// Checks that the host serves an ISG console and returns the language
    /// it is currently rendered in.
    pub async fn test_connection(&self) -> Result<Language, ClientError> {
        let page = self.fetch_page(ConsolePage::Root).await?;
        isg_debug!(
            "Potential ISG replied with an HTML doc containing title: {:?}",
            page.title
        );

        let title_matches = page
            .title
            .as_deref()
            .is_some_and(|title| title.contains(EXPECTED_TITLE));
        if !title_matches {
            return Err(ClientError::ProtocolMismatch {
                host: self.host.clone(),
                title: page.title,
            });
        }

        let language = detect_language(&page);
        isg_debug!(
            "Connection test to {} successful, found language '{}'",
            self.host,
            language
        );
        Ok(language)
    }

    /// Fetches every telemetry page and merges them into one snapshot.
    ///
    /// Any failing page fails the whole call; no partial snapshot is
    /// returned.
    pub async fn fetch_all(&self) -> Result<Snapshot, ClientError> {
        let mut snapshot = Snapshot::new();
        for page in ConsolePage::SNAPSHOT_PAGES {
            snapshot.merge(self.scrape_snapshot_page(page).await?);
        }
        isg_debug!("Scraped data: {:?}", snapshot);
        Ok(snapshot)
    }

    /// Fetches and extracts one of [`ConsolePage::SNAPSHOT_PAGES`]. Other
    /// pages yield an empty snapshot.
    pub async fn scrape_snapshot_page(&self, page: ConsolePage) -> Result<Snapshot, ClientError> {
        let extractor: fn(&Page, &Language) -> Result<Snapshot, ExtractError> = match page {
            ConsolePage::InfoSystem => extract_info_system,
            ConsolePage::InfoHeatPump => extract_info_heat_pump,
            ConsolePage::SystemStatus => extract_system_status,
            ConsolePage::HeatPumpStatus => extract_heat_pump_status,
            ConsolePage::Root | ConsolePage::DiagnosisSystem | ConsolePage::NetworkProfile => {
                return Ok(Snapshot::new());
            }
        };

        let parsed = self.fetch_page(page).await?;
        let language = detect_language(&parsed);
        isg_debug!("Detected language on {} page: {}", page, language);
        extractor(&parsed, &language).map_err(|source| ClientError::Extraction { page, source })
    }

    pub async fn mac_address(&self) -> Result<Option<String>, ClientError> {
        let page = self.fetch_page(ConsolePage::NetworkProfile).await?;
        Ok(extract_mac_address(&page))
    }

    pub async fn firmware_version(&self) -> Result<Option<String>, ClientError> {
        let page = ConsolePage::DiagnosisSystem;
        let parsed = self.fetch_page(page).await?;
        let language = detect_language(&parsed);
        isg_debug!("Detected language on {} page: {}", page, language);
        extract_firmware_version(&parsed, &language)
            .map_err(|source| ClientError::Extraction { page, source })
    }

    /// MAC address and firmware version, read once at setup.
    pub async fn device_identity(&self) -> Result<DeviceIdentity, ClientError> {
        let identity = DeviceIdentity {
            mac_address: self.mac_address().await?,
            firmware_version: self.firmware_version().await?,
        };
        isg_info!("Device identity of {}: {:?}", self.host, identity);
        Ok(identity)
    }

    async fn fetch_page(&self, page: ConsolePage) -> Result<Page, ClientError> {
        let url = self.url_for(page);
        let output = self
            .fetcher
            .fetch(url.as_str())
            .await
            .map_err(|err| ClientError::from_fetch(&url, err))?;
        let metadata = &output.metadata;
        let decoded = decode_html(&output.bytes, metadata.content_type.as_deref());
        isg_debug!(
            "Fetched {} page from {} (status {}, {} bytes, {})",
            page,
            metadata.url,
            metadata.status,
            metadata.byte_len,
            decoded.encoding_label
        );
        Ok(parse_page(&decoded.html))
    }
}

fn base_url(host: &str) -> Result<Url, ClientError> {
    Url::parse(&format!("http://{host}/")).map_err(|source| ClientError::InvalidHost {
        host: host.to_string(),
        source,
    })
}
