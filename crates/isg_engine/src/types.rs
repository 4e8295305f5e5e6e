use std::fmt;

/// Console sections the client reads, with their fixed locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsolePage {
    Root,
    InfoSystem,
    InfoHeatPump,
    SystemStatus,
    HeatPumpStatus,
    DiagnosisSystem,
    NetworkProfile,
}

impl ConsolePage {
    /// Pages merged into one snapshot, in fetch order.
    pub const SNAPSHOT_PAGES: [ConsolePage; 4] = [
        ConsolePage::InfoSystem,
        ConsolePage::InfoHeatPump,
        ConsolePage::SystemStatus,
        ConsolePage::HeatPumpStatus,
    ];

    /// Value of the `s` query parameter selecting the section.
    pub fn section(self) -> Option<&'static str> {
        match self {
            ConsolePage::Root => None,
            ConsolePage::InfoSystem => Some("1,0"),
            ConsolePage::InfoHeatPump => Some("1,1"),
            ConsolePage::SystemStatus => Some("2,0"),
            ConsolePage::HeatPumpStatus => Some("2,2"),
            ConsolePage::DiagnosisSystem => Some("2,7"),
            ConsolePage::NetworkProfile => Some("5,0"),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConsolePage::Root => "Start",
            ConsolePage::InfoSystem => "Info > System",
            ConsolePage::InfoHeatPump => "Info > Heat Pump",
            ConsolePage::SystemStatus => "Diagnosis > System Status",
            ConsolePage::HeatPumpStatus => "Diagnosis > Heat Pump Status",
            ConsolePage::DiagnosisSystem => "Diagnosis > System",
            ConsolePage::NetworkProfile => "Profile > Network",
        }
    }
}

impl fmt::Display for ConsolePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
    #[source]
    pub source: Option<reqwest::Error>,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn with_source(kind: FailureKind, source: reqwest::Error) -> Self {
        Self {
            kind,
            message: source.to_string(),
            source: Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
