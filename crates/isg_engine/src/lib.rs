//! ISG engine: HTTP transport, page parsing and polling around `isg_core`.
mod client;
mod decode;
mod fetch;
mod parse;
mod poller;
mod types;

pub use client::{ClientError, ErrorClass, IsgClient, EXPECTED_TITLE};
pub use decode::{decode_html, DecodedHtml};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, USER_AGENT};
pub use parse::parse_page;
pub use poller::{PollEvent, PollFailure, Poller};
pub use types::{ConsolePage, FailureKind, FetchError, FetchMetadata, FetchOutput};
