//! ISG core: pure extraction engine for the STIEBEL ELTRON ISG web console.
//!
//! Nothing in here performs IO. Pages arrive as an in-memory [`Page`] model
//! and leave as a [`Snapshot`] of typed values.
mod convert;
mod detect;
mod error;
mod extract;
mod field;
mod i18n;
mod page;
mod snapshot;

pub use convert::{energy, icon_state, number, percentage, temperature, ICON_ON_MARKER};
pub use detect::{detect_language, LANGUAGE_MARKER_CLASS};
pub use error::ExtractError;
pub use extract::{
    extract_firmware_version, extract_heat_pump_status, extract_info_heat_pump,
    extract_info_system, extract_mac_address, extract_system_status, VERSION_TABLE_HEADER,
};
pub use field::{FieldKey, FieldKind};
pub use i18n::{label_set, lookup, Label, LabelSet, Language};
pub use page::{Cell, Icon, Page, Row, Table};
pub use snapshot::{DeviceIdentity, Snapshot, Value};
