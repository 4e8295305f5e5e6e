//! Page extractors.
//!
//! Every extractor is driven by a static rule table: which localized label
//! to look for, which field it feeds and how its text converts. All labels
//! of a page are resolved before the page is scanned, so a language without
//! labels fails the page as a whole.
use std::sync::LazyLock;

use isg_logging::{isg_debug, isg_error, isg_warn};
use regex::Regex;

use crate::convert::{energy, icon_state, number, percentage, temperature};
use crate::{lookup, ExtractError, FieldKey, Label, Language, Page, Snapshot, Table, Value};

/// Header of the diagnosis table carrying the gateway firmware version. It
/// is not localized.
pub const VERSION_TABLE_HEADER: &str = "ISG";

static MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[0-9a-fA-F]:?){12}").expect("MAC address pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Temperature,
    Percentage,
    Number,
    Energy,
    Icon,
}

struct RowRule {
    label: Label,
    key: FieldKey,
    conversion: Conversion,
}

struct TableRule {
    header: Label,
    rows: &'static [RowRule],
}

const fn rule(label: Label, key: FieldKey, conversion: Conversion) -> RowRule {
    RowRule {
        label,
        key,
        conversion,
    }
}

const INFO_SYSTEM_ROWS: &[RowRule] = &[
    rule(Label::ActualTemperature1, FieldKey::RoomTemperature, Conversion::Temperature),
    rule(Label::OutsideTemperature, FieldKey::OutsideTemperature, Conversion::Temperature),
    rule(Label::RelativeHumidity1, FieldKey::RoomRelativeHumidity, Conversion::Percentage),
    rule(Label::ActualTemperatureHk1, FieldKey::FlowTemperature, Conversion::Temperature),
    rule(Label::SetTemperatureHk1, FieldKey::TargetFlowTemperature, Conversion::Temperature),
];

const INFO_HEAT_PUMP_TABLES: &[TableRule] = &[
    TableRule {
        header: Label::AmountOfHeat,
        rows: &[
            rule(Label::VdHeatingDay, FieldKey::HeatingEnergy, Conversion::Energy),
            rule(Label::VdHeatingTotal, FieldKey::TotalHeatingEnergy, Conversion::Energy),
        ],
    },
    TableRule {
        header: Label::PowerConsumption,
        rows: &[
            rule(Label::VdHeatingDay, FieldKey::PowerConsumption, Conversion::Energy),
            rule(Label::VdHeatingTotal, FieldKey::TotalPowerConsumption, Conversion::Energy),
        ],
    },
    TableRule {
        header: Label::Starts,
        rows: &[rule(Label::Compressor, FieldKey::CompressorStarts, Conversion::Number)],
    },
];

const SYSTEM_STATUS_TABLES: &[TableRule] = &[TableRule {
    header: Label::OperatingMode,
    rows: &[rule(Label::Defrost, FieldKey::DefrostStatus, Conversion::Icon)],
}];

const HEAT_PUMP_STATUS_TABLES: &[TableRule] = &[TableRule {
    header: Label::HeatPumpStatus,
    rows: &[
        rule(Label::Compressor, FieldKey::CompressorStatus, Conversion::Icon),
        rule(Label::AuxiliaryHeater, FieldKey::AuxiliaryHeaterStatus, Conversion::Icon),
        rule(Label::BoosterHeaterStage1, FieldKey::BoosterHeater1Status, Conversion::Icon),
        rule(Label::BoosterHeaterStage2, FieldKey::BoosterHeater2Status, Conversion::Icon),
    ],
}];

struct ResolvedRow {
    label: &'static str,
    key: FieldKey,
    conversion: Conversion,
}

struct ResolvedTable {
    header: &'static str,
    rows: Vec<ResolvedRow>,
}

/// Info > System: one flat table of current readings.
pub fn extract_info_system(page: &Page, language: &Language) -> Result<Snapshot, ExtractError> {
    let rules = resolve_rows(INFO_SYSTEM_ROWS, language)?;
    let mut snapshot = Snapshot::new();

    for row in &page.rows {
        let Some(label) = row.label() else {
            continue;
        };
        if let Some(rule) = rules.iter().find(|rule| rule.label == label) {
            snapshot.set(rule.key, row.value().and_then(|text| convert(rule.conversion, text)));
        }
    }

    isg_debug!("Extracted data from Info > System page: {:?}", snapshot);
    Ok(snapshot)
}

/// Info > Heat Pump: energy counters and compressor starts.
pub fn extract_info_heat_pump(
    page: &Page,
    language: &Language,
) -> Result<Snapshot, ExtractError> {
    let snapshot = scan_headed_tables(page, INFO_HEAT_PUMP_TABLES, language)?;
    isg_debug!("Extracted data from Info > Heat Pump page: {:?}", snapshot);
    Ok(snapshot)
}

/// Diagnosis > System Status: defrost state, off unless shown on.
pub fn extract_system_status(page: &Page, language: &Language) -> Result<Snapshot, ExtractError> {
    let snapshot = scan_headed_tables(page, SYSTEM_STATUS_TABLES, language)?;
    isg_debug!("Extracted data from Diagnosis > System Status page: {:?}", snapshot);
    Ok(snapshot)
}

/// Diagnosis > Heat Pump Status: compressor and heater states, off unless
/// shown on.
pub fn extract_heat_pump_status(
    page: &Page,
    language: &Language,
) -> Result<Snapshot, ExtractError> {
    let snapshot = scan_headed_tables(page, HEAT_PUMP_STATUS_TABLES, language)?;
    isg_debug!("Extracted data from Diagnosis > Heat Pump Status page: {:?}", snapshot);
    Ok(snapshot)
}

/// Diagnosis > System: `major.minor.revision` of the gateway firmware.
///
/// Components are joined as rendered, without numeric validation. A version
/// table missing one of them is skipped, so the last complete table wins.
pub fn extract_firmware_version(
    page: &Page,
    language: &Language,
) -> Result<Option<String>, ExtractError> {
    let major_label = lookup(Label::MajorVersion, language)?;
    let minor_label = lookup(Label::MinorVersion, language)?;
    let revision_label = lookup(Label::Revision, language)?;

    let mut version = None;
    for table in version_tables(page) {
        let (mut major, mut minor, mut revision) = (None, None, None);
        for row in table.labelled_rows() {
            let label = row.label();
            if label == Some(major_label) {
                major = row.value();
            } else if label == Some(minor_label) {
                minor = row.value();
            } else if label == Some(revision_label) {
                revision = row.value();
            }
        }

        match (major, minor, revision) {
            (Some(major), Some(minor), Some(revision)) => {
                version = Some(format!("{major}.{minor}.{revision}"));
            }
            _ => isg_warn!(
                "Incomplete version table: major={:?} minor={:?} revision={:?}",
                major,
                minor,
                revision
            ),
        }
    }

    isg_debug!("Extracted version from Diagnosis > System page: {:?}", version);
    Ok(version)
}

/// Profile > Network: first MAC-address-shaped token of the page text.
pub fn extract_mac_address(page: &Page) -> Option<String> {
    let found = MAC_ADDRESS
        .find(&page.text)
        .map(|found| found.as_str().to_string());
    match &found {
        Some(mac) => isg_debug!("Extracted MAC address from Profile > Network page: {mac}"),
        None => isg_error!("No MAC address found on Profile > Network page"),
    }
    found
}

fn version_tables(page: &Page) -> impl Iterator<Item = &Table> {
    page.tables
        .iter()
        .filter(|table| table.header() == Some(VERSION_TABLE_HEADER))
}

fn scan_headed_tables(
    page: &Page,
    rules: &[TableRule],
    language: &Language,
) -> Result<Snapshot, ExtractError> {
    let resolved = rules
        .iter()
        .map(|table| -> Result<ResolvedTable, ExtractError> {
            Ok(ResolvedTable {
                header: lookup(table.header, language)?,
                rows: resolve_rows(table.rows, language)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut snapshot: Snapshot = resolved
        .iter()
        .flat_map(|table| &table.rows)
        .filter(|row| row.conversion == Conversion::Icon)
        .map(|row| (row.key, Some(Value::Flag(false))))
        .collect();

    for table in &page.tables {
        let Some(header) = table.header() else {
            continue;
        };
        let Some(matched) = resolved.iter().find(|rule| rule.header == header) else {
            continue;
        };
        for row in &matched.rows {
            snapshot.set(row.key, read_row(table, row));
        }
    }

    Ok(snapshot)
}

fn resolve_rows(rules: &[RowRule], language: &Language) -> Result<Vec<ResolvedRow>, ExtractError> {
    rules
        .iter()
        .map(|rule| -> Result<ResolvedRow, ExtractError> {
            Ok(ResolvedRow {
                label: lookup(rule.label, language)?,
                key: rule.key,
                conversion: rule.conversion,
            })
        })
        .collect()
}

fn read_row(table: &Table, rule: &ResolvedRow) -> Option<Value> {
    if rule.conversion == Conversion::Icon {
        return Some(Value::Flag(icon_state(table, rule.label)));
    }
    table
        .labelled_rows()
        .find(|row| row.label() == Some(rule.label))
        .and_then(|row| row.value())
        .and_then(|text| convert(rule.conversion, text))
}

fn convert(conversion: Conversion, text: &str) -> Option<Value> {
    let value = match conversion {
        Conversion::Temperature => temperature(text),
        Conversion::Percentage => percentage(text),
        Conversion::Number => number(text),
        Conversion::Energy => energy(text),
        Conversion::Icon => return None,
    };
    value.map(Value::Number)
}
