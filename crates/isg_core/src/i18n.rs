//! Localized console labels.
use std::fmt;

use crate::ExtractError;

/// Console display language, named the way the console names itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Deutsch,
    Francais,
    Nederlands,
    Italiano,
    Svenska,
    Polski,
    Cestina,
    Magyar,
    Espanol,
    Suomi,
    Dansk,
    /// Marker text matching none of the known names, passed through as-is.
    Unknown(String),
}

const KNOWN_LANGUAGES: [Language; 12] = [
    Language::English,
    Language::Deutsch,
    Language::Francais,
    Language::Nederlands,
    Language::Italiano,
    Language::Svenska,
    Language::Polski,
    Language::Cestina,
    Language::Magyar,
    Language::Espanol,
    Language::Suomi,
    Language::Dansk,
];

impl Language {
    /// Matches marker text verbatim against the known names.
    pub fn from_marker(text: &str) -> Self {
        KNOWN_LANGUAGES
            .into_iter()
            .find(|language| language.name() == text)
            .unwrap_or_else(|| Language::Unknown(text.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Language::English => "ENGLISH",
            Language::Deutsch => "DEUTSCH",
            Language::Francais => "FRANÇAIS",
            Language::Nederlands => "NEDERLANDS",
            Language::Italiano => "ITALIANO",
            Language::Svenska => "SVENSKA",
            Language::Polski => "POLSKI",
            Language::Cestina => "ČEŠTINA",
            Language::Magyar => "MAGYAR",
            Language::Espanol => "ESPAÑOL",
            Language::Suomi => "SUOMI",
            Language::Dansk => "DANSK",
            Language::Unknown(text) => text,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Abstract label identifiers, independent of the display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    MajorVersion,
    MinorVersion,
    Revision,
    ActualTemperature1,
    RelativeHumidity1,
    OutsideTemperature,
    AmountOfHeat,
    PowerConsumption,
    VdHeatingDay,
    VdHeatingTotal,
    ActualTemperatureHk1,
    SetTemperatureHk1,
    Starts,
    Compressor,
    HeatPumpStatus,
    AuxiliaryHeater,
    BoosterHeaterStage1,
    BoosterHeaterStage2,
    OperatingMode,
    Defrost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSet {
    Implemented(&'static [(Label, &'static str)]),
    /// Known language whose labels have not been collected yet.
    Unimplemented,
}

const ENGLISH_LABELS: &[(Label, &str)] = &[
    (Label::MajorVersion, "Major version"),
    (Label::MinorVersion, "Minor version"),
    (Label::Revision, "Revision"),
    (Label::ActualTemperature1, "ACTUAL TEMPERATURE 1"),
    (Label::RelativeHumidity1, "RELATIVE HUMIDITY 1"),
    (Label::OutsideTemperature, "OUTSIDE TEMPERATURE"),
    (Label::AmountOfHeat, "AMOUNT OF HEAT"),
    (Label::PowerConsumption, "POWER CONSUMPTION"),
    (Label::VdHeatingDay, "VD HEATING DAY"),
    (Label::VdHeatingTotal, "VD HEATING TOTAL"),
    (Label::ActualTemperatureHk1, "ACTUAL TEMPERATURE HK 1"),
    (Label::SetTemperatureHk1, "SET TEMPERATURE HK 1"),
    (Label::Starts, "STARTS"),
    (Label::Compressor, "COMPRESSOR"),
    (Label::HeatPumpStatus, "HEAT PUMP STATUS"),
    (Label::AuxiliaryHeater, "AUXILIARY HEATER"),
    (Label::BoosterHeaterStage1, "BOOSTER HEATER STAGE 1"),
    (Label::BoosterHeaterStage2, "BOOSTER HEATER STAGE 2"),
    (Label::OperatingMode, "OPERATING MODE"),
    (Label::Defrost, "DEFROST"),
];

const DEUTSCH_LABELS: &[(Label, &str)] = &[
    (Label::MajorVersion, "Hauptversionsnummer"),
    (Label::MinorVersion, "Nebenversionsnummer"),
    (Label::Revision, "Revisionsnummer"),
    (Label::ActualTemperature1, "ISTTEMPERATUR 1"),
    (Label::RelativeHumidity1, "RAUMFEUCHTE 1"),
    (Label::OutsideTemperature, "AUSSENTEMPERATUR"),
    (Label::AmountOfHeat, "WÄRMEMENGE"),
    (Label::PowerConsumption, "LEISTUNGSAUFNAHME"),
    (Label::VdHeatingDay, "VD HEIZEN TAG"),
    (Label::VdHeatingTotal, "VD HEIZEN SUMME"),
    (Label::ActualTemperatureHk1, "ISTTEMPERATUR HK 1"),
    (Label::SetTemperatureHk1, "SOLLTEMPERATUR HK 1"),
    (Label::Starts, "STARTS"),
    (Label::Compressor, "VERDICHTER"),
    (Label::HeatPumpStatus, "STATUS WÄRMEPUMPE"),
    (Label::AuxiliaryHeater, "BEGLEITHEIZUNG"),
    (Label::BoosterHeaterStage1, "NHZ STUFE 1"),
    (Label::BoosterHeaterStage2, "NHZ STUFE 2"),
    (Label::OperatingMode, "BETRIEBSSTATUS"),
    (Label::Defrost, "ABTAUEN"),
];

/// Label set for a language; `None` for languages the console does not have.
pub fn label_set(language: &Language) -> Option<LabelSet> {
    match language {
        Language::English => Some(LabelSet::Implemented(ENGLISH_LABELS)),
        Language::Deutsch => Some(LabelSet::Implemented(DEUTSCH_LABELS)),
        Language::Unknown(_) => None,
        _ => Some(LabelSet::Unimplemented),
    }
}

/// Literal text the console renders for `label` in `language`.
pub fn lookup(label: Label, language: &Language) -> Result<&'static str, ExtractError> {
    let found = match label_set(language) {
        Some(LabelSet::Implemented(labels)) => labels
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, text)| *text),
        Some(LabelSet::Unimplemented) | None => None,
    };

    found.ok_or_else(|| ExtractError::UnsupportedLanguage {
        language: language.name().to_string(),
        label,
    })
}
