use std::fmt;

use serde::Serialize;

/// Stable, language-independent identifier of one telemetry quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    RoomTemperature,
    RoomRelativeHumidity,
    OutsideTemperature,
    FlowTemperature,
    TargetFlowTemperature,
    HeatingEnergy,
    TotalHeatingEnergy,
    PowerConsumption,
    TotalPowerConsumption,
    CompressorStarts,
    CompressorStatus,
    AuxiliaryHeaterStatus,
    #[serde(rename = "booster_heater_1_status")]
    BoosterHeater1Status,
    #[serde(rename = "booster_heater_2_status")]
    BoosterHeater2Status,
    DefrostStatus,
}

/// How the display layer should treat a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Instantaneous reading.
    Measurement,
    /// Counter that resets (daily totals).
    TotalIncreasing,
    /// Lifetime counter.
    Total,
    /// On/off state of a component.
    Running,
}

impl FieldKey {
    pub const ALL: [FieldKey; 15] = [
        FieldKey::RoomTemperature,
        FieldKey::RoomRelativeHumidity,
        FieldKey::OutsideTemperature,
        FieldKey::FlowTemperature,
        FieldKey::TargetFlowTemperature,
        FieldKey::HeatingEnergy,
        FieldKey::TotalHeatingEnergy,
        FieldKey::PowerConsumption,
        FieldKey::TotalPowerConsumption,
        FieldKey::CompressorStarts,
        FieldKey::CompressorStatus,
        FieldKey::AuxiliaryHeaterStatus,
        FieldKey::BoosterHeater1Status,
        FieldKey::BoosterHeater2Status,
        FieldKey::DefrostStatus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::RoomTemperature => "room_temperature",
            FieldKey::RoomRelativeHumidity => "room_relative_humidity",
            FieldKey::OutsideTemperature => "outside_temperature",
            FieldKey::FlowTemperature => "flow_temperature",
            FieldKey::TargetFlowTemperature => "target_flow_temperature",
            FieldKey::HeatingEnergy => "heating_energy",
            FieldKey::TotalHeatingEnergy => "total_heating_energy",
            FieldKey::PowerConsumption => "power_consumption",
            FieldKey::TotalPowerConsumption => "total_power_consumption",
            FieldKey::CompressorStarts => "compressor_starts",
            FieldKey::CompressorStatus => "compressor_status",
            FieldKey::AuxiliaryHeaterStatus => "auxiliary_heater_status",
            FieldKey::BoosterHeater1Status => "booster_heater_1_status",
            FieldKey::BoosterHeater2Status => "booster_heater_2_status",
            FieldKey::DefrostStatus => "defrost_status",
        }
    }

    /// Human readable name for display entities.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::RoomTemperature => "Room temperature",
            FieldKey::RoomRelativeHumidity => "Room relative humidity",
            FieldKey::OutsideTemperature => "Outside temperature",
            FieldKey::FlowTemperature => "Flow temperature",
            FieldKey::TargetFlowTemperature => "Target flow temperature",
            FieldKey::HeatingEnergy => "Heating",
            FieldKey::TotalHeatingEnergy => "Total heating",
            FieldKey::PowerConsumption => "Energy consumption",
            FieldKey::TotalPowerConsumption => "Total energy consumption",
            FieldKey::CompressorStarts => "Compressor starts",
            FieldKey::CompressorStatus => "Compressor status",
            FieldKey::AuxiliaryHeaterStatus => "Auxiliary heater status",
            FieldKey::BoosterHeater1Status => "Booster heater stage 1 status",
            FieldKey::BoosterHeater2Status => "Booster heater stage 2 status",
            FieldKey::DefrostStatus => "Defrost status",
        }
    }

    /// Unit of the normalized value. Energy is always kWh, even when the
    /// console renders MWh.
    pub fn unit(self) -> Option<&'static str> {
        match self {
            FieldKey::RoomTemperature
            | FieldKey::OutsideTemperature
            | FieldKey::FlowTemperature
            | FieldKey::TargetFlowTemperature => Some("°C"),
            FieldKey::RoomRelativeHumidity => Some("%"),
            FieldKey::HeatingEnergy
            | FieldKey::TotalHeatingEnergy
            | FieldKey::PowerConsumption
            | FieldKey::TotalPowerConsumption => Some("kWh"),
            FieldKey::CompressorStarts
            | FieldKey::CompressorStatus
            | FieldKey::AuxiliaryHeaterStatus
            | FieldKey::BoosterHeater1Status
            | FieldKey::BoosterHeater2Status
            | FieldKey::DefrostStatus => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldKey::RoomTemperature
            | FieldKey::RoomRelativeHumidity
            | FieldKey::OutsideTemperature
            | FieldKey::FlowTemperature
            | FieldKey::TargetFlowTemperature => FieldKind::Measurement,
            FieldKey::HeatingEnergy | FieldKey::PowerConsumption => FieldKind::TotalIncreasing,
            FieldKey::TotalHeatingEnergy
            | FieldKey::TotalPowerConsumption
            | FieldKey::CompressorStarts => FieldKind::Total,
            FieldKey::CompressorStatus
            | FieldKey::AuxiliaryHeaterStatus
            | FieldKey::BoosterHeater1Status
            | FieldKey::BoosterHeater2Status
            | FieldKey::DefrostStatus => FieldKind::Running,
        }
    }

    pub fn is_binary(self) -> bool {
        self.kind() == FieldKind::Running
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKey, FieldKind};

    #[test]
    fn serialized_name_matches_as_str() {
        for key in FieldKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn binary_fields_have_no_unit() {
        for key in FieldKey::ALL.into_iter().filter(|k| k.is_binary()) {
            assert_eq!(key.unit(), None, "{key}");
        }
        assert_eq!(FieldKey::TotalHeatingEnergy.kind(), FieldKind::Total);
    }
}
