//! Standard cluster definitions.
//!
//! Only the clusters referenced by the built-in quirks are declared, and the
//! HVAC clusters carry their commonly used standard attributes so that
//! extension merging has a real inherited table to merge with. The remaining
//! clusters are matched by id alone during signature comparison, so a thin
//! table is enough for them.

use super::{AttributeDef, ClusterDef, ClusterId, ZclType};

pub const BASIC: ClusterDef = ClusterDef::new(
    0x0000,
    "Basic",
    &[
        AttributeDef::new(0x0000, "zcl_version", ZclType::Uint8),
        AttributeDef::new(0x0001, "app_version", ZclType::Uint8),
        AttributeDef::new(0x0004, "manufacturer", ZclType::CharString),
        AttributeDef::new(0x0005, "model", ZclType::CharString),
        AttributeDef::new(0x0007, "power_source", ZclType::Enum8),
    ],
);

pub const IDENTIFY: ClusterDef = ClusterDef::new(
    0x0003,
    "Identify",
    &[AttributeDef::new(0x0000, "identify_time", ZclType::Uint16)],
);

pub const TIME: ClusterDef = ClusterDef::new(
    0x000A,
    "Time",
    &[
        AttributeDef::new(0x0000, "time", ZclType::Utc),
        AttributeDef::new(0x0001, "time_status", ZclType::Bitmap8),
    ],
);

pub const OTA: ClusterDef = ClusterDef::new(
    0x0019,
    "Ota",
    &[AttributeDef::new(
        0x0002,
        "current_file_version",
        ZclType::Uint16,
    )],
);

pub const THERMOSTAT: ClusterDef = ClusterDef::new(
    0x0201,
    "Thermostat",
    &[
        AttributeDef::new(0x0000, "local_temperature", ZclType::Int16s),
        AttributeDef::new(0x0010, "local_temperature_calibration", ZclType::Int8s),
        AttributeDef::new(0x0011, "occupied_cooling_setpoint", ZclType::Int16s),
        AttributeDef::new(0x0012, "occupied_heating_setpoint", ZclType::Int16s),
        AttributeDef::new(0x0015, "min_heat_setpoint_limit", ZclType::Int16s),
        AttributeDef::new(0x0016, "max_heat_setpoint_limit", ZclType::Int16s),
        AttributeDef::new(0x001B, "ctrl_sequence_of_operation", ZclType::Enum8),
        AttributeDef::new(0x001C, "system_mode", ZclType::Enum8),
        AttributeDef::new(0x0029, "running_state", ZclType::Bitmap16),
    ],
);

pub const USER_INTERFACE: ClusterDef = ClusterDef::new(
    0x0204,
    "ThermostatUserInterface",
    &[
        AttributeDef::new(0x0000, "temperature_display_mode", ZclType::Enum8),
        AttributeDef::new(0x0001, "keypad_lockout", ZclType::Enum8),
        AttributeDef::new(0x0002, "schedule_programming_visibility", ZclType::Enum8),
    ],
);

pub const RELATIVE_HUMIDITY: ClusterDef = ClusterDef::new(
    0x0405,
    "RelativeHumidity",
    &[
        AttributeDef::new(0x0000, "measured_value", ZclType::Uint16),
        AttributeDef::new(0x0001, "min_measured_value", ZclType::Uint16),
        AttributeDef::new(0x0002, "max_measured_value", ZclType::Uint16),
    ],
);

pub const DIAGNOSTIC: ClusterDef = ClusterDef::new(
    0x0B05,
    "Diagnostic",
    &[
        AttributeDef::new(0x0000, "number_of_resets", ZclType::Uint16),
        AttributeDef::new(0x011C, "last_message_lqi", ZclType::Uint8),
        AttributeDef::new(0x011D, "last_message_rssi", ZclType::Int8s),
    ],
);

/// All standard clusters this crate knows about.
pub const ALL: &[&ClusterDef] = &[
    &BASIC,
    &IDENTIFY,
    &TIME,
    &OTA,
    &THERMOSTAT,
    &USER_INTERFACE,
    &RELATIVE_HUMIDITY,
    &DIAGNOSTIC,
];

/// Look up a standard cluster definition by id.
pub fn by_id(id: ClusterId) -> Option<&'static ClusterDef> {
    ALL.iter().copied().find(|cluster| cluster.id == id)
}

/// Human-readable cluster name for diagnostics; falls back to "Unknown".
pub fn name(id: ClusterId) -> &'static str {
    by_id(id).map(|cluster| cluster.name).unwrap_or("Unknown")
}
