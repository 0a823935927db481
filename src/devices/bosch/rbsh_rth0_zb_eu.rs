//! Quirk for the Bosch RBSH-RTH0-ZB-EU room thermostat.
//!
//! The device reports standard Thermostat (0x0201) and thermostat user
//! interface (0x0204) clusters but drives most of its behavior through
//! manufacturer-specific attributes on both. This quirk swaps the two
//! clusters for extended definitions carrying those attributes; the rest of
//! the endpoint stays as reported.
//!
//! Attributes named `attr_0x....` are present on the wire but undocumented;
//! they stay opaque typed placeholders until their meaning is known.

use strum::FromRepr;

use super::BOSCH;
use crate::quirk::{
    ClusterExtension, ClusterRef, EndpointReplacement, EndpointSignature, Quirk, QuirkSignature,
};
use crate::zcl::{AttributeDef, ZclType, clusters};

/// Operating mode (attribute 0x4007).
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum OperatingMode {
    Schedule = 0x00,
    Manual = 0x01,
    Pause = 0x05,
}

/// Binary on/off state used by `window_open` and `boost`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum State {
    Off = 0x00,
    On = 0x01,
}

/// Physical mounting orientation of the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum DisplayOrientation {
    Normal = 0x00,
    Flipped = 0x01,
}

/// Which temperature the display shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum DisplayedTemperature {
    Target = 0x00,
    Measured = 0x01,
}

const THERMOSTAT_ATTRS: &[AttributeDef] = &[
    // OperatingMode
    AttributeDef::mfg(0x4007, "operating_mode", ZclType::Enum8),
    // Values range from 0-100
    AttributeDef::mfg(0x4020, "pi_heating_demand", ZclType::Uint8),
    AttributeDef::mfg(0x4022, "attr_0x4022", ZclType::Enum8),
    AttributeDef::mfg(0x4023, "attr_0x4023", ZclType::Enum8),
    AttributeDef::mfg(0x4024, "attr_0x4024", ZclType::Enum8),
    AttributeDef::mfg(0x4025, "attr_0x4025", ZclType::Enum8),
    // State
    AttributeDef::mfg(0x4042, "window_open", ZclType::Enum8),
    // State
    AttributeDef::mfg(0x4043, "boost", ZclType::Enum8),
    AttributeDef::mfg(0x4050, "attr_0x4050", ZclType::Enum8),
    AttributeDef::mfg(0x4051, "attr_0x4051", ZclType::Int16s),
    AttributeDef::mfg(0x4052, "attr_0x4052", ZclType::Int16s),
    AttributeDef::mfg(0x405B, "attr_0x405b", ZclType::Enum8),
    AttributeDef::mfg(0x4060, "attr_0x4060", ZclType::Enum8),
    AttributeDef::mfg(0x4061, "attr_0x4061", ZclType::Enum8),
    AttributeDef::mfg(0x4062, "attr_0x4062", ZclType::Enum8),
    AttributeDef::mfg(0x4063, "attr_0x4063", ZclType::Enum8),
    AttributeDef::mfg(0x5000, "attr_0x5000", ZclType::Bitmap8),
    AttributeDef::mfg(0x501F, "attr_0x501f", ZclType::Enum8),
];

/// Thermostat cluster with the Bosch manufacturer attributes.
pub static BOSCH_THERMOSTAT: ClusterExtension =
    ClusterExtension::new("BoschThermostat", &clusters::THERMOSTAT, THERMOSTAT_ATTRS);

const USER_INTERFACE_ATTRS: &[AttributeDef] = &[
    AttributeDef::mfg(0x4032, "attr_0x4032", ZclType::Enum8),
    AttributeDef::mfg(0x4033, "attr_0x4033", ZclType::Enum8),
    // Usable values range from 2-30 seconds
    AttributeDef::mfg(0x403A, "display_ontime", ZclType::Uint8),
    // Values range from 0-10
    AttributeDef::mfg(0x403B, "display_brightness", ZclType::Uint8),
    AttributeDef::mfg(0x406A, "attr_0x406a", ZclType::Enum8),
    AttributeDef::mfg(0x406B, "attr_0x406b", ZclType::Enum8),
];

/// User interface cluster with the Bosch display attributes.
pub static BOSCH_USER_INTERFACE: ClusterExtension = ClusterExtension::new(
    "BoschUserInterface",
    &clusters::USER_INTERFACE,
    USER_INTERFACE_ATTRS,
);

/// The quirk itself.
///
/// Reported simple descriptor:
/// endpoint=1 profile=260 device_type=769
/// input_clusters=[0, 3, 513, 516, 1029, 2821] output_clusters=[10, 25]
pub static QUIRK: Quirk = Quirk {
    name: "bosch.rbsh_rth0_zb_eu",
    signature: QuirkSignature {
        models: &[(BOSCH, "RBSH-RTH0-ZB-EU")],
        endpoints: &[(
            1,
            EndpointSignature {
                profile_id: 0x0104,
                device_type: 0x0301,
                input_clusters: &[
                    clusters::BASIC.id,
                    clusters::IDENTIFY.id,
                    clusters::THERMOSTAT.id,
                    clusters::USER_INTERFACE.id,
                    clusters::RELATIVE_HUMIDITY.id,
                    clusters::DIAGNOSTIC.id,
                ],
                output_clusters: &[clusters::TIME.id, clusters::OTA.id],
            },
        )],
    },
    replacement: &[(
        1,
        EndpointReplacement {
            profile_id: None,
            device_type: None,
            input_clusters: &[
                ClusterRef::Standard(clusters::BASIC.id),
                ClusterRef::Standard(clusters::IDENTIFY.id),
                ClusterRef::Extended(&BOSCH_THERMOSTAT),
                ClusterRef::Extended(&BOSCH_USER_INTERFACE),
                ClusterRef::Standard(clusters::RELATIVE_HUMIDITY.id),
                ClusterRef::Standard(clusters::DIAGNOSTIC.id),
            ],
            output_clusters: &[
                ClusterRef::Standard(clusters::TIME.id),
                ClusterRef::Standard(clusters::OTA.id),
            ],
        },
    )],
};
