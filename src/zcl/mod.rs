//! ZCL metadata primitives.
//!
//! Typed, `const`-constructible descriptors for clusters and their
//! attributes. These describe *what exists on the wire*, never values:
//! serialization and attribute access live in the hosting coordinator.

use strum::Display;

pub mod clusters;

/// Identifier of a cluster within an endpoint.
pub type ClusterId = u16;

/// Identifier of an attribute within a cluster.
pub type AttrId = u16;

/// Application profile identifier (e.g. 0x0104 for the home automation profile).
pub type ProfileId = u16;

/// Device type identifier within a profile (e.g. 0x0301 for a thermostat).
pub type DeviceTypeId = u16;

/// Endpoint number on a device. Endpoint 0 is reserved for ZDO.
pub type EndpointId = u8;

/// Wire-level value type of an attribute.
///
/// Only the types referenced by the cluster tables in this crate are listed;
/// this is a closed set, not a full ZCL data-type catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ZclType {
    Bool,
    Uint8,
    Uint16,
    Int8s,
    Int16s,
    Enum8,
    Bitmap8,
    Bitmap16,
    CharString,
    Utc,
}

/// Descriptor of a single attribute: numeric id, symbolic name, wire type,
/// and whether the id lives in the manufacturer-specific range.
///
/// Descriptors are fixed at build time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttributeDef {
    pub id: AttrId,
    pub name: &'static str,
    pub ty: ZclType,
    pub manufacturer_specific: bool,
}

impl AttributeDef {
    /// Standard attribute descriptor.
    pub const fn new(id: AttrId, name: &'static str, ty: ZclType) -> Self {
        Self {
            id,
            name,
            ty,
            manufacturer_specific: false,
        }
    }

    /// Manufacturer-specific attribute descriptor.
    pub const fn mfg(id: AttrId, name: &'static str, ty: ZclType) -> Self {
        Self {
            id,
            name,
            ty,
            manufacturer_specific: true,
        }
    }
}

/// Descriptor of a standard cluster: id, name, and its attribute table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterDef {
    pub id: ClusterId,
    pub name: &'static str,
    pub attributes: &'static [AttributeDef],
}

impl ClusterDef {
    pub const fn new(
        id: ClusterId,
        name: &'static str,
        attributes: &'static [AttributeDef],
    ) -> Self {
        Self {
            id,
            name,
            attributes,
        }
    }

    /// Look up an attribute descriptor by id.
    pub fn attribute(&self, id: AttrId) -> Option<&AttributeDef> {
        self.attributes.iter().find(|attr| attr.id == id)
    }

    pub fn has_attribute(&self, id: AttrId) -> bool {
        self.attribute(id).is_some()
    }
}
