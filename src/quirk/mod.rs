//! Quirk descriptors and matching.
//!
//! A quirk pairs a *signature* (the endpoint layout a real device reports
//! during the interview) with a *replacement* (the layout the coordinator
//! should install instead, usually swapping standard clusters for extended
//! ones). Matching a discovered device against a signature and producing the
//! effective topology both live here; reading and writing the attributes the
//! extended clusters declare is the coordinator's job.

use std::collections::BTreeMap;

use crate::error::{QuirkError, Result};
use crate::zcl::{AttrId, AttributeDef, ClusterDef, ClusterId, DeviceTypeId, EndpointId, ProfileId, clusters};

mod discovery;

pub use discovery::{DiscoveredDevice, SimpleDescriptor};

/// A standard cluster extended with manufacturer-specific attributes.
///
/// Modeled as composition: the inherited table stays in the base
/// [`ClusterDef`] and the vendor entries live in `extra`; lookups consult
/// both. The extension never changes the wire-level cluster id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClusterExtension {
    pub name: &'static str,
    pub base: &'static ClusterDef,
    pub extra: &'static [AttributeDef],
}

impl ClusterExtension {
    pub const fn new(
        name: &'static str,
        base: &'static ClusterDef,
        extra: &'static [AttributeDef],
    ) -> Self {
        Self { name, base, extra }
    }

    /// The wire-level cluster id, unchanged from the base cluster.
    pub const fn cluster_id(&self) -> ClusterId {
        self.base.id
    }

    /// Merged attribute lookup: vendor entries first, then the inherited table.
    pub fn attribute(&self, id: AttrId) -> Option<&AttributeDef> {
        self.extra
            .iter()
            .find(|attr| attr.id == id)
            .or_else(|| self.base.attribute(id))
    }

    /// Iterate over the merged attribute table (vendor entries, then inherited).
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDef> {
        self.extra.iter().chain(self.base.attributes.iter())
    }

    /// Check internal consistency: no duplicate ids within the vendor
    /// entries, and no vendor entry may shadow an inherited attribute.
    pub fn validate(&self) -> Result<()> {
        for (i, attr) in self.extra.iter().enumerate() {
            if self.extra[..i].iter().any(|prev| prev.id == attr.id) {
                return Err(QuirkError::DuplicateAttribute {
                    cluster: self.name,
                    attr_id: attr.id,
                });
            }
            if self.base.has_attribute(attr.id) {
                return Err(QuirkError::AttributeCollision {
                    cluster: self.name,
                    attr_id: attr.id,
                });
            }
        }
        Ok(())
    }
}

/// A cluster slot in a replacement endpoint: either a standard cluster,
/// referenced by id, or an extended one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterRef {
    Standard(ClusterId),
    Extended(&'static ClusterExtension),
}

impl ClusterRef {
    pub const fn cluster_id(&self) -> ClusterId {
        match self {
            Self::Standard(id) => *id,
            Self::Extended(ext) => ext.cluster_id(),
        }
    }

    pub const fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }
}

/// What one endpoint of a real device is expected to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointSignature {
    pub profile_id: ProfileId,
    pub device_type: DeviceTypeId,
    pub input_clusters: &'static [ClusterId],
    pub output_clusters: &'static [ClusterId],
}

/// What the coordinator should install for one endpoint once the signature
/// matched. `None` for profile or device type means "carry over from the
/// signature".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointReplacement {
    pub profile_id: Option<ProfileId>,
    pub device_type: Option<DeviceTypeId>,
    pub input_clusters: &'static [ClusterRef],
    pub output_clusters: &'static [ClusterRef],
}

/// The signature half of a quirk: model strings plus per-endpoint layout.
#[derive(Clone, Copy, Debug)]
pub struct QuirkSignature {
    /// (manufacturer, model) pairs this quirk applies to.
    pub models: &'static [(&'static str, &'static str)],
    pub endpoints: &'static [(EndpointId, EndpointSignature)],
}

/// A complete device quirk: recognition signature and replacement topology.
#[derive(Clone, Copy, Debug)]
pub struct Quirk {
    pub name: &'static str,
    pub signature: QuirkSignature,
    pub replacement: &'static [(EndpointId, EndpointReplacement)],
}

/// Effective topology of one endpoint after a quirk has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuirkedEndpoint {
    pub profile_id: ProfileId,
    pub device_type: DeviceTypeId,
    pub input_clusters: Vec<ClusterRef>,
    pub output_clusters: Vec<ClusterRef>,
}

/// Effective topology of a matched device.
#[derive(Clone, Debug)]
pub struct QuirkedDevice {
    pub quirk: &'static str,
    pub endpoints: BTreeMap<EndpointId, QuirkedEndpoint>,
}

impl QuirkedDevice {
    /// Wire-level input cluster ids of an endpoint, in declaration order.
    pub fn input_cluster_ids(&self, endpoint: EndpointId) -> Option<Vec<ClusterId>> {
        self.endpoints.get(&endpoint).map(|ep| {
            ep.input_clusters
                .iter()
                .map(|cluster| cluster.cluster_id())
                .collect()
        })
    }
}

impl Quirk {
    fn endpoint_signature(&self, endpoint: EndpointId) -> Option<&EndpointSignature> {
        self.signature
            .endpoints
            .iter()
            .find(|(id, _)| *id == endpoint)
            .map(|(_, sig)| sig)
    }

    /// Whether a discovered device reports exactly this quirk's signature.
    ///
    /// Model info, endpoint set, profile, device type, and the exact ordered
    /// input/output cluster lists must all agree; any deviation means no
    /// match.
    pub fn matches(&self, device: &DiscoveredDevice) -> bool {
        if !self.signature.models.is_empty() {
            let (Some(manufacturer), Some(model)) =
                (device.manufacturer.as_deref(), device.model.as_deref())
            else {
                return false;
            };
            if !self
                .signature
                .models
                .iter()
                .any(|(m, mo)| *m == manufacturer && *mo == model)
            {
                return false;
            }
        }

        if device.endpoints.len() != self.signature.endpoints.len() {
            return false;
        }

        self.signature.endpoints.iter().all(|(id, sig)| {
            device.endpoints.get(id).is_some_and(|desc| {
                desc.profile_id == sig.profile_id
                    && desc.device_type == sig.device_type
                    && desc.input_clusters == sig.input_clusters
                    && desc.output_clusters == sig.output_clusters
            })
        })
    }

    /// Produce the effective topology for a matching device.
    ///
    /// Profile and device type carry over from the signature wherever the
    /// replacement leaves them unset.
    pub fn apply(&self, device: &DiscoveredDevice) -> Result<QuirkedDevice> {
        if !self.matches(device) {
            return Err(QuirkError::NoMatch(self.name));
        }

        let mut endpoints = BTreeMap::new();
        for (id, repl) in self.replacement {
            // validate() guarantees a signature endpoint exists for every
            // replacement endpoint.
            let sig = self
                .endpoint_signature(*id)
                .ok_or(QuirkError::EndpointSetMismatch { quirk: self.name })?;

            endpoints.insert(
                *id,
                QuirkedEndpoint {
                    profile_id: repl.profile_id.unwrap_or(sig.profile_id),
                    device_type: repl.device_type.unwrap_or(sig.device_type),
                    input_clusters: repl.input_clusters.to_vec(),
                    output_clusters: repl.output_clusters.to_vec(),
                },
            );
        }

        Ok(QuirkedDevice {
            quirk: self.name,
            endpoints,
        })
    }

    /// Check the quirk's internal consistency.
    ///
    /// The replacement endpoint set must mirror the signature's, every
    /// extension must validate, and every cluster id referenced anywhere
    /// must resolve to a known standard cluster.
    pub fn validate(&self) -> Result<()> {
        // Duplicate endpoint ids would let the len() comparison below hide a
        // dropped endpoint, so both lists must be duplicate-free first.
        if has_duplicate_endpoint(self.signature.endpoints.iter().map(|(id, _)| *id))
            || has_duplicate_endpoint(self.replacement.iter().map(|(id, _)| *id))
        {
            return Err(QuirkError::EndpointSetMismatch { quirk: self.name });
        }

        if self.replacement.len() != self.signature.endpoints.len()
            || self
                .replacement
                .iter()
                .any(|(id, _)| self.endpoint_signature(*id).is_none())
        {
            return Err(QuirkError::EndpointSetMismatch { quirk: self.name });
        }

        for (_, sig) in self.signature.endpoints {
            for id in sig.input_clusters.iter().chain(sig.output_clusters) {
                self.known_cluster(*id)?;
            }
        }

        for (_, repl) in self.replacement {
            for cluster in repl.input_clusters.iter().chain(repl.output_clusters) {
                match cluster {
                    ClusterRef::Standard(id) => {
                        self.known_cluster(*id)?;
                    }
                    ClusterRef::Extended(ext) => ext.validate()?,
                }
            }
        }

        Ok(())
    }

    fn known_cluster(&self, id: ClusterId) -> Result<&'static ClusterDef> {
        clusters::by_id(id).ok_or(QuirkError::UnknownCluster {
            quirk: self.name,
            cluster_id: id,
        })
    }
}

fn has_duplicate_endpoint(ids: impl Iterator<Item = EndpointId>) -> bool {
    let mut seen = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return true;
        }
        seen.push(id);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zcl::ZclType;

    const EXT_ATTRS: &[AttributeDef] = &[
        AttributeDef::mfg(0x4000, "vendor_mode", ZclType::Enum8),
        AttributeDef::mfg(0x4001, "vendor_level", ZclType::Uint8),
    ];

    const EXT: ClusterExtension =
        ClusterExtension::new("TestThermostat", &clusters::THERMOSTAT, EXT_ATTRS);

    #[test]
    fn test_extension_keeps_wire_id() {
        assert_eq!(EXT.cluster_id(), 0x0201);
    }

    #[test]
    fn test_merged_lookup() {
        // Vendor entry
        let attr = EXT.attribute(0x4000).unwrap();
        assert!(attr.manufacturer_specific);
        assert_eq!(attr.ty, ZclType::Enum8);

        // Inherited entry
        let attr = EXT.attribute(0x0000).unwrap();
        assert_eq!(attr.name, "local_temperature");
        assert!(!attr.manufacturer_specific);

        assert!(EXT.attribute(0x7777).is_none());
        assert_eq!(
            EXT.attributes().count(),
            EXT_ATTRS.len() + clusters::THERMOSTAT.attributes.len()
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_vendor_ids() {
        const DUP: &[AttributeDef] = &[
            AttributeDef::mfg(0x4000, "a", ZclType::Enum8),
            AttributeDef::mfg(0x4000, "b", ZclType::Enum8),
        ];
        let ext = ClusterExtension::new("Dup", &clusters::THERMOSTAT, DUP);
        assert!(matches!(
            ext.validate(),
            Err(QuirkError::DuplicateAttribute { attr_id: 0x4000, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inherited_collision() {
        // 0x0000 is local_temperature in the inherited table
        const SHADOW: &[AttributeDef] = &[AttributeDef::mfg(0x0000, "shadow", ZclType::Enum8)];
        let ext = ClusterExtension::new("Shadow", &clusters::THERMOSTAT, SHADOW);
        assert!(matches!(
            ext.validate(),
            Err(QuirkError::AttributeCollision { attr_id: 0x0000, .. })
        ));
    }

    const QUIRK: Quirk = Quirk {
        name: "test.quirk",
        signature: QuirkSignature {
            models: &[("ACME", "TH-1")],
            endpoints: &[(
                1,
                EndpointSignature {
                    profile_id: 0x0104,
                    device_type: 0x0301,
                    input_clusters: &[0x0000, 0x0201],
                    output_clusters: &[0x0019],
                },
            )],
        },
        replacement: &[(
            1,
            EndpointReplacement {
                profile_id: None,
                device_type: None,
                input_clusters: &[ClusterRef::Standard(0x0000), ClusterRef::Extended(&EXT)],
                output_clusters: &[ClusterRef::Standard(0x0019)],
            },
        )],
    };

    fn matching_device() -> DiscoveredDevice {
        DiscoveredDevice::new()
            .with_model("ACME", "TH-1")
            .with_endpoint(
                1,
                SimpleDescriptor {
                    profile_id: 0x0104,
                    device_type: 0x0301,
                    input_clusters: vec![0x0000, 0x0201],
                    output_clusters: vec![0x0019],
                },
            )
    }

    #[test]
    fn test_quirk_validates() {
        QUIRK.validate().unwrap();
    }

    #[test]
    fn test_matching_device_matches() {
        assert!(QUIRK.matches(&matching_device()));
    }

    #[test]
    fn test_model_info_is_required_when_declared() {
        let mut device = matching_device();
        device.model = Some("TH-2".to_string());
        assert!(!QUIRK.matches(&device));

        let mut device = matching_device();
        device.manufacturer = None;
        assert!(!QUIRK.matches(&device));
    }

    #[test]
    fn test_different_cluster_list_does_not_match() {
        let mut device = matching_device();
        device
            .endpoints
            .get_mut(&1)
            .unwrap()
            .input_clusters
            .push(0x0003);
        assert!(!QUIRK.matches(&device));

        let mut device = matching_device();
        device.endpoints.get_mut(&1).unwrap().input_clusters = vec![0x0201, 0x0000];
        assert!(!QUIRK.matches(&device), "order is significant");
    }

    #[test]
    fn test_apply_carries_over_profile_and_device_type() {
        let quirked = QUIRK.apply(&matching_device()).unwrap();
        let ep = &quirked.endpoints[&1];
        assert_eq!(ep.profile_id, 0x0104);
        assert_eq!(ep.device_type, 0x0301);
        assert_eq!(quirked.input_cluster_ids(1).unwrap(), vec![0x0000, 0x0201]);
        assert!(ep.input_clusters[1].is_extended());
    }

    #[test]
    fn test_apply_refuses_non_matching_device() {
        let mut device = matching_device();
        device.endpoints.get_mut(&1).unwrap().device_type = 0x0302;
        assert!(matches!(
            QUIRK.apply(&device),
            Err(QuirkError::NoMatch("test.quirk"))
        ));
    }

    #[test]
    fn test_validate_rejects_endpoint_set_mismatch() {
        const LOPSIDED: Quirk = Quirk {
            name: "test.lopsided",
            signature: QuirkSignature {
                models: &[],
                endpoints: &[(
                    1,
                    EndpointSignature {
                        profile_id: 0x0104,
                        device_type: 0x0301,
                        input_clusters: &[0x0000],
                        output_clusters: &[],
                    },
                )],
            },
            replacement: &[(
                2,
                EndpointReplacement {
                    profile_id: None,
                    device_type: None,
                    input_clusters: &[ClusterRef::Standard(0x0000)],
                    output_clusters: &[],
                },
            )],
        };
        assert!(matches!(
            LOPSIDED.validate(),
            Err(QuirkError::EndpointSetMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_replacement_endpoints() {
        // Endpoint 1 listed twice: the lengths line up with the signature's
        // {1, 2}, but endpoint 2 would silently lose its replacement.
        const SIG_EP: EndpointSignature = EndpointSignature {
            profile_id: 0x0104,
            device_type: 0x0301,
            input_clusters: &[0x0000],
            output_clusters: &[],
        };
        const REPL_EP: EndpointReplacement = EndpointReplacement {
            profile_id: None,
            device_type: None,
            input_clusters: &[ClusterRef::Standard(0x0000)],
            output_clusters: &[],
        };
        const DOUBLED: Quirk = Quirk {
            name: "test.doubled",
            signature: QuirkSignature {
                models: &[],
                endpoints: &[(1, SIG_EP), (2, SIG_EP)],
            },
            replacement: &[(1, REPL_EP), (1, REPL_EP)],
        };
        assert!(matches!(
            DOUBLED.validate(),
            Err(QuirkError::EndpointSetMismatch { .. })
        ));

        const DOUBLED_SIG: Quirk = Quirk {
            name: "test.doubled_sig",
            signature: QuirkSignature {
                models: &[],
                endpoints: &[(1, SIG_EP), (1, SIG_EP)],
            },
            replacement: &[(1, REPL_EP), (2, REPL_EP)],
        };
        assert!(matches!(
            DOUBLED_SIG.validate(),
            Err(QuirkError::EndpointSetMismatch { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_cluster() {
        const BOGUS: Quirk = Quirk {
            name: "test.bogus",
            signature: QuirkSignature {
                models: &[],
                endpoints: &[(
                    1,
                    EndpointSignature {
                        profile_id: 0x0104,
                        device_type: 0x0301,
                        input_clusters: &[0xBEEF],
                        output_clusters: &[],
                    },
                )],
            },
            replacement: &[(
                1,
                EndpointReplacement {
                    profile_id: None,
                    device_type: None,
                    input_clusters: &[ClusterRef::Standard(0xBEEF)],
                    output_clusters: &[],
                },
            )],
        };
        assert!(matches!(
            BOGUS.validate(),
            Err(QuirkError::UnknownCluster {
                cluster_id: 0xBEEF,
                ..
            })
        ));
    }
}
