//! Discovered-device descriptions.
//!
//! Owned, serde-friendly form of what a freshly interviewed device reports:
//! model strings from the Basic cluster plus one simple descriptor per
//! endpoint. `quirk-inspect match` reads these from JSON dumps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::zcl::{ClusterId, DeviceTypeId, EndpointId, ProfileId};

/// One endpoint's simple descriptor, as reported over the air.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleDescriptor {
    pub profile_id: ProfileId,
    pub device_type: DeviceTypeId,
    #[serde(default)]
    pub input_clusters: Vec<ClusterId>,
    #[serde(default)]
    pub output_clusters: Vec<ClusterId>,
}

/// Everything the interview learned about a device that signature matching
/// cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    /// Manufacturer string from the Basic cluster, when the device reported one.
    #[serde(default)]
    pub manufacturer: Option<String>,

    /// Model identifier from the Basic cluster, when the device reported one.
    #[serde(default)]
    pub model: Option<String>,

    /// Simple descriptors keyed by endpoint number.
    #[serde(default)]
    pub endpoints: BTreeMap<EndpointId, SimpleDescriptor>,
}

impl DiscoveredDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reported manufacturer and model strings.
    pub fn with_model(mut self, manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self.model = Some(model.into());
        self
    }

    /// Add an endpoint's simple descriptor.
    pub fn with_endpoint(mut self, endpoint: EndpointId, descriptor: SimpleDescriptor) -> Self {
        self.endpoints.insert(endpoint, descriptor);
        self
    }
}
