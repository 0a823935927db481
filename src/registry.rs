//! Quirk registry.
//!
//! Holds the quirks the coordinator knows about and answers "which quirk, if
//! any, applies to this freshly discovered device". Registration validates
//! each quirk's internal consistency so that a malformed descriptor fails at
//! startup rather than at pairing time.

use log::{debug, info};

use crate::devices;
use crate::error::{QuirkError, Result};
use crate::quirk::{DiscoveredDevice, Quirk};

#[derive(Debug, Default)]
pub struct QuirkRegistry {
    quirks: Vec<&'static Quirk>,
}

impl QuirkRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with every quirk this crate ships.
    ///
    /// Built-in quirks are validated by tests, so registration here cannot
    /// fail at runtime.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for quirk in devices::ALL.iter().copied() {
            // Built-in descriptors are validated by their own tests; a
            // rejection here is a bug in this crate, not a runtime condition.
            registry
                .register(quirk)
                .unwrap_or_else(|e| panic!("built-in quirk {} rejected: {e}", quirk.name));
        }
        registry
    }

    /// Validate and add a quirk.
    pub fn register(&mut self, quirk: &'static Quirk) -> Result<()> {
        if self.get(quirk.name).is_some() {
            return Err(QuirkError::DuplicateQuirk(quirk.name));
        }
        quirk.validate()?;
        debug!("Registered quirk {}", quirk.name);
        self.quirks.push(quirk);
        Ok(())
    }

    /// All registered quirks, in registration order.
    pub fn quirks(&self) -> &[&'static Quirk] {
        &self.quirks
    }

    /// Look up a quirk by name.
    pub fn get(&self, name: &str) -> Option<&'static Quirk> {
        self.quirks.iter().copied().find(|q| q.name == name)
    }

    /// Find the first quirk whose signature the device reports.
    pub fn match_device(&self, device: &DiscoveredDevice) -> Option<&'static Quirk> {
        for quirk in &self.quirks {
            debug!(
                "Checking {:?}/{:?} against quirk {}",
                device.manufacturer, device.model, quirk.name
            );
            if quirk.matches(device) {
                info!(
                    "Device {:?}/{:?} matched quirk {}",
                    device.manufacturer, device.model, quirk.name
                );
                return Some(quirk);
            }
        }
        debug!(
            "No quirk matched {:?}/{:?}",
            device.manufacturer, device.model
        );
        None
    }
}
