//! Zigbee device quirks library.
//!
//! Some Zigbee devices expose vendor behavior through manufacturer-specific
//! attributes the standard cluster library knows nothing about, or report an
//! endpoint layout that has to be rewired before a coordinator can drive
//! them. A *quirk* is the declarative fix: extended attribute tables for the
//! affected clusters plus a signature/replacement pair that tells the
//! coordinator which discovered devices the fix applies to and what their
//! effective topology should be.
//!
//! This crate provides the metadata primitives, the quirk matching logic,
//! and the built-in quirk descriptors themselves. It deliberately contains
//! no protocol stack: attribute values, framing, and transport belong to the
//! hosting coordinator.

pub mod devices;
pub mod error;
pub mod quirk;
pub mod registry;
pub mod zcl;

pub use error::{QuirkError, Result};
pub use quirk::{DiscoveredDevice, Quirk, SimpleDescriptor};
pub use registry::QuirkRegistry;
