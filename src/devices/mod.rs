//! Built-in device quirks, grouped by manufacturer.

use crate::quirk::Quirk;

pub mod bosch;

/// Every quirk this crate ships. `QuirkRegistry::builtin()` registers these.
pub const ALL: &[&Quirk] = &[&bosch::rbsh_rth0_zb_eu::QUIRK];
