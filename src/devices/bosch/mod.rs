//! Bosch device quirks.

pub mod rbsh_rth0_zb_eu;

/// Manufacturer string Bosch devices report in the Basic cluster.
pub const BOSCH: &str = "BOSCH";
