//! Reset, probe and teardown engine for SoC-integrated WMAC peripherals.
//!
//! Brings the wireless MAC of the supported ath79-family SoCs out of reset
//! and into an operable state, then tears it down cleanly. The hard part
//! is not radio initialization (the [`DeviceInit`](wmac_hal::DeviceInit)
//! collaborator owns that) but the machinery in front of it: dispatching
//! between incompatible reset/clock/revision protocols per variant,
//! running bounded register-polling sequences, and guaranteeing that every
//! acquired resource is released in strict reverse order on any failure
//! path.
//!
//! Entry points are [`probe::probe`] and [`probe::remove`]; everything
//! else supports them.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bootstrap;
pub mod calibration;
pub mod context;
pub mod probe;
pub mod regs;
pub mod reset;
pub mod variant;

#[cfg(test)]
mod testutil;

pub use bootstrap::ClockKind;
pub use calibration::{CAL_DATA_LEN, CalOutcome};
pub use context::{AcquiredResource, FeatureFlags, ProbeContext, ResourceSet};
pub use probe::{ActiveDevice, AhbDeviceInfo, BusServices, ProbeStage, probe, remove};
pub use variant::{ResetOp, RevisionOp, VariantDescriptor, lookup, lookup_by_id};
