//! Per-probe mutable state and the acquired-resource ledger.
//!
//! A [`ProbeContext`] is created at probe entry, populated by each stage,
//! and either handed off whole on success or rolled back at the first
//! failure. The [`ResourceSet`] owns every resource the probe acquired and
//! releases them last-acquired-first; the release is idempotent and must
//! never fail, so a failed probe leaves the device entirely unclaimed.

use alloc::vec::Vec;

use bitflags::bitflags;
use wmac_hal::{DeviceInit, DeviceToken, IrqClaim, IrqSubsystem, MmioMapper, MmioMapping};

use crate::bootstrap::ClockKind;
use crate::calibration::CAL_DATA_LEN;
use crate::variant::VariantDescriptor;

bitflags! {
    /// Board-level feature switches read from the configuration node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FeatureFlags: u32 {
        /// The 2.4 GHz band is disabled on this board.
        const DISABLE_2GHZ = 1 << 0;
        /// The 5 GHz band is disabled on this board.
        const DISABLE_5GHZ = 1 << 1;
        /// Board uses the Buffalo tx-gain table variant.
        const TX_GAIN_BUFFALO = 1 << 2;
    }
}

/// One acquired resource, tagged by kind. Owns exactly one underlying
/// claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquiredResource {
    /// The device's register-space mapping.
    Mmio(MmioMapping),
    /// The device's interrupt line.
    Irq(IrqClaim),
    /// The initialized device context.
    Device(DeviceToken),
}

/// Ordered ledger of everything a probe has acquired.
#[derive(Debug, Default)]
pub struct ResourceSet {
    resources: Vec<AcquiredResource>,
}

impl ResourceSet {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resources: Vec::new(),
        }
    }

    /// Appends a freshly acquired resource.
    pub fn push(&mut self, resource: AcquiredResource) {
        self.resources.push(resource);
    }

    /// Number of resources currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Releases every held resource in strict reverse acquisition order.
    ///
    /// Idempotent: the set is drained as it is released, so calling this
    /// again (or on an empty set) does nothing.
    pub fn release_all(
        &mut self,
        mmio: &dyn MmioMapper,
        irq: &dyn IrqSubsystem,
        device: &dyn DeviceInit,
    ) {
        while let Some(resource) = self.resources.pop() {
            match resource {
                AcquiredResource::Mmio(mapping) => mmio.unmap(mapping),
                AcquiredResource::Irq(claim) => irq.release(claim),
                AcquiredResource::Device(token) => device.deinit(token),
            }
        }
    }
}

/// Mutable state owned by one in-flight probe.
#[derive(Debug)]
pub struct ProbeContext {
    /// The resolved variant descriptor.
    pub descriptor: &'static VariantDescriptor,
    /// Detected clock classification; `None` until detection runs.
    pub clock: Option<ClockKind>,
    /// MAC revision derived from the SoC revision, if the variant has one.
    pub mac_revision: Option<u32>,
    /// LED pin selection; `None` means unassigned.
    pub led_pin: Option<u8>,
    /// Board feature switches.
    pub features: FeatureFlags,
    /// Calibration bytes; zero-filled until (and unless) loaded.
    pub cal_data: [u8; CAL_DATA_LEN],
    /// Everything this probe has acquired, in acquisition order.
    pub resources: ResourceSet,
}

impl ProbeContext {
    /// Creates a fresh context for the given variant.
    #[must_use]
    pub fn new(descriptor: &'static VariantDescriptor) -> Self {
        Self {
            descriptor,
            clock: None,
            mac_revision: None,
            led_pin: None,
            features: FeatureFlags::empty(),
            cal_data: [0; CAL_DATA_LEN],
            resources: ResourceSet::new(),
        }
    }
}
