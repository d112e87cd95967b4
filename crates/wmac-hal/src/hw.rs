//! Collaborator traits at the probe engine's boundary.
//!
//! These traits define portable interfaces for the subsystems the engine
//! drives but does not own: the SoC reset block, bounded delays, register
//! mapping, interrupt claims, the calibration blob store, the device-tree
//! property bag, and the radio/MAC device-init routine. Implementations
//! live in platform code; tests substitute recording fakes.

use crate::error::{AcquireError, CalibrationError, DeviceInitError};
use crate::resource::{DeviceToken, IrqClaim, MmioMapping};

/// Ordered register access to the SoC reset block.
///
/// All accesses are ordered memory operations; implementations must not
/// reorder them across calls (the reset protocols depend on it).
pub trait SocControl: Send + Sync {
    /// Asserts the reset lines selected by `mask`.
    fn reset_assert(&self, mask: u32);

    /// Deasserts the reset lines selected by `mask`.
    fn reset_deassert(&self, mask: u32);

    /// Reads a register in the reset block at the given byte offset.
    fn read_reset_reg(&self, offset: u32) -> u32;

    /// Reads a register in the DDR controller block at the given byte offset.
    fn read_ddr_reg(&self, offset: u32) -> u32;

    /// Returns the SoC revision number.
    fn soc_revision(&self) -> u32;
}

/// A source of bounded, blocking delays.
pub trait DelaySource: Send + Sync {
    /// Blocks the calling thread for at least `us` microseconds.
    fn delay_us(&self, us: u32);
}

/// Maps physical register ranges into addressable windows.
pub trait MmioMapper: Send + Sync {
    /// Maps the physical range `[phys_base, phys_base + size)`.
    fn map(&self, phys_base: u64, size: u64) -> Result<MmioMapping, AcquireError>;

    /// Unmaps a window previously returned by [`map`](Self::map).
    fn unmap(&self, mapping: MmioMapping);
}

/// Claims and releases interrupt lines.
pub trait IrqSubsystem: Send + Sync {
    /// Claims the given interrupt line. `shared` requests a shared claim.
    ///
    /// The implementation binds the device's interrupt handler as part of
    /// granting the claim; handler bodies live in platform code, outside
    /// this boundary.
    fn claim(&self, line: u32, shared: bool) -> Result<IrqClaim, AcquireError>;

    /// Releases a claim previously returned by [`claim`](Self::claim).
    fn release(&self, claim: IrqClaim);
}

/// Read access to externally stored calibration blobs.
pub trait BlobStore: Send + Sync {
    /// Resolves a configuration reference to a blob handle.
    ///
    /// Returns `None` if no blob is labeled with the reference.
    fn lookup(&self, reference: u32) -> Option<u32>;

    /// Reads `buf.len()` bytes from the blob at the given byte offset.
    fn read(&self, handle: u32, offset: u32, buf: &mut [u8]) -> Result<(), CalibrationError>;
}

/// Typed property reads from the device's configuration node.
///
/// Absence is the default everywhere: a missing `u8` property yields
/// `None`, a missing boolean yields `false`.
pub trait ConfigSource {
    /// Reads a single-byte property.
    fn read_u8(&self, key: &str) -> Option<u8>;

    /// Reads a boolean property; absent means `false`.
    fn read_bool(&self, key: &str) -> bool;

    /// Reads a cell-array property, if present.
    fn read_u32s(&self, key: &str) -> Option<&[u32]>;
}

/// The radio/MAC device-init collaborator.
///
/// The engine calls [`init`](Self::init) only once every resource is
/// acquired, and owns the [`deinit`](Self::deinit) symmetry on remove.
pub trait DeviceInit: Send + Sync {
    /// Initializes the device identified by `dev_id` on the given register
    /// window and interrupt line.
    fn init(
        &self,
        dev_id: u16,
        mmio: &MmioMapping,
        irq: &IrqClaim,
    ) -> Result<DeviceToken, DeviceInitError>;

    /// Tears down a device context previously returned by [`init`](Self::init).
    fn deinit(&self, token: DeviceToken);
}
