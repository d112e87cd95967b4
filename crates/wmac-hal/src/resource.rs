//! Resource claim types representing exclusive holds on a register-space
//! mapping, an interrupt line, and an initialized device context.

/// An exclusive claim on a memory-mapped register window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MmioMapping {
    phys_base: u64,
    virt_base: u64,
    size: u64,
}

impl MmioMapping {
    /// Creates a new register-window descriptor.
    ///
    /// # Safety
    ///
    /// The caller must ensure that:
    /// - `phys_base` and `virt_base` refer to the same physical region.
    /// - The region is not claimed by another driver.
    /// - The mapping stays valid until handed back to the mapper.
    #[must_use]
    pub const unsafe fn new(phys_base: u64, virt_base: u64, size: u64) -> Self {
        Self {
            phys_base,
            virt_base,
            size,
        }
    }

    /// Returns the physical base address.
    #[must_use]
    pub const fn phys_base(&self) -> u64 {
        self.phys_base
    }

    /// Returns the virtual base address.
    #[must_use]
    pub const fn virt_base(&self) -> u64 {
        self.virt_base
    }

    /// Returns the size of the window in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns `true` if `offset` lies within the window.
    #[must_use]
    pub const fn contains_offset(&self, offset: u64) -> bool {
        offset < self.size
    }
}

/// An exclusive claim on an interrupt request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqClaim {
    line: u32,
}

impl IrqClaim {
    /// Creates a new interrupt-line claim.
    ///
    /// # Safety
    ///
    /// The caller must ensure the line number is valid and the claim was
    /// granted by the interrupt subsystem.
    #[must_use]
    pub const unsafe fn new(line: u32) -> Self {
        Self { line }
    }

    /// Returns the interrupt line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// An opaque handle to a device context created by the device-init
/// collaborator. Returned from `init` and consumed by `deinit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceToken {
    id: u32,
}

impl DeviceToken {
    /// Creates a token wrapping a collaborator-assigned context id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Returns the raw context id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmio_mapping_basics() {
        // SAFETY: test-only, no real hardware.
        let m = unsafe { MmioMapping::new(0x1806_0000, 0xffff_1000, 0x2_0000) };
        assert_eq!(m.phys_base(), 0x1806_0000);
        assert_eq!(m.virt_base(), 0xffff_1000);
        assert_eq!(m.size(), 0x2_0000);
    }

    #[test]
    fn mmio_mapping_contains_offset() {
        let m = unsafe { MmioMapping::new(0x1806_0000, 0xffff_1000, 0x100) };
        assert!(m.contains_offset(0));
        assert!(m.contains_offset(0xff));
        assert!(!m.contains_offset(0x100));
    }

    #[test]
    fn irq_claim_line() {
        // SAFETY: test-only, no real hardware.
        let irq = unsafe { IrqClaim::new(2) };
        assert_eq!(irq.line(), 2);
    }

    #[test]
    fn device_token_id() {
        let tok = DeviceToken::new(7);
        assert_eq!(tok.id(), 7);
    }
}
