//! Static descriptors for the supported WMAC variants.
//!
//! Each SoC generation needs its own reset protocol, bootstrap-clock
//! detection and revision quirk. The [`VARIANTS`] table is read-only
//! process-wide data; the probe orchestrator looks a descriptor up once
//! and dispatches on its fields, staying variant-agnostic itself.

use wmac_hal::SocControl;

use crate::regs;

/// The hardware reset protocol a variant requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOp {
    /// No reset line to touch.
    None,
    /// Assert the line, settle 10 ms, deassert, settle 10 ms again.
    Pulse {
        /// Reset-line mask in the module-reset register.
        mask: u32,
    },
    /// Pulse the line, then poll a status register until a busy bit clears.
    PollingPulse {
        /// Reset-line mask in the module-reset register.
        mask: u32,
        /// Byte offset of the polled status register.
        status_reg: u32,
        /// Busy bit that must clear before the reset counts as done.
        busy_mask: u32,
    },
    /// Wait for memory-controller activity to drain (best effort), then
    /// pulse the line with short settle delays.
    DdrDrainPulse {
        /// Reset-line mask in the module-reset register.
        mask: u32,
        /// Byte offset of the DDR activity register.
        ddr_reg: u32,
        /// Activity bit that should clear before the pulse.
        activity_mask: u32,
    },
}

/// How a variant's MAC revision is derived from the SoC revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionOp {
    /// Variant carries no usable revision information.
    None,
    /// Report the SoC revision as-is.
    SocRev,
    /// Report the SoC revision only when it equals `only`, else 0.
    /// (AR9330 silicon: only revision 1 is distinguishable.)
    SocRevGated {
        /// The single revision value that is passed through.
        only: u32,
    },
}

impl RevisionOp {
    /// Resolves the MAC revision against the SoC, if applicable.
    #[must_use]
    pub fn resolve(&self, soc: &dyn SocControl) -> Option<u32> {
        match self {
            Self::None => None,
            Self::SocRev => Some(soc.soc_revision()),
            Self::SocRevGated { only } => {
                let rev = soc.soc_revision();
                Some(if rev == *only { rev } else { 0 })
            }
        }
    }
}

/// Immutable per-variant configuration.
///
/// Exactly one descriptor exists per supported device-identity key; the
/// table never changes after process start.
#[derive(Debug)]
pub struct VariantDescriptor {
    /// Numeric device id handed to the device-init collaborator.
    pub dev_id: u16,
    /// Device-tree compatible string this descriptor matches.
    pub compatible: &'static str,
    /// Bootstrap register offset; 0 means no detectable bootstrap clock.
    pub bootstrap_reg: u32,
    /// Reference-clock bit in the bootstrap register.
    pub bootstrap_ref: u32,
    /// Revision-detection operation.
    pub revision: RevisionOp,
    /// Hardware reset operation.
    pub reset: ResetOp,
}

/// All supported variants, one entry per compatible string.
pub static VARIANTS: &[VariantDescriptor] = &[
    VariantDescriptor {
        dev_id: regs::AR5416_AR9100_DEVID,
        compatible: "qca,ar9130-wmac",
        bootstrap_reg: 0,
        bootstrap_ref: 0,
        revision: RevisionOp::None,
        reset: ResetOp::Pulse {
            mask: regs::AR913X_RESET_AMBA2WMAC,
        },
    },
    VariantDescriptor {
        dev_id: regs::AR9300_DEVID_AR9330,
        compatible: "qca,ar9330-wmac",
        bootstrap_reg: regs::AR933X_RESET_REG_BOOTSTRAP,
        bootstrap_ref: regs::AR933X_BOOTSTRAP_REF_CLK_40,
        revision: RevisionOp::SocRevGated { only: 1 },
        reset: ResetOp::PollingPulse {
            mask: regs::AR933X_RESET_WMAC,
            status_reg: regs::AR933X_RESET_REG_BOOTSTRAP,
            busy_mask: regs::AR933X_BOOTSTRAP_EEPBUSY,
        },
    },
    VariantDescriptor {
        dev_id: regs::AR9300_DEVID_AR9340,
        compatible: "qca,ar9340-wmac",
        bootstrap_reg: regs::AR934X_RESET_REG_BOOTSTRAP,
        bootstrap_ref: regs::AR934X_BOOTSTRAP_REF_CLK_40,
        revision: RevisionOp::SocRev,
        reset: ResetOp::None,
    },
    VariantDescriptor {
        dev_id: regs::AR9300_DEVID_AR953X,
        compatible: "qca,qca9530-wmac",
        bootstrap_reg: regs::QCA953X_RESET_REG_BOOTSTRAP,
        bootstrap_ref: regs::QCA953X_BOOTSTRAP_REF_CLK_40,
        revision: RevisionOp::SocRev,
        reset: ResetOp::None,
    },
    VariantDescriptor {
        dev_id: regs::AR9300_DEVID_QCA955X,
        compatible: "qca,qca9550-wmac",
        bootstrap_reg: regs::QCA955X_RESET_REG_BOOTSTRAP,
        bootstrap_ref: regs::QCA955X_BOOTSTRAP_REF_CLK_40,
        revision: RevisionOp::None,
        reset: ResetOp::DdrDrainPulse {
            mask: regs::QCA955X_RESET_RTC,
            ddr_reg: regs::QCA955X_DDR_CTL_CONFIG,
            activity_mask: regs::QCA955X_DDR_CTL_CONFIG_ACT_WMAC,
        },
    },
    VariantDescriptor {
        dev_id: regs::AR9300_DEVID_QCA956X,
        compatible: "qca,qca9560-wmac",
        bootstrap_reg: regs::QCA956X_RESET_REG_BOOTSTRAP,
        bootstrap_ref: regs::QCA956X_BOOTSTRAP_REF_CLK_40,
        revision: RevisionOp::SocRev,
        reset: ResetOp::None,
    },
];

/// Looks up the descriptor for a compatible string.
#[must_use]
pub fn lookup(compatible: &str) -> Option<&'static VariantDescriptor> {
    VARIANTS.iter().find(|v| v.compatible == compatible)
}

/// Looks up the descriptor for a numeric device id.
#[must_use]
pub fn lookup_by_id(dev_id: u16) -> Option<&'static VariantDescriptor> {
    VARIANTS.iter().find(|v| v.dev_id == dev_id)
}
