//! Reference-clock classification from the bootstrap register.

use wmac_hal::SocControl;

use crate::variant::VariantDescriptor;

/// Reference-clock classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    /// The board runs the 25 MHz reference clock.
    Clock25MHz,
    /// The board runs the 40 MHz reference clock.
    Clock40MHz,
    /// The variant has no detectable bootstrap clock.
    NotApplicable,
}

/// Classifies the reference clock for the given variant.
///
/// Variants without a bootstrap register are classified [`ClockKind::NotApplicable`]
/// with no register access. Otherwise the register is read exactly once:
/// a set reference-clock bit means 40 MHz, clear means 25 MHz.
#[must_use]
pub fn detect(descriptor: &VariantDescriptor, soc: &dyn SocControl) -> ClockKind {
    if descriptor.bootstrap_reg == 0 || descriptor.bootstrap_ref == 0 {
        return ClockKind::NotApplicable;
    }
    let strap = soc.read_reset_reg(descriptor.bootstrap_reg);
    if strap & descriptor.bootstrap_ref != 0 {
        ClockKind::Clock40MHz
    } else {
        ClockKind::Clock25MHz
    }
}
