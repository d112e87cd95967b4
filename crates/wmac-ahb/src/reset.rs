//! Variant-specific hardware reset protocols.
//!
//! Different silicon generations need the WMAC quiesced with respect to the
//! memory bus before reset, expose a busy/ack handshake after it, or need
//! nothing more than a timed pulse. [`run`] dispatches on the descriptor's
//! [`ResetOp`] so the orchestrator stays variant-agnostic.

use wmac_hal::{DelaySource, ProbeError, SocControl};

use crate::variant::{ResetOp, VariantDescriptor};

/// Settle delay on each edge of a plain reset pulse, in microseconds.
pub const PULSE_SETTLE_US: u32 = 10_000;
/// Maximum number of busy-bit polls after a polling reset pulse.
pub const RESET_POLL_LIMIT: u32 = 20;
/// Interval between busy-bit polls, in microseconds.
pub const RESET_POLL_INTERVAL_US: u32 = 10_000;
/// Maximum number of DDR activity polls before the drain variant's pulse.
pub const DDR_DRAIN_LIMIT: u32 = 10;
/// Interval between DDR activity polls, in microseconds.
pub const DDR_DRAIN_INTERVAL_US: u32 = 10;
/// Settle delay on each edge of the drain variant's pulse, in microseconds.
pub const DDR_PULSE_SETTLE_US: u32 = 10;

/// Runs the variant's reset protocol.
///
/// Worst-case blocking time is bounded: 20 polls at 10 ms for the polling
/// variant. The DDR drain wait is best effort; the pulse proceeds whether
/// or not the activity bit cleared.
///
/// # Errors
///
/// [`ProbeError::ResetTimeout`] if the polling variant's busy bit never
/// clears within the poll limit.
pub fn run(
    descriptor: &VariantDescriptor,
    soc: &dyn SocControl,
    delay: &dyn DelaySource,
) -> Result<(), ProbeError> {
    match descriptor.reset {
        ResetOp::None => Ok(()),
        ResetOp::Pulse { mask } => {
            soc.reset_assert(mask);
            delay.delay_us(PULSE_SETTLE_US);
            soc.reset_deassert(mask);
            delay.delay_us(PULSE_SETTLE_US);
            Ok(())
        }
        ResetOp::PollingPulse {
            mask,
            status_reg,
            busy_mask,
        } => {
            soc.reset_assert(mask);
            soc.reset_deassert(mask);

            for attempt in 0..RESET_POLL_LIMIT {
                if soc.read_reset_reg(status_reg) & busy_mask == 0 {
                    return Ok(());
                }
                if attempt + 1 < RESET_POLL_LIMIT {
                    delay.delay_us(RESET_POLL_INTERVAL_US);
                }
            }
            Err(ProbeError::ResetTimeout)
        }
        ResetOp::DdrDrainPulse {
            mask,
            ddr_reg,
            activity_mask,
        } => {
            // Wait for WMAC DDR activity to stop. Best effort: proceed
            // even if the bit never clears.
            for _ in 0..DDR_DRAIN_LIMIT {
                if soc.read_ddr_reg(ddr_reg) & activity_mask == 0 {
                    break;
                }
                delay.delay_us(DDR_DRAIN_INTERVAL_US);
            }

            soc.reset_assert(mask);
            delay.delay_us(DDR_PULSE_SETTLE_US);
            soc.reset_deassert(mask);
            delay.delay_us(DDR_PULSE_SETTLE_US);
            Ok(())
        }
    }
}
