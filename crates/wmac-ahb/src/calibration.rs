//! Optional calibration-data retrieval from an external blob store.
//!
//! Boards may carry the radio calibration in a flash partition instead of
//! an on-device EEPROM. The configuration node then names a two-cell
//! reference: a link to the labeled blob plus a byte offset. Most variants
//! configure no reference at all, which is not an error; the probe carries
//! on with a zero-filled buffer either way.

use wmac_hal::{BlobStore, CalibrationError, ConfigSource};

/// Calibration buffer size in bytes (2116 16-bit EEPROM words).
pub const CAL_DATA_LEN: usize = 2116 * 2;

/// Property naming the calibration blob reference and byte offset.
pub const CAL_DATA_PROP: &str = "mtd-cal-data";

/// Result of a calibration load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalOutcome {
    /// Calibration bytes were read into the buffer.
    Loaded,
    /// No reference is configured; the buffer was left untouched.
    Absent,
}

/// Attempts to load calibration data into `buf`.
///
/// # Errors
///
/// [`CalibrationError::BadReference`] if the configured property does not
/// hold exactly two cells, [`CalibrationError::MissingTarget`] if the
/// reference does not resolve to a blob, [`CalibrationError::ReadFailed`]
/// if the blob read fails. All of these are non-fatal to the probe.
pub fn load(
    config: &dyn ConfigSource,
    blobs: &dyn BlobStore,
    buf: &mut [u8],
) -> Result<CalOutcome, CalibrationError> {
    let Some(cells) = config.read_u32s(CAL_DATA_PROP) else {
        return Ok(CalOutcome::Absent);
    };
    if cells.len() != 2 {
        return Err(CalibrationError::BadReference);
    }
    let (reference, offset) = (cells[0], cells[1]);
    if reference == 0 {
        return Err(CalibrationError::MissingTarget);
    }
    let handle = blobs
        .lookup(reference)
        .ok_or(CalibrationError::MissingTarget)?;
    blobs.read(handle, offset, buf)?;
    Ok(CalOutcome::Loaded)
}
