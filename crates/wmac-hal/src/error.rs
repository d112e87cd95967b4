//! Error taxonomy for the probe engine.
//!
//! Only [`CalibrationError`] is recoverable: the orchestrator degrades to a
//! zero-filled calibration buffer and keeps going. Every other error is
//! fatal to the probe and is reported upward verbatim after rollback.

use core::fmt;

/// Errors that can abort a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// No variant descriptor exists for the device-identity key.
    UnknownDevice,
    /// The hardware did not acknowledge reset within the polling bound.
    ResetTimeout,
    /// A resource subsystem refused an acquisition.
    Acquire(AcquireError),
    /// The device-init collaborator refused the device.
    DeviceInit(DeviceInitError),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDevice => f.write_str("unknown device"),
            Self::ResetTimeout => f.write_str("WMAC reset timed out"),
            Self::Acquire(e) => write!(f, "resource acquisition failed: {e}"),
            Self::DeviceInit(e) => write!(f, "device init failed: {e}"),
        }
    }
}

impl From<AcquireError> for ProbeError {
    fn from(e: AcquireError) -> Self {
        Self::Acquire(e)
    }
}

impl From<DeviceInitError> for ProbeError {
    fn from(e: DeviceInitError) -> Self {
        Self::DeviceInit(e)
    }
}

/// Errors returned by the resource subsystems during acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireError {
    /// The device reported no register-space memory range.
    NoMemoryRange,
    /// Mapping the register space failed.
    MapFailed,
    /// The interrupt line is invalid for this platform.
    IrqInvalid,
    /// The interrupt line could not be claimed.
    IrqBusy,
    /// The subsystem is out of memory.
    OutOfMemory,
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMemoryRange => f.write_str("no memory resource found"),
            Self::MapFailed => f.write_str("register-space mapping failed"),
            Self::IrqInvalid => f.write_str("invalid interrupt line"),
            Self::IrqBusy => f.write_str("interrupt line unavailable"),
            Self::OutOfMemory => f.write_str("out of memory"),
        }
    }
}

/// Errors returned by the device-init collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceInitError {
    /// The collaborator could not allocate its device context.
    NoMemory,
    /// Hardware initialization inside the collaborator failed.
    HwInitFailed,
    /// The device id is not supported by the collaborator.
    Unsupported,
}

impl fmt::Display for DeviceInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMemory => f.write_str("no memory for device context"),
            Self::HwInitFailed => f.write_str("hardware initialization failed"),
            Self::Unsupported => f.write_str("unsupported device id"),
        }
    }
}

/// Errors surfaced by the calibration loader.
///
/// Non-fatal by policy: a failed load leaves the calibration buffer zeroed
/// and the probe continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationError {
    /// The configured blob reference has the wrong shape.
    BadReference,
    /// The reference did not resolve to a blob-store handle.
    MissingTarget,
    /// Reading the calibration bytes from the blob store failed.
    ReadFailed,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadReference => f.write_str("malformed calibration data reference"),
            Self::MissingTarget => f.write_str("calibration blob target not found"),
            Self::ReadFailed => f.write_str("calibration blob read failed"),
        }
    }
}
