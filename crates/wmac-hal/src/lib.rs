//! Collaborator traits and shared types for the WMAC AHB bring-up engine.
//!
//! Defines the boundary the probe engine is written against:
//!
//! - **Resources** ([`MmioMapping`], [`IrqClaim`], [`DeviceToken`]) —
//!   exclusive claims handed out by the platform subsystems.
//! - **Collaborators** ([`SocControl`], [`DelaySource`], [`MmioMapper`],
//!   [`IrqSubsystem`], [`BlobStore`], [`ConfigSource`], [`DeviceInit`]) —
//!   trait interfaces for the subsystems the engine drives but does not own.
//! - **Errors** ([`ProbeError`] and friends) — the probe error taxonomy.
//! - **Logging** — the [`wlog!`] macro family with a pluggable sink.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod hw;
pub mod log;
pub mod resource;

pub use error::{AcquireError, CalibrationError, DeviceInitError, ProbeError};
pub use hw::{
    BlobStore, ConfigSource, DelaySource, DeviceInit, IrqSubsystem, MmioMapper, SocControl,
};
pub use resource::{DeviceToken, IrqClaim, MmioMapping};
