//! Probe orchestration: variant resolution through device-init handoff.
//!
//! [`probe`] drives the bring-up stages in a fixed order: resolve the
//! variant, read board properties, detect the reference clock, run the
//! hardware reset, attempt the (optional) calibration load, acquire
//! resources, and hand off to the device-init collaborator. A failure at
//! any stage releases everything acquired so far exactly once and reports
//! the error upward; only the calibration stage is recovered locally.

use core::fmt;

use wmac_hal::{
    AcquireError, BlobStore, ConfigSource, DelaySource, DeviceInit, IrqSubsystem, MmioMapper,
    ProbeError, SocControl, wdebug, werror, winfo, wwarn,
};

use crate::bootstrap;
use crate::calibration::{self, CalOutcome};
use crate::context::{AcquiredResource, FeatureFlags, ProbeContext};
use crate::reset;
use crate::variant;

/// LED pin selection property.
pub const LED_PIN_PROP: &str = "qca,led-pin";
/// 2.4 GHz band disable switch.
pub const DISABLE_2GHZ_PROP: &str = "qca,disable-2ghz";
/// 5 GHz band disable switch.
pub const DISABLE_5GHZ_PROP: &str = "qca,disable-5ghz";
/// Buffalo tx-gain table switch.
pub const TX_GAIN_BUFFALO_PROP: &str = "qca,tx-gain-buffalo";

/// The platform subsystems a probe runs against.
///
/// The bus layer constructs one of these per device before invoking
/// [`probe`]; tests substitute recording fakes.
pub struct BusServices<'a> {
    /// SoC reset block access.
    pub soc: &'a dyn SocControl,
    /// Bounded blocking delays.
    pub delay: &'a dyn DelaySource,
    /// Register-space mapping subsystem.
    pub mmio: &'a dyn MmioMapper,
    /// Interrupt subsystem.
    pub irq: &'a dyn IrqSubsystem,
    /// Calibration blob store.
    pub blobs: &'a dyn BlobStore,
    /// Radio/MAC device-init collaborator.
    pub device: &'a dyn DeviceInit,
}

/// What the bus enumeration layer discovered about one device instance.
#[derive(Debug, Clone)]
pub struct AhbDeviceInfo<'a> {
    /// Device-identity key (device-tree compatible string).
    pub compatible: &'a str,
    /// Physical base of the device's register space.
    pub mem_base: u64,
    /// Size of the register space in bytes; 0 means none was reported.
    pub mem_size: u64,
    /// The device's interrupt line.
    pub irq_line: u32,
}

/// The probe stage named in failure diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    /// Variant descriptor lookup.
    VariantLookup,
    /// Reference-clock detection. Infallible for the current variant
    /// table, so no failure diagnostic names it today.
    ClockDetect,
    /// Hardware reset protocol.
    Reset,
    /// Calibration load attempt.
    Calibration,
    /// Register-space, interrupt and context acquisition.
    AcquireResources,
    /// Handoff to the device-init collaborator.
    DeviceInit,
}

impl fmt::Display for ProbeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariantLookup => f.write_str("variant lookup"),
            Self::ClockDetect => f.write_str("clock detect"),
            Self::Reset => f.write_str("reset"),
            Self::Calibration => f.write_str("calibration"),
            Self::AcquireResources => f.write_str("acquire resources"),
            Self::DeviceInit => f.write_str("device init"),
        }
    }
}

/// A successfully probed device, holding its populated context and every
/// acquired resource until [`remove`] is called.
#[derive(Debug)]
pub struct ActiveDevice {
    /// The populated probe context.
    pub context: ProbeContext,
}

/// Rolls back `ctx`, emits the single failure diagnostic, and returns the
/// error for propagation. Every fatal path funnels through here so the
/// rollback runs exactly once.
fn fail(
    stage: ProbeStage,
    err: ProbeError,
    ctx: &mut ProbeContext,
    services: &BusServices<'_>,
) -> ProbeError {
    ctx.resources
        .release_all(services.mmio, services.irq, services.device);
    werror!("probe failed at {stage}: {err}");
    err
}

/// Probes one device instance and hands it off to the device-init
/// collaborator.
///
/// # Errors
///
/// [`ProbeError::UnknownDevice`] for an unsupported compatible string,
/// [`ProbeError::ResetTimeout`] if the variant's reset protocol times out,
/// [`ProbeError::Acquire`] / [`ProbeError::DeviceInit`] if a resource
/// subsystem or the collaborator refuses. In every failure case all
/// resources acquired by this probe have been released when this returns.
pub fn probe(
    info: &AhbDeviceInfo<'_>,
    config: &dyn ConfigSource,
    services: &BusServices<'_>,
) -> Result<ActiveDevice, ProbeError> {
    let Some(descriptor) = variant::lookup(info.compatible) else {
        werror!("probe failed at {}: {}", ProbeStage::VariantLookup, ProbeError::UnknownDevice);
        return Err(ProbeError::UnknownDevice);
    };
    let mut ctx = ProbeContext::new(descriptor);

    ctx.led_pin = config.read_u8(LED_PIN_PROP);
    if config.read_bool(DISABLE_2GHZ_PROP) {
        ctx.features |= FeatureFlags::DISABLE_2GHZ;
    }
    if config.read_bool(DISABLE_5GHZ_PROP) {
        ctx.features |= FeatureFlags::DISABLE_5GHZ;
    }
    if config.read_bool(TX_GAIN_BUFFALO_PROP) {
        ctx.features |= FeatureFlags::TX_GAIN_BUFFALO;
    }

    // Clock detection cannot fail; variants without a bootstrap register
    // classify as NotApplicable.
    ctx.clock = Some(bootstrap::detect(descriptor, services.soc));

    if let Err(e) = reset::run(descriptor, services.soc, services.delay) {
        return Err(fail(ProbeStage::Reset, e, &mut ctx, services));
    }

    ctx.mac_revision = descriptor.revision.resolve(services.soc);

    // Calibration is best effort: a load error degrades to the zero-filled
    // buffer and the probe continues.
    match calibration::load(config, services.blobs, &mut ctx.cal_data) {
        Ok(CalOutcome::Loaded) => wdebug!("{}: calibration data loaded", info.compatible),
        Ok(CalOutcome::Absent) => {}
        Err(e) => wwarn!("{} failed for {}: {e}", ProbeStage::Calibration, info.compatible),
    }

    if info.mem_size == 0 {
        return Err(fail(
            ProbeStage::AcquireResources,
            AcquireError::NoMemoryRange.into(),
            &mut ctx,
            services,
        ));
    }
    let mapping = match services.mmio.map(info.mem_base, info.mem_size) {
        Ok(m) => m,
        Err(e) => {
            return Err(fail(ProbeStage::AcquireResources, e.into(), &mut ctx, services));
        }
    };
    ctx.resources.push(AcquiredResource::Mmio(mapping));

    let claim = match services.irq.claim(info.irq_line, true) {
        Ok(c) => c,
        Err(e) => {
            return Err(fail(ProbeStage::AcquireResources, e.into(), &mut ctx, services));
        }
    };
    ctx.resources.push(AcquiredResource::Irq(claim));

    let token = match services.device.init(descriptor.dev_id, &mapping, &claim) {
        Ok(t) => t,
        Err(e) => {
            return Err(fail(ProbeStage::DeviceInit, e.into(), &mut ctx, services));
        }
    };
    ctx.resources.push(AcquiredResource::Device(token));

    winfo!(
        "{}: handed off, mem=0x{:x} irq={}",
        info.compatible,
        info.mem_base,
        info.irq_line
    );
    Ok(ActiveDevice { context: ctx })
}

/// Tears down a probed device: deinit the device context, release the
/// interrupt line, unmap the register space, in that order.
pub fn remove(mut device: ActiveDevice, services: &BusServices<'_>) {
    device
        .context
        .resources
        .release_all(services.mmio, services.irq, services.device);
}
