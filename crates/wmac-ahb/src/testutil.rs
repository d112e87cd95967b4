//! Recording fakes for the collaborator traits, shared by the unit tests.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use wmac_hal::{
    AcquireError, BlobStore, CalibrationError, ConfigSource, DelaySource, DeviceInit,
    DeviceInitError, DeviceToken, IrqClaim, IrqSubsystem, MmioMapper, MmioMapping, SocControl,
};

/// Never-busy sentinel for [`FakeSoc::busy_reads`].
pub const BUSY_FOREVER: u32 = u32::MAX;

/// One recorded collaborator interaction, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Reset line asserted with the given mask.
    Assert(u32),
    /// Reset line deasserted with the given mask.
    Deassert(u32),
    /// Reset-block register read at the given offset.
    ReadReset(u32),
    /// DDR-block register read at the given offset.
    ReadDdr(u32),
    /// Register window mapped.
    Map,
    /// Register window unmapped.
    Unmap,
    /// Interrupt line claimed.
    Claim(u32),
    /// Interrupt line released.
    Release(u32),
    /// Device-init collaborator invoked.
    Init(u16),
    /// Device context torn down.
    Deinit(u32),
}

/// Shared, ordered event log so release order can be asserted across fakes.
pub type Trace = Arc<Mutex<Vec<Event>>>;

/// Creates an empty shared trace.
pub fn trace() -> Trace {
    Arc::new(Mutex::new(Vec::new()))
}

/// Drains the trace into a plain vector.
pub fn events(trace: &Trace) -> Vec<Event> {
    trace.lock().unwrap().clone()
}

/// Fake SoC reset block.
///
/// `read_reset_reg` returns `bootstrap_value`, with `busy_mask` bits held
/// set for the first `busy_reads` reads (use [`BUSY_FOREVER`] for a bit
/// that never clears). `read_ddr_reg` keeps `activity_mask` set for the
/// first `ddr_active_reads` reads.
pub struct FakeSoc {
    trace: Trace,
    /// Value of the bootstrap register with all transient bits clear.
    pub bootstrap_value: u32,
    /// Busy bits ORed into reset-block reads while busy.
    pub busy_mask: u32,
    /// Number of reset-block reads that still see the busy bits.
    pub busy_reads: u32,
    /// Activity bits ORed into DDR reads while active.
    pub activity_mask: u32,
    /// Number of DDR reads that still see the activity bits.
    pub ddr_active_reads: u32,
    /// Reported SoC revision.
    pub revision: u32,
    reset_reads: AtomicU32,
    ddr_reads: AtomicU32,
}

impl FakeSoc {
    /// Creates a quiet SoC: nothing busy, bootstrap reads as zero.
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            bootstrap_value: 0,
            busy_mask: 0,
            busy_reads: 0,
            activity_mask: 0,
            ddr_active_reads: 0,
            revision: 0,
            reset_reads: AtomicU32::new(0),
            ddr_reads: AtomicU32::new(0),
        }
    }

    /// Number of reset-block reads performed so far.
    pub fn reset_read_count(&self) -> u32 {
        self.reset_reads.load(Ordering::SeqCst)
    }

    /// Number of DDR reads performed so far.
    pub fn ddr_read_count(&self) -> u32 {
        self.ddr_reads.load(Ordering::SeqCst)
    }
}

impl SocControl for FakeSoc {
    fn reset_assert(&self, mask: u32) {
        self.trace.lock().unwrap().push(Event::Assert(mask));
    }

    fn reset_deassert(&self, mask: u32) {
        self.trace.lock().unwrap().push(Event::Deassert(mask));
    }

    fn read_reset_reg(&self, offset: u32) -> u32 {
        let n = self.reset_reads.fetch_add(1, Ordering::SeqCst);
        self.trace.lock().unwrap().push(Event::ReadReset(offset));
        let mut value = self.bootstrap_value;
        if n < self.busy_reads {
            value |= self.busy_mask;
        }
        value
    }

    fn read_ddr_reg(&self, offset: u32) -> u32 {
        let n = self.ddr_reads.fetch_add(1, Ordering::SeqCst);
        self.trace.lock().unwrap().push(Event::ReadDdr(offset));
        if n < self.ddr_active_reads {
            self.activity_mask
        } else {
            0
        }
    }

    fn soc_revision(&self) -> u32 {
        self.revision
    }
}

/// Fake delay source that records every requested delay.
#[derive(Default)]
pub struct FakeDelay {
    delays: Mutex<Vec<u32>>,
}

impl FakeDelay {
    /// Creates a fake that sleeps for no time at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// All requested delays, in order, in microseconds.
    pub fn delays(&self) -> Vec<u32> {
        self.delays.lock().unwrap().clone()
    }

    /// Sum of requested delays in microseconds.
    pub fn total_us(&self) -> u64 {
        self.delays().iter().map(|&d| u64::from(d)).sum()
    }
}

impl DelaySource for FakeDelay {
    fn delay_us(&self, us: u32) {
        self.delays.lock().unwrap().push(us);
    }
}

/// Fake register-space mapper with optional failure injection.
pub struct FakeMapper {
    trace: Trace,
    /// When set, every `map` call fails.
    pub fail: bool,
}

impl FakeMapper {
    /// Creates a mapper that always succeeds.
    pub fn new(trace: Trace) -> Self {
        Self { trace, fail: false }
    }
}

impl MmioMapper for FakeMapper {
    fn map(&self, phys_base: u64, size: u64) -> Result<MmioMapping, AcquireError> {
        if self.fail {
            return Err(AcquireError::MapFailed);
        }
        self.trace.lock().unwrap().push(Event::Map);
        // SAFETY: test-only claim, no real hardware behind it.
        Ok(unsafe { MmioMapping::new(phys_base, phys_base, size) })
    }

    fn unmap(&self, _mapping: MmioMapping) {
        self.trace.lock().unwrap().push(Event::Unmap);
    }
}

/// Fake interrupt subsystem with optional failure injection.
pub struct FakeIrq {
    trace: Trace,
    /// When set, every `claim` call fails.
    pub fail: bool,
}

impl FakeIrq {
    /// Creates an interrupt subsystem that always grants claims.
    pub fn new(trace: Trace) -> Self {
        Self { trace, fail: false }
    }
}

impl IrqSubsystem for FakeIrq {
    fn claim(&self, line: u32, _shared: bool) -> Result<IrqClaim, AcquireError> {
        if self.fail {
            return Err(AcquireError::IrqBusy);
        }
        self.trace.lock().unwrap().push(Event::Claim(line));
        // SAFETY: test-only claim, no real hardware behind it.
        Ok(unsafe { IrqClaim::new(line) })
    }

    fn release(&self, claim: IrqClaim) {
        self.trace.lock().unwrap().push(Event::Release(claim.line()));
    }
}

/// Fake blob store holding a single labeled blob.
pub struct FakeBlobs {
    /// Reference that resolves; everything else misses.
    pub reference: u32,
    /// Handle returned for the known reference.
    pub handle: u32,
    /// Byte pattern the blob is filled with.
    pub fill: u8,
    /// When set, reads fail after a successful lookup.
    pub fail_read: bool,
}

impl FakeBlobs {
    /// Creates a store with one blob labeled `reference`.
    pub fn new(reference: u32) -> Self {
        Self {
            reference,
            handle: 1,
            fill: 0xa5,
            fail_read: false,
        }
    }
}

impl BlobStore for FakeBlobs {
    fn lookup(&self, reference: u32) -> Option<u32> {
        (reference == self.reference).then_some(self.handle)
    }

    fn read(&self, handle: u32, _offset: u32, buf: &mut [u8]) -> Result<(), CalibrationError> {
        if self.fail_read || handle != self.handle {
            return Err(CalibrationError::ReadFailed);
        }
        buf.fill(self.fill);
        Ok(())
    }
}

/// Fake property bag backed by static key/value slices.
#[derive(Default)]
pub struct FakeConfig {
    /// Single-byte properties.
    pub u8s: Vec<(&'static str, u8)>,
    /// Boolean properties that are present (true).
    pub bools: Vec<&'static str>,
    /// Cell-array properties.
    pub cells: Vec<(&'static str, Vec<u32>)>,
}

impl FakeConfig {
    /// Creates an empty property bag.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigSource for FakeConfig {
    fn read_u8(&self, key: &str) -> Option<u8> {
        self.u8s.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
    }

    fn read_bool(&self, key: &str) -> bool {
        self.bools.contains(&key)
    }

    fn read_u32s(&self, key: &str) -> Option<&[u32]> {
        self.cells
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_slice())
    }
}

/// Fake device-init collaborator with optional failure injection.
pub struct FakeDevice {
    trace: Trace,
    /// When set, `init` refuses the device with this error.
    pub refuse: Option<DeviceInitError>,
    next_token: AtomicU32,
}

impl FakeDevice {
    /// Creates a collaborator that accepts every device.
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            refuse: None,
            next_token: AtomicU32::new(1),
        }
    }
}

impl DeviceInit for FakeDevice {
    fn init(
        &self,
        dev_id: u16,
        _mmio: &MmioMapping,
        _irq: &IrqClaim,
    ) -> Result<DeviceToken, DeviceInitError> {
        if let Some(e) = self.refuse {
            return Err(e);
        }
        self.trace.lock().unwrap().push(Event::Init(dev_id));
        Ok(DeviceToken::new(self.next_token.fetch_add(1, Ordering::SeqCst)))
    }

    fn deinit(&self, token: DeviceToken) {
        self.trace.lock().unwrap().push(Event::Deinit(token.id()));
    }
}
