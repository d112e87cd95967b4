//! Register and bit definitions for the ath79-family reset block.
//!
//! Offsets are relative to the SoC reset-controller base and are accessed
//! through the [`SocControl`](wmac_hal::SocControl) collaborator; this crate
//! never touches them directly.

/// AR9130-generation device id.
pub const AR5416_AR9100_DEVID: u16 = 0x000b;
/// AR9330/AR9331 device id.
pub const AR9300_DEVID_AR9330: u16 = 0x0130;
/// AR9340 device id.
pub const AR9300_DEVID_AR9340: u16 = 0x0300;
/// QCA9550/QCA9558 device id.
pub const AR9300_DEVID_QCA955X: u16 = 0x0038;
/// QCA9530 device id.
pub const AR9300_DEVID_AR953X: u16 = 0x003d;
/// QCA9560 device id.
pub const AR9300_DEVID_QCA956X: u16 = 0x003f;

// Reset-line masks in the reset controller's module-reset register.

/// AR913X: AMBA-to-WMAC bridge reset line.
pub const AR913X_RESET_AMBA2WMAC: u32 = 1 << 22;
/// AR933X: WMAC reset line.
pub const AR933X_RESET_WMAC: u32 = 1 << 11;
/// QCA955X: RTC reset line (quiesces the WMAC).
pub const QCA955X_RESET_RTC: u32 = 1 << 27;

// Bootstrap registers (byte offsets in the reset block) and their
// reference-clock bits. A set REF_CLK_40 bit means the board runs the
// 40 MHz reference; clear means 25 MHz.

/// AR933X bootstrap register offset.
pub const AR933X_RESET_REG_BOOTSTRAP: u32 = 0xac;
/// AR934X bootstrap register offset.
pub const AR934X_RESET_REG_BOOTSTRAP: u32 = 0xb0;
/// QCA953X bootstrap register offset.
pub const QCA953X_RESET_REG_BOOTSTRAP: u32 = 0xb0;
/// QCA955X bootstrap register offset.
pub const QCA955X_RESET_REG_BOOTSTRAP: u32 = 0xb0;
/// QCA956X bootstrap register offset.
pub const QCA956X_RESET_REG_BOOTSTRAP: u32 = 0xb0;

/// AR933X: 40 MHz reference clock strap.
pub const AR933X_BOOTSTRAP_REF_CLK_40: u32 = 1 << 0;
/// AR933X: EEPROM-busy bit, polled after the WMAC reset pulse.
pub const AR933X_BOOTSTRAP_EEPBUSY: u32 = 1 << 4;
/// AR934X: 40 MHz reference clock strap.
pub const AR934X_BOOTSTRAP_REF_CLK_40: u32 = 1 << 4;
/// QCA953X: 40 MHz reference clock strap.
pub const QCA953X_BOOTSTRAP_REF_CLK_40: u32 = 1 << 4;
/// QCA955X: 40 MHz reference clock strap.
pub const QCA955X_BOOTSTRAP_REF_CLK_40: u32 = 1 << 4;
/// QCA956X: 40 MHz reference clock strap.
pub const QCA956X_BOOTSTRAP_REF_CLK_40: u32 = 1 << 2;

// DDR controller registers (byte offsets in the DDR block).

/// QCA955X DDR controller configuration register offset.
pub const QCA955X_DDR_CTL_CONFIG: u32 = 0x108;
/// QCA955X: WMAC activity bit in `DDR_CTL_CONFIG`.
pub const QCA955X_DDR_CTL_CONFIG_ACT_WMAC: u32 = 1 << 23;
