//! HID protocol implementation for the Strawberry Linux USBRH
//! hygrometer/thermometer
//!
//! The USBRH carries a Sensirion SHT1x sensor behind a fixed-size HID
//! report interface:
//! - a zeroed output report triggers a measurement, answered by a 7-byte
//!   input report of raw big-endian sensor codes
//! - feature reports drive the two front LEDs and the sensor heater
//! - a 7-byte feature report carries the firmware build date
//!
//! Everything in this crate is pure: encoding, decoding and calibration.
//! I/O lives behind the `HidSession` trait in `usbrh-hid-common`.

#![deny(clippy::unwrap_used)]

pub mod calibration;
pub mod input;
pub mod output;
pub mod types;

pub use calibration::*;
pub use input::*;
pub use output::*;
pub use types::*;

use thiserror::Error;
use usbrh_hid_common::HidCommonError;

/// Errors returned by USBRH protocol operations.
#[derive(Error, Debug)]
pub enum UsbrhError {
    #[error("invalid report size: expected {expected}, got {actual}")]
    InvalidReportSize { expected: usize, actual: usize },

    #[error("malformed report: {0}")]
    Malformed(String),
}

/// Convenience result alias for USBRH protocol operations.
pub type UsbrhResult<T> = Result<T, UsbrhError>;

impl From<HidCommonError> for UsbrhError {
    fn from(e: HidCommonError) -> Self {
        UsbrhError::Malformed(e.to_string())
    }
}

/// Strawberry Linux USB Vendor ID (`0x1774`).
pub const VENDOR_ID: u16 = 0x1774;
/// Product ID for the USBRH hygrometer/thermometer.
pub const PRODUCT_ID: u16 = 0x1001;

/// The device uses unnumbered reports; the prefix byte is always zero.
pub const REPORT_ID: u8 = 0x00;

/// Sensor input report body, bytes.
pub const SENSOR_REPORT_LEN: usize = 7;
/// Firmware version feature report body, bytes.
pub const VERSION_REPORT_LEN: usize = 7;
/// Host-to-device reports on the wire: report-id prefix + 7 payload bytes.
pub const COMMAND_REPORT_LEN: usize = 8;

/// Upper bound on one sensor measurement round-trip.
pub const SENSOR_READ_TIMEOUT_MS: u32 = 5000;

/// Returns true when the identity pair is a USBRH device.
pub fn is_usbrh_device(vendor_id: u16, product_id: u16) -> bool {
    vendor_id == VENDOR_ID && product_id == PRODUCT_ID
}
