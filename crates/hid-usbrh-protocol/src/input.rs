//! Input and feature report parsing for the USBRH

use super::{UsbrhError, UsbrhResult, SENSOR_REPORT_LEN, VERSION_REPORT_LEN};
use usbrh_hid_common::ReportParser;

/// One raw sensor measurement: two big-endian code pairs plus reserved
/// passthrough bytes. Immutable snapshot of a single read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    pub humidity_msb: u8,
    pub humidity_lsb: u8,
    pub temperature_msb: u8,
    pub temperature_lsb: u8,
    /// Carried through unexamined; the device defines no meaning for them.
    pub reserved: [u8; 3],
}

impl SensorReading {
    /// Parse a sensor input report. The body must be exactly
    /// `SENSOR_REPORT_LEN` bytes; anything else is a failed read, never a
    /// partial decode.
    pub fn parse(data: &[u8]) -> UsbrhResult<Self> {
        if data.len() != SENSOR_REPORT_LEN {
            return Err(UsbrhError::InvalidReportSize {
                expected: SENSOR_REPORT_LEN,
                actual: data.len(),
            });
        }

        let mut parser = ReportParser::from_slice(data);
        Ok(Self {
            humidity_msb: parser.read_u8()?,
            humidity_lsb: parser.read_u8()?,
            temperature_msb: parser.read_u8()?,
            temperature_lsb: parser.read_u8()?,
            reserved: [parser.read_u8()?, parser.read_u8()?, parser.read_u8()?],
        })
    }

    /// Unscaled 14-bit temperature code (`SO_T` in the datasheet).
    pub fn raw_temperature_code(&self) -> u16 {
        (u16::from(self.temperature_msb) << 8) | u16::from(self.temperature_lsb)
    }

    /// Unscaled 12-bit humidity code (`SO_RH` in the datasheet).
    pub fn raw_humidity_code(&self) -> u16 {
        (u16::from(self.humidity_msb) << 8) | u16::from(self.humidity_lsb)
    }
}

/// Firmware build date reported by the device. The fields use a
/// device-defined epoch and are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub year: u8,
    pub month: u8,
    pub date: u8,
    pub reserved: [u8; 4],
}

impl FirmwareVersion {
    /// Parse a firmware version feature report of exactly
    /// `VERSION_REPORT_LEN` bytes.
    pub fn parse(data: &[u8]) -> UsbrhResult<Self> {
        if data.len() != VERSION_REPORT_LEN {
            return Err(UsbrhError::InvalidReportSize {
                expected: VERSION_REPORT_LEN,
                actual: data.len(),
            });
        }

        let mut parser = ReportParser::from_slice(data);
        Ok(Self {
            year: parser.read_u8()?,
            month: parser.read_u8()?,
            date: parser.read_u8()?,
            reserved: [
                parser.read_u8()?,
                parser.read_u8()?,
                parser.read_u8()?,
                parser.read_u8()?,
            ],
        })
    }
}
