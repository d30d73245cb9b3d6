//! Output and feature report generation for the USBRH
//!
//! Every host-to-device report is `COMMAND_REPORT_LEN` bytes on the wire:
//! the report-id prefix (always zero, the device uses unnumbered reports)
//! followed by 7 payload bytes. The sizes are a device contract; anything
//! else is rejected or misread by the firmware.

use super::{LedChannel, COMMAND_REPORT_LEN, REPORT_ID};
use usbrh_hid_common::ReportBuilder;

/// Feature-report selector byte addressing the sensor heater.
pub const HEATER_SELECTOR: u8 = 0x01;

/// Output report that triggers one sensor measurement: the report-id
/// prefix and an all-zero payload.
pub fn encode_poll_request() -> Vec<u8> {
    let mut builder = ReportBuilder::with_capacity(COMMAND_REPORT_LEN);
    builder.write_u8(REPORT_ID).pad_to(COMMAND_REPORT_LEN);
    builder.into_inner()
}

/// Logical LED switch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommand {
    pub channel: LedChannel,
    pub on: bool,
}

impl LedCommand {
    pub fn new(channel: LedChannel, on: bool) -> Self {
        Self { channel, on }
    }

    /// Feature report bytes: `[0x00, selector, on?1:0, 0...]`.
    pub fn encode(&self) -> Vec<u8> {
        let mut builder = ReportBuilder::with_capacity(COMMAND_REPORT_LEN);
        builder
            .write_u8(REPORT_ID)
            .write_u8(self.channel.selector())
            .write_u8(u8::from(self.on))
            .pad_to(COMMAND_REPORT_LEN);
        builder.into_inner()
    }
}

/// Logical heater switch command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaterCommand {
    pub on: bool,
}

impl HeaterCommand {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    /// Feature report bytes: `[0x00, 0x01, on << 2, 0...]`. The on-state
    /// sits at bit 2, not bit 0; the firmware ignores a plain 0/1 here.
    pub fn encode(&self) -> Vec<u8> {
        let mut builder = ReportBuilder::with_capacity(COMMAND_REPORT_LEN);
        builder
            .write_u8(REPORT_ID)
            .write_u8(HEATER_SELECTOR)
            .write_u8(u8::from(self.on) << 2)
            .pad_to(COMMAND_REPORT_LEN);
        builder.into_inner()
    }
}
