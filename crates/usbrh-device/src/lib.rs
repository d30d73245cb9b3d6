//! Session-level operations for the USBRH hygrometer/thermometer
//!
//! Binds the pure protocol codecs to a `HidSession`: every operation is
//! encode → session I/O → decode/validate. The sensor owns its session;
//! dropping the sensor releases the device exactly once, whatever the
//! outcome of the operations in between.

#![deny(clippy::unwrap_used)]

use hid_usbrh_protocol::{
    encode_poll_request, FirmwareVersion, HeaterCommand, LedChannel, LedCommand, SensorReading,
    UsbrhError, SENSOR_READ_TIMEOUT_MS, SENSOR_REPORT_LEN, VERSION_REPORT_LEN,
};
use thiserror::Error;
use tracing::debug;
use usbrh_hid_common::{hex_dump, HidCommonError, HidDeviceInfo, HidSession};

/// Errors from one device operation. Carries whether the protocol layer
/// or the HID transport failed.
#[derive(Error, Debug)]
pub enum UsbrhDeviceError {
    #[error("protocol error: {0}")]
    Protocol(#[from] UsbrhError),

    #[error(transparent)]
    Hid(#[from] HidCommonError),
}

pub type UsbrhDeviceResult<T> = Result<T, UsbrhDeviceError>;

/// One open USBRH device.
pub struct UsbrhSensor<S: HidSession> {
    session: S,
}

impl<S: HidSession> UsbrhSensor<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn device_info(&self) -> &HidDeviceInfo {
        self.session.device_info()
    }

    /// Trigger one measurement and read the raw sensor codes. Blocks for
    /// at most `SENSOR_READ_TIMEOUT_MS`.
    pub fn poll(&mut self) -> UsbrhDeviceResult<SensorReading> {
        let request = encode_poll_request();
        debug!("write_report: {}", hex_dump(&request));
        self.session.write_report(&request)?;

        let data = self
            .session
            .read_report_timeout(SENSOR_REPORT_LEN, SENSOR_READ_TIMEOUT_MS)?;
        debug!("sensor report: {}", hex_dump(&data));
        Ok(SensorReading::parse(&data)?)
    }

    /// Switch one of the front LEDs.
    pub fn set_led(&mut self, channel: LedChannel, on: bool) -> UsbrhDeviceResult<()> {
        let report = LedCommand::new(channel, on).encode();
        debug!("send_feature_report: {}", hex_dump(&report));
        self.session.send_feature_report(&report)?;
        Ok(())
    }

    /// Switch the sensor heater.
    pub fn set_heater(&mut self, on: bool) -> UsbrhDeviceResult<()> {
        let report = HeaterCommand::new(on).encode();
        debug!("send_feature_report: {}", hex_dump(&report));
        self.session.send_feature_report(&report)?;
        Ok(())
    }

    /// Read the firmware build date.
    pub fn firmware_version(&mut self) -> UsbrhDeviceResult<FirmwareVersion> {
        let data = self.session.get_feature_report(VERSION_REPORT_LEN)?;
        debug!("get_feature_report: {}", hex_dump(&data));
        Ok(FirmwareVersion::parse(&data)?)
    }

    /// Hand the session back, e.g. to inspect a recording mock in tests.
    pub fn into_session(self) -> S {
        self.session
    }
}
