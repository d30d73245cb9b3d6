//! hidapi-backed enumeration and sessions

use std::ffi::CString;

use hidapi::HidApi;
use tracing::debug;

use crate::{HidCommonError, HidCommonResult, HidDeviceInfo, HidSession};

/// Handle to the platform HID layer. Enumerates devices and opens sessions
/// by platform path.
pub struct HidBackend {
    api: HidApi,
}

impl HidBackend {
    pub fn new() -> HidCommonResult<Self> {
        let api = HidApi::new().map_err(|e| HidCommonError::OpenFailed(e.to_string()))?;
        Ok(Self { api })
    }

    /// All connected devices matching the vendor/product pair, in
    /// enumeration order.
    pub fn list_devices(&self, vendor_id: u16, product_id: u16) -> Vec<HidDeviceInfo> {
        self.api
            .device_list()
            .filter(|d| d.vendor_id() == vendor_id && d.product_id() == product_id)
            .map(|d| {
                let mut info = HidDeviceInfo::new(
                    d.vendor_id(),
                    d.product_id(),
                    d.path().to_string_lossy().into_owned(),
                )
                .with_release_number(d.release_number())
                .with_interface_number(d.interface_number());
                if let Some(serial) = d.serial_number() {
                    info = info.with_serial(serial);
                }
                if let Some(manufacturer) = d.manufacturer_string() {
                    info = info.with_manufacturer(manufacturer);
                }
                if let Some(product) = d.product_string() {
                    info = info.with_product_name(product);
                }
                info
            })
            .collect()
    }

    /// Open one device by the path recorded during enumeration.
    pub fn open(&self, info: &HidDeviceInfo) -> HidCommonResult<HidapiSession> {
        let path = CString::new(info.path.as_str())
            .map_err(|e| HidCommonError::OpenFailed(e.to_string()))?;
        let device = self
            .api
            .open_path(&path)
            .map_err(|e| HidCommonError::OpenFailed(e.to_string()))?;
        debug!("opened HID device at {}", info.path);
        Ok(HidapiSession {
            device,
            info: info.clone(),
        })
    }
}

/// One open hidapi connection. Closed exactly once, on drop.
pub struct HidapiSession {
    device: hidapi::HidDevice,
    info: HidDeviceInfo,
}

impl HidSession for HidapiSession {
    fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        self.device
            .write(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))
    }

    fn read_report_timeout(&mut self, max_len: usize, timeout_ms: u32) -> HidCommonResult<Vec<u8>> {
        let mut buffer = vec![0u8; max_len];
        let timeout = i32::try_from(timeout_ms).unwrap_or(i32::MAX);
        let read = self
            .device
            .read_timeout(&mut buffer, timeout)
            .map_err(|e| HidCommonError::ReadError(e.to_string()))?;
        // hidapi signals an expired timeout as a zero-byte read
        if read == 0 {
            return Err(HidCommonError::Timeout(timeout_ms));
        }
        buffer.truncate(read);
        Ok(buffer)
    }

    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<()> {
        self.device
            .send_feature_report(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))
    }

    fn get_feature_report(&mut self, max_len: usize) -> HidCommonResult<Vec<u8>> {
        // First byte carries the report id on the way in, 0 for the
        // unnumbered reports this device uses.
        let mut buffer = vec![0u8; max_len];
        let read = self
            .device
            .get_feature_report(&mut buffer)
            .map_err(|e| HidCommonError::ReadError(e.to_string()))?;
        buffer.truncate(read);
        Ok(buffer)
    }
}
