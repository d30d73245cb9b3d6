//! Device information types for HID devices

use serde::{Deserialize, Serialize};

/// Identity and metadata of one enumerated HID device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub release_number: u16,
    pub interface_number: i32,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    /// Platform path used to open the device (e.g. a hidraw node).
    pub path: String,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            release_number: 0,
            interface_number: -1,
            serial_number: None,
            manufacturer: None,
            product_name: None,
            path: path.into(),
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    pub fn with_release_number(mut self, release: u16) -> Self {
        self.release_number = release;
        self
    }

    pub fn with_interface_number(mut self, interface: i32) -> Self {
        self.interface_number = interface;
        self
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    pub fn display_name(&self) -> String {
        self.product_name
            .clone()
            .or_else(|| self.manufacturer.clone())
            .unwrap_or_else(|| format!("{:04x}:{:04x}", self.vendor_id, self.product_id))
    }
}

impl Default for HidDeviceInfo {
    fn default() -> Self {
        Self::new(0, 0, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_vid_pid() {
        let info = HidDeviceInfo::new(0x1774, 0x1001, "/dev/hidraw0");
        assert!(info.matches(0x1774, 0x1001));
        assert!(!info.matches(0x1774, 0x1002));
        assert!(!info.matches(0x0000, 0x1001));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let info = HidDeviceInfo::new(0x1774, 0x1001, "/dev/hidraw0")
            .with_product_name("USBRH-Sensor");
        assert_eq!(info.display_name(), "USBRH-Sensor");

        let info = HidDeviceInfo::new(0x1774, 0x1001, "/dev/hidraw0")
            .with_manufacturer("Strawberry Linux");
        assert_eq!(info.display_name(), "Strawberry Linux");

        let info = HidDeviceInfo::new(0x1774, 0x1001, "/dev/hidraw0");
        assert_eq!(info.display_name(), "1774:1001");
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let info = HidDeviceInfo::new(0x1774, 0x1001, "/dev/hidraw2")
            .with_serial("00001")
            .with_release_number(0x0102)
            .with_interface_number(0);
        let json = serde_json::to_string(&info)?;
        let restored: HidDeviceInfo = serde_json::from_str(&json)?;
        assert_eq!(restored.vendor_id, 0x1774);
        assert_eq!(restored.release_number, 0x0102);
        assert_eq!(restored.serial_number.as_deref(), Some("00001"));
        assert_eq!(restored.path, "/dev/hidraw2");
        Ok(())
    }
}
