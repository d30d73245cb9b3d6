//! Adapter tests over a recording mock session: verifies the exact wire
//! bytes each operation produces and how transport failures surface.

use hid_usbrh_protocol::{LedChannel, UsbrhError};
use usbrh_device::{UsbrhDeviceError, UsbrhSensor};
use usbrh_hid_common::{mock::MockSession, HidCommonError};

fn mock() -> MockSession {
    MockSession::new(0x1774, 0x1001, "/dev/hidraw0")
}

#[test]
fn poll_writes_zeroed_trigger_and_parses_reading() {
    let mut session = mock();
    session.queue_read(vec![0x0B, 0xB8, 0x0F, 0xA0, 0x00, 0x00, 0x00]);

    let mut sensor = UsbrhSensor::new(session);
    let reading = sensor.poll().expect("poll should succeed");

    assert_eq!(reading.raw_humidity_code(), 3000);
    assert_eq!(reading.raw_temperature_code(), 4000);

    let session = sensor.into_session();
    assert_eq!(session.written_reports(), &[vec![0u8; 8]]);
}

#[test]
fn poll_times_out_when_no_report_arrives() {
    let mut sensor = UsbrhSensor::new(mock());

    let result = sensor.poll();
    assert!(matches!(
        result,
        Err(UsbrhDeviceError::Hid(HidCommonError::Timeout(5000)))
    ));
}

#[test]
fn poll_rejects_short_report() {
    let mut session = mock();
    session.queue_read(vec![0x01, 0x02, 0x03]);

    let mut sensor = UsbrhSensor::new(session);
    let result = sensor.poll();
    assert!(matches!(
        result,
        Err(UsbrhDeviceError::Protocol(UsbrhError::InvalidReportSize {
            expected: 7,
            actual: 3
        }))
    ));
}

#[test]
fn led_commands_send_selector_and_state() {
    let mut sensor = UsbrhSensor::new(mock());

    sensor
        .set_led(LedChannel::Green, true)
        .expect("green on should succeed");
    sensor
        .set_led(LedChannel::Red, false)
        .expect("red off should succeed");

    let session = sensor.into_session();
    assert_eq!(
        session.sent_features(),
        &[
            vec![0x00, 0x03, 0x01, 0, 0, 0, 0, 0],
            vec![0x00, 0x04, 0x00, 0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn heater_command_shifts_state_to_bit_two() {
    let mut sensor = UsbrhSensor::new(mock());

    sensor.set_heater(true).expect("heater on should succeed");
    sensor.set_heater(false).expect("heater off should succeed");

    let session = sensor.into_session();
    assert_eq!(
        session.sent_features(),
        &[
            vec![0x00, 0x01, 0x04, 0, 0, 0, 0, 0],
            vec![0x00, 0x01, 0x00, 0, 0, 0, 0, 0],
        ]
    );
}

#[test]
fn firmware_version_parses_feature_report() {
    let mut session = mock();
    session.queue_feature(vec![25, 12, 31, 0, 0, 0, 0]);

    let mut sensor = UsbrhSensor::new(session);
    let version = sensor.firmware_version().expect("version read");

    assert_eq!((version.year, version.month, version.date), (25, 12, 31));
}

#[test]
fn firmware_version_rejects_truncated_report() {
    let mut session = mock();
    session.queue_feature(vec![25, 12]);

    let mut sensor = UsbrhSensor::new(session);
    assert!(matches!(
        sensor.firmware_version(),
        Err(UsbrhDeviceError::Protocol(UsbrhError::InvalidReportSize {
            expected: 7,
            actual: 2
        }))
    ));
}

#[test]
fn write_failure_surfaces_as_hid_error() {
    let mut session = mock();
    session.fail_writes();

    let mut sensor = UsbrhSensor::new(session);
    assert!(matches!(
        sensor.set_led(LedChannel::Red, true),
        Err(UsbrhDeviceError::Hid(HidCommonError::WriteError(_)))
    ));
    assert!(matches!(
        sensor.poll(),
        Err(UsbrhDeviceError::Hid(HidCommonError::WriteError(_)))
    ));
}
