//! HID session trait
//!
//! One open connection to one physical device. Sessions are owned by a
//! single caller for their whole open → operate → drop lifetime; release
//! happens exactly once when the session is dropped, whatever the outcome
//! of the operations in between.

use crate::{HidCommonResult, HidDeviceInfo};

pub trait HidSession {
    fn device_info(&self) -> &HidDeviceInfo;

    /// Write an output report (report-id prefix included in `data`).
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    /// Read one input report of at most `max_len` bytes, failing with
    /// `Timeout` if nothing arrives within `timeout_ms`.
    fn read_report_timeout(&mut self, max_len: usize, timeout_ms: u32) -> HidCommonResult<Vec<u8>>;

    /// Send a feature report (report-id prefix included in `data`).
    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<()>;

    /// Fetch a feature report of at most `max_len` bytes.
    fn get_feature_report(&mut self, max_len: usize) -> HidCommonResult<Vec<u8>>;
}

pub mod mock {
    use super::*;
    use crate::HidCommonError;
    use std::collections::VecDeque;

    /// Recording session for tests: reads are served from queues, writes
    /// are captured for later inspection.
    pub struct MockSession {
        info: HidDeviceInfo,
        read_queue: VecDeque<Vec<u8>>,
        feature_queue: VecDeque<Vec<u8>>,
        written_reports: Vec<Vec<u8>>,
        sent_features: Vec<Vec<u8>>,
        fail_writes: bool,
    }

    impl MockSession {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self {
                info: HidDeviceInfo::new(vendor_id, product_id, path),
                read_queue: VecDeque::new(),
                feature_queue: VecDeque::new(),
                written_reports: Vec::new(),
                sent_features: Vec::new(),
                fail_writes: false,
            }
        }

        /// Queue the next input report to be returned by `read_report_timeout`.
        pub fn queue_read(&mut self, data: Vec<u8>) {
            self.read_queue.push_back(data);
        }

        /// Queue the next feature report to be returned by `get_feature_report`.
        pub fn queue_feature(&mut self, data: Vec<u8>) {
            self.feature_queue.push_back(data);
        }

        /// Make every write and feature send fail with `WriteError`.
        pub fn fail_writes(&mut self) {
            self.fail_writes = true;
        }

        pub fn written_reports(&self) -> &[Vec<u8>] {
            &self.written_reports
        }

        pub fn sent_features(&self) -> &[Vec<u8>] {
            &self.sent_features
        }
    }

    impl HidSession for MockSession {
        fn device_info(&self) -> &HidDeviceInfo {
            &self.info
        }

        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            if self.fail_writes {
                return Err(HidCommonError::WriteError("mock write failure".to_string()));
            }
            self.written_reports.push(data.to_vec());
            Ok(data.len())
        }

        fn read_report_timeout(
            &mut self,
            max_len: usize,
            timeout_ms: u32,
        ) -> HidCommonResult<Vec<u8>> {
            let mut data = self
                .read_queue
                .pop_front()
                .ok_or(HidCommonError::Timeout(timeout_ms))?;
            data.truncate(max_len);
            Ok(data)
        }

        fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<()> {
            if self.fail_writes {
                return Err(HidCommonError::WriteError("mock write failure".to_string()));
            }
            self.sent_features.push(data.to_vec());
            Ok(())
        }

        fn get_feature_report(&mut self, max_len: usize) -> HidCommonResult<Vec<u8>> {
            let mut data = self
                .feature_queue
                .pop_front()
                .ok_or_else(|| HidCommonError::ReadError("no feature data queued".to_string()))?;
            data.truncate(max_len);
            Ok(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockSession;
    use super::*;
    use crate::HidCommonError;

    #[test]
    fn test_mock_records_writes() {
        let mut session = MockSession::new(0x1774, 0x1001, "/dev/hidraw0");

        session
            .write_report(&[0x00, 0x01, 0x02])
            .expect("write should succeed");
        session
            .send_feature_report(&[0x00, 0x03, 0x01])
            .expect("feature send should succeed");

        assert_eq!(session.written_reports(), &[vec![0x00, 0x01, 0x02]]);
        assert_eq!(session.sent_features(), &[vec![0x00, 0x03, 0x01]]);
    }

    #[test]
    fn test_mock_read_serves_queue_then_times_out() {
        let mut session = MockSession::new(0x1774, 0x1001, "/dev/hidraw0");
        session.queue_read(vec![0xAA, 0xBB]);

        assert_eq!(
            session.read_report_timeout(7, 5000).expect("queued read"),
            vec![0xAA, 0xBB]
        );
        assert!(matches!(
            session.read_report_timeout(7, 5000),
            Err(HidCommonError::Timeout(5000))
        ));
    }

    #[test]
    fn test_mock_read_truncates_to_max_len() {
        let mut session = MockSession::new(0x1774, 0x1001, "/dev/hidraw0");
        session.queue_read(vec![1, 2, 3, 4, 5]);

        let data = session.read_report_timeout(3, 100).expect("queued read");
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_mock_failing_writes() {
        let mut session = MockSession::new(0x1774, 0x1001, "/dev/hidraw0");
        session.fail_writes();

        assert!(matches!(
            session.write_report(&[0x00]),
            Err(HidCommonError::WriteError(_))
        ));
        assert!(matches!(
            session.send_feature_report(&[0x00]),
            Err(HidCommonError::WriteError(_))
        ));
    }
}
