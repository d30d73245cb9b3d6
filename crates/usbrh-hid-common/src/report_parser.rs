//! Byte-wise HID report parsing and building
//!
//! The USBRH wire format is byte-oriented with big-endian 16-bit sensor
//! codes, so the parser exposes `read_u16_be` rather than the usual
//! little-endian accessors.

use crate::{HidCommonError, HidCommonResult};

pub struct ReportParser<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ReportParser<'a> {
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self {
            buffer: data,
            position: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn read_u8(&mut self) -> HidCommonResult<u8> {
        let value = self
            .buffer
            .get(self.position)
            .copied()
            .ok_or_else(|| HidCommonError::InvalidReport("unexpected end of data".to_string()))?;
        self.position += 1;
        Ok(value)
    }

    pub fn read_u16_be(&mut self) -> HidCommonResult<u16> {
        let hi = u16::from(self.read_u8()?);
        let lo = u16::from(self.read_u8()?);
        Ok((hi << 8) | lo)
    }

    pub fn read_bytes(&mut self, count: usize) -> HidCommonResult<&'a [u8]> {
        let end = self.position.checked_add(count).filter(|e| *e <= self.buffer.len());
        let Some(end) = end else {
            return Err(HidCommonError::InvalidReport(
                "unexpected end of data".to_string(),
            ));
        };
        let slice = &self.buffer[self.position..end];
        self.position = end;
        Ok(slice)
    }

    pub fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.buffer.len());
    }
}

pub struct ReportBuilder {
    buffer: Vec<u8>,
}

impl ReportBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buffer.push(value);
        self
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    /// Extend the report with zero bytes up to `len`.
    pub fn pad_to(&mut self, len: usize) -> &mut Self {
        while self.buffer.len() < len {
            self.buffer.push(0);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

/// Space-separated lowercase hex rendering of a report, for diagnostics.
pub fn hex_dump(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u8_past_end_fails() {
        let data = [0x01, 0x02];
        let mut parser = ReportParser::from_slice(&data);

        assert_eq!(parser.read_u8().expect("first byte"), 0x01);
        assert_eq!(parser.read_u8().expect("second byte"), 0x02);
        assert!(parser.read_u8().is_err());
    }

    #[test]
    fn test_read_u16_be() {
        let data = [0x12, 0x34];
        let mut parser = ReportParser::from_slice(&data);

        assert_eq!(parser.read_u16_be().expect("read u16"), 0x1234);
    }

    #[test]
    fn test_read_bytes_and_remaining() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut parser = ReportParser::from_slice(&data);

        assert_eq!(parser.read_bytes(3).expect("read bytes"), &[0x01, 0x02, 0x03]);
        assert_eq!(parser.remaining(), 2);
        assert!(parser.read_bytes(3).is_err());
    }

    #[test]
    fn test_builder_pad_to() {
        let mut builder = ReportBuilder::with_capacity(8);
        builder.write_u8(0x00).write_u8(0x03).write_u8(0x01).pad_to(8);

        let data = builder.into_inner();
        assert_eq!(data, vec![0x00, 0x03, 0x01, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pad_to_never_truncates() {
        let mut builder = ReportBuilder::with_capacity(4);
        builder.write_bytes(&[1, 2, 3, 4]).pad_to(2);
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[0x00, 0xAB, 0x07]), "00 ab 07");
        assert_eq!(hex_dump(&[]), "");
    }
}
