//! Common HID utilities for the USBRH tools
//!
//! Device-agnostic plumbing shared by the protocol and session layers:
//! the error taxonomy, device metadata, the session trait (with an
//! in-memory mock for tests), byte-wise report parsing/building, and the
//! `hidapi`-backed backend.

#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod device_info;
pub mod report_parser;
pub mod session;

pub use backend::*;
pub use device_info::*;
pub use report_parser::*;
pub use session::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    #[error("failed to open device: {0}")]
    OpenFailed(String),

    #[error("failed to read from device: {0}")]
    ReadError(String),

    #[error("failed to write to device: {0}")]
    WriteError(String),

    #[error("read timed out after {0} ms")]
    Timeout(u32),

    #[error("invalid report format: {0}")]
    InvalidReport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
