//! Single-shot query/control tool for USBRH hygrometer/thermometer devices.
//!
//! Enumerates matching devices, applies the requested LED/heater switches,
//! reads the sensor, and prints one summary line to stdout. Diagnostics go
//! to stderr; the process exits non-zero when any device operation failed
//! or no device was found.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{debug, error};

use hid_usbrh_protocol::{LedChannel, PRODUCT_ID, VENDOR_ID};
use usbrh_device::UsbrhSensor;
use usbrh_hid_common::{HidBackend, HidDeviceInfo, HidSession};

/// Query and control Strawberry Linux USBRH sensors.
#[derive(Parser, Debug)]
#[command(
    name = "usbrh",
    about = "Temperature/humidity readout and LED/heater control for USBRH devices",
    disable_version_flag = true
)]
struct Cli {
    /// List matching devices instead of querying them
    #[arg(short = 'l', long)]
    list: bool,

    /// 1-based device number to operate on (0 = all matching devices)
    #[arg(short = 's', long = "device", value_name = "N", default_value_t = 0)]
    device: usize,

    /// Show the firmware build date
    #[arg(short = 'V', long = "firmware-version")]
    firmware_version: bool,

    /// Switch the red LED (0 = off, 1 = on)
    #[arg(short = 'R', long = "red", value_name = "0|1", value_parser = parse_switch)]
    red: Option<bool>,

    /// Switch the green LED (0 = off, 1 = on)
    #[arg(short = 'G', long = "green", value_name = "0|1", value_parser = parse_switch)]
    green: Option<bool>,

    /// Switch the sensor heater (0 = off, 1 = on)
    #[arg(short = 'H', long = "heater", value_name = "0|1", value_parser = parse_switch)]
    heater: Option<bool>,

    /// Verbose diagnostics, including hex dumps of every report
    #[arg(short = 'd', long)]
    debug: bool,
}

fn parse_switch(s: &str) -> Result<bool, String> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("invalid switch value '{other}', expected 0 or 1")),
    }
}

/// Outcome of all sub-operations on one device. A failed sub-operation is
/// recorded without aborting its siblings.
struct DeviceRun {
    fields: Vec<String>,
    failed: bool,
}

fn run_device<S: HidSession>(sensor: &mut UsbrhSensor<S>, number: usize, cli: &Cli) -> DeviceRun {
    let mut fields = Vec::new();
    let mut failed = false;

    if cli.firmware_version {
        match sensor.firmware_version() {
            Ok(v) => fields.push(format!(
                "v{number}:{:02}/{:02}/{:02}",
                v.year, v.month, v.date
            )),
            Err(e) => {
                error!("device {number}: firmware version: {e}");
                failed = true;
            }
        }
    }

    for (channel, state) in [(LedChannel::Red, cli.red), (LedChannel::Green, cli.green)] {
        if let Some(on) = state {
            if let Err(e) = sensor.set_led(channel, on) {
                error!("device {number}: {} led: {e}", channel.display_name());
                failed = true;
            }
        }
    }

    if let Some(on) = cli.heater {
        if let Err(e) = sensor.set_heater(on) {
            error!("device {number}: heater: {e}");
            failed = true;
        }
    }

    match sensor.poll() {
        Ok(reading) => fields.push(format!(
            "tc{number}:{:.2} rh{number}:{:.2}",
            reading.temperature_celsius(),
            reading.relative_humidity_pct()
        )),
        Err(e) => {
            error!("device {number}: sensor read: {e}");
            failed = true;
        }
    }

    DeviceRun { fields, failed }
}

fn list_devices(devices: &[HidDeviceInfo]) {
    for (index, info) in devices.iter().enumerate() {
        let number = index + 1;
        debug!(
            "device {number}: vid=0x{:04x} pid=0x{:04x} release=0x{:x} serial={:?} \
             manufacturer={:?} product={:?} interface={}",
            info.vendor_id,
            info.product_id,
            info.release_number,
            info.serial_number,
            info.manufacturer,
            info.product_name,
            info.interface_number
        );
        println!("{number}:{}", info.path);
    }
    println!("{} device(s) found", devices.len());
}

fn run(cli: &Cli) -> Result<()> {
    let backend = HidBackend::new().context("failed to initialise the HID layer")?;
    let devices = backend.list_devices(VENDOR_ID, PRODUCT_ID);

    if cli.list {
        list_devices(&devices);
        return Ok(());
    }

    // Fold over the enumerated devices: per-device outcomes feed one
    // aggregate status; a failing device never stops the rest.
    let mut processed = 0usize;
    let mut failed = false;
    let mut fields: Vec<String> = Vec::new();

    for (index, info) in devices.iter().enumerate() {
        let number = index + 1;
        if cli.device != 0 && number != cli.device {
            continue;
        }
        debug!("device {number}: {}", info.path);
        processed += 1;

        match backend.open(info) {
            Ok(session) => {
                let mut sensor = UsbrhSensor::new(session);
                let outcome = run_device(&mut sensor, number, cli);
                fields.extend(outcome.fields);
                failed |= outcome.failed;
            }
            Err(e) => {
                error!("device {number}: {e}");
                failed = true;
            }
        }
    }

    if processed == 0 {
        bail!("device not found");
    }

    let stamp = Local::now().format("%Y/%m/%d-%H:%M:%S");
    println!("tm:{stamp} {}", fields.join(" "));

    if failed {
        bail!("one or more device operations failed");
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(&cli)
}
