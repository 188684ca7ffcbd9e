//! Read a VEML6070 attached to a Linux I2C adapter.
//!
//! ```text
//! read_uv [DEVICE] [INTEGRATION_TIME] [--ack]
//! ```
//!
//! `DEVICE` defaults to `/dev/i2c-1`. `INTEGRATION_TIME` is one of `half`, `1`,
//! `2` or `4` (default `1`). Takes ten readings one second apart. Set
//! `RUST_LOG=info` to see driver logs.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use linux_embedded_hal::I2cdev;
use log::{error, info};

use veml6070::{IntegrationTime, Veml6070};

const DEFAULT_DEVICE: &str = "/dev/i2c-1";
const SAMPLE_COUNT: usize = 10;
const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

fn parse_integration_time(arg: &str) -> Option<IntegrationTime> {
    match arg {
        "half" | "0.5" => Some(IntegrationTime::Half),
        "1" => Some(IntegrationTime::One),
        "2" => Some(IntegrationTime::Two),
        "4" => Some(IntegrationTime::Four),
        _ => None,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1).filter(|a| a != "--ack");
    let ack = std::env::args().any(|a| a == "--ack");
    let device = args.next().unwrap_or_else(|| DEFAULT_DEVICE.into());
    let integration_time = match args.next() {
        Some(arg) => match parse_integration_time(&arg) {
            Some(it) => it,
            None => {
                error!("Unknown integration time '{}', expected half, 1, 2 or 4", arg);
                return ExitCode::FAILURE;
            }
        },
        None => IntegrationTime::default(),
    };

    let i2c = match I2cdev::new(&device) {
        Ok(i2c) => i2c,
        Err(e) => {
            error!("Failed to open {}: {}", device, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Opened {}", device);

    let mut uv = match Veml6070::with_options(i2c, integration_time, ack) {
        Ok(uv) => uv,
        Err(e) => {
            error!("Failed to configure VEML6070: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    for _ in 0..SAMPLE_COUNT {
        match uv.uv_raw() {
            Ok(raw) => println!("Reading: {} | Risk Level: {}", raw, uv.get_index(raw)),
            Err(e) => {
                error!("UV read failed: {:?}", e);
                return ExitCode::FAILURE;
            }
        }
        thread::sleep(SAMPLE_INTERVAL);
    }

    if let Err(e) = uv.sleep() {
        error!("Failed to put VEML6070 into shutdown: {:?}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
