//! A small tool to view Metal GPU information: which GPUs a system has, where
//! they're attached, and a few of their characteristics.
//!
//! The binary is a thin wrapper around [`run`]; the pieces it's built from are
//! public so they can be driven with any [`GpuProvider`].

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod inspector;
pub mod options;
pub mod report;

use std::io::stdout;

pub use collection::{DeviceDescriptor, DeviceLocation, GpuProvider, SystemProvider};
pub use inspector::{describe, inspect, list_devices, select_by_index};
pub use options::{args::Args, InspectOptions};
pub use report::format_report;
pub use utils::error::{GpuError, Result};

/// Inspects the GPUs of this system per `args`, printing to stdout.
pub fn run(args: &Args) -> Result<()> {
    let options = InspectOptions::from(args);
    crate::info!("Running with {options:?}.");

    let stdout = stdout();
    let mut out = stdout.lock();

    inspect(&SystemProvider::default(), &options, &mut out)
}
