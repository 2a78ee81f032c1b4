//! Gathering, narrowing, and printing GPUs.

use std::io::Write;

use crate::{
    collection::{DeviceDescriptor, GpuProvider},
    options::InspectOptions,
    report::format_report,
    utils::error::{GpuError, Result},
};

/// Reads a device's live properties into a snapshot.
#[inline]
pub fn describe<P: GpuProvider>(provider: &P, handle: &P::Handle) -> DeviceDescriptor {
    provider.describe(handle)
}

/// Gathers either the default device or every device the platform knows of.
///
/// An empty list is fine when listing everything; asking for the default
/// device when there isn't one is an error.
pub fn list_devices<P: GpuProvider>(provider: &P, default_only: bool) -> Result<Vec<DeviceDescriptor>> {
    let handles = if default_only {
        vec![provider.default_device().ok_or(GpuError::DeviceNotFound)?]
    } else {
        provider.all_devices()
    };

    crate::debug!("Gathered {} device(s), default_only: {default_only}.", handles.len());

    Ok(handles
        .iter()
        .map(|handle| describe(provider, handle))
        .collect())
}

/// Narrows `devices` to just the one at `index`.
pub fn select_by_index<T>(mut devices: Vec<T>, index: i64) -> Result<Vec<T>> {
    let len = devices.len();

    match usize::try_from(index) {
        Ok(position) if position < len => Ok(vec![devices.swap_remove(position)]),
        _ => Err(GpuError::IndexOutOfRange { index, len }),
    }
}

/// Runs a full inspection, writing one report per device into `out`.
///
/// Everything is gathered and validated before anything is written.
pub fn inspect<P: GpuProvider, W: Write>(
    provider: &P, options: &InspectOptions, out: &mut W,
) -> Result<()> {
    let mut devices = list_devices(provider, options.default_only)?;

    if let Some(index) = options.index {
        devices = select_by_index(devices, index)?;
    }

    let show_index = options.show_index();
    let reports = devices
        .iter()
        .enumerate()
        .map(|(position, device)| format_report(device, show_index.then_some(position)))
        .collect::<Vec<_>>();

    out.write_all(reports.join("\n").as_bytes())?;
    out.flush()?;

    Ok(())
}
