//! GPU collection on macOS, via Metal.

use ::metal::{Device, DeviceRef};
use objc::{msg_send, sel, sel_impl};

use super::{DeviceDescriptor, DeviceLocation, GpuProvider};

/// Enumerates GPUs through the Metal framework.
#[derive(Debug, Default)]
pub struct MetalProvider;

/// Reads `MTLDevice.location` as its raw `NSUInteger`.
///
/// `metal`'s own accessor returns a closed enum, which can't hold values added
/// by newer OS releases.
fn raw_location(device: &DeviceRef) -> u64 {
    // SAFETY: `location` is a property on every MTLDevice since macOS 10.15
    // and returns an NSUInteger, which is a u64 on all macOS targets.
    unsafe { msg_send![device, location] }
}

impl GpuProvider for MetalProvider {
    type Handle = Device;

    fn default_device(&self) -> Option<Device> {
        crate::debug!("Using the Metal backend.");

        let device = Device::system_default();
        if device.is_none() {
            crate::error!("MTLCreateSystemDefaultDevice returned no device.");
        }

        device
    }

    fn all_devices(&self) -> Vec<Device> {
        crate::debug!("Using the Metal backend.");

        let devices = Device::all();
        crate::debug!("Metal reported {} device(s).", devices.len());

        devices
    }

    fn describe(&self, device: &Device) -> DeviceDescriptor {
        DeviceDescriptor {
            name: device.name().to_string(),
            location: DeviceLocation::from_raw(raw_location(device)),
            is_low_power: device.is_low_power(),
            is_headless: device.is_headless(),
            is_removable: device.is_removable(),
            has_unified_memory: device.has_unified_memory(),
        }
    }
}
