//! Fallback for platforms without Metal, which never have any GPUs to report.

use std::convert::Infallible;

use super::{DeviceDescriptor, GpuProvider};

#[derive(Debug, Default)]
pub struct UnsupportedProvider;

impl GpuProvider for UnsupportedProvider {
    type Handle = Infallible;

    fn default_device(&self) -> Option<Infallible> {
        crate::debug!("Metal is not available on this platform.");
        None
    }

    fn all_devices(&self) -> Vec<Infallible> {
        crate::debug!("Metal is not available on this platform.");
        Vec::new()
    }

    fn describe(&self, handle: &Infallible) -> DeviceDescriptor {
        match *handle {}
    }
}
