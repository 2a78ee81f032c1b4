//! This is the main file to house GPU collection, i.e. the seam between the
//! inspector and whatever the platform uses to enumerate GPUs.

cfg_if::cfg_if! {
    if #[cfg(target_os = "macos")] {
        pub mod metal;
        pub use self::metal::MetalProvider as SystemProvider;
    } else {
        pub mod unsupported;
        pub use self::unsupported::UnsupportedProvider as SystemProvider;
    }
}

use std::fmt;

/// Where a GPU is physically attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceLocation {
    BuiltIn,
    External,
    Slot,
    Unspecified,
    /// A raw location value the platform reported that we don't know about.
    Unrecognized(u64),
}

impl DeviceLocation {
    /// Maps a raw `MTLDeviceLocation` value.
    pub fn from_raw(raw: u64) -> Self {
        match raw {
            0 => DeviceLocation::BuiltIn,
            1 => DeviceLocation::Slot,
            2 => DeviceLocation::External,
            u64::MAX => DeviceLocation::Unspecified,
            other => {
                crate::warn!("Unrecognized GPU location value '{other}'.");
                DeviceLocation::Unrecognized(other)
            }
        }
    }

    /// The user-facing label. Anything unrecognized is shown as unspecified.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceLocation::BuiltIn => "Built-in",
            DeviceLocation::External => "External",
            DeviceLocation::Slot => "Slot",
            DeviceLocation::Unspecified | DeviceLocation::Unrecognized(_) => "Unspecified",
        }
    }
}

impl fmt::Display for DeviceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A snapshot of a single GPU's properties, taken at query time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub name: String,
    pub location: DeviceLocation,
    pub is_low_power: bool,
    pub is_headless: bool,
    pub is_removable: bool,
    pub has_unified_memory: bool,
}

/// Something that can enumerate the GPUs on a system.
///
/// Results only need to be stable for the duration of one run; callers
/// shouldn't assume anything is cached between calls.
pub trait GpuProvider {
    /// An opaque reference to a single GPU.
    type Handle;

    /// Returns the system's default GPU, if there is one.
    fn default_device(&self) -> Option<Self::Handle>;

    /// Returns every GPU currently available, in platform order.
    fn all_devices(&self) -> Vec<Self::Handle>;

    /// Reads the live properties of a GPU.
    fn describe(&self, handle: &Self::Handle) -> DeviceDescriptor;
}
