//! How to handle user-supplied options.

pub mod args;

use self::args::Args;

/// The settings that drive a single inspection run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Only look at the platform's default GPU.
    pub default_only: bool,

    /// Narrow the gathered list down to the device at this position.
    pub index: Option<i64>,
}

impl InspectOptions {
    /// Whether each report should be prefixed with its position. This is only
    /// the case when the caller hasn't already picked out a single device.
    pub fn show_index(&self) -> bool {
        !self.default_only && self.index.is_none()
    }
}

impl From<&Args> for InspectOptions {
    fn from(args: &Args) -> Self {
        Self {
            default_only: args.selection_args.default_only,
            index: args.selection_args.index,
        }
    }
}
