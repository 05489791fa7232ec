//! Session options.

mod attr;
mod target;

pub(crate) use attr::*;
pub use target::*;

/// Options shared by every counter of a session.
#[derive(Clone, Debug, Default)]
pub struct Opts {
    /// Task and CPU to measure.
    pub target: Target,

    /// Privilege levels whose events are not counted.
    pub exclude: Exclude,
}

/// Exclude events with privilege levels.
///
/// Kernel and hypervisor events are excluded by default, so counting works
/// with `perf_event_paranoid` up to 2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exclude {
    pub user: bool,
    pub kernel: bool,
    pub hv: bool,
    pub idle: bool,
}

impl Default for Exclude {
    fn default() -> Self {
        Self {
            user: false,
            kernel: true,
            hv: true,
            idle: false,
        }
    }
}
