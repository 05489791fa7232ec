//! Boundary to the kernel counter subsystem.

use std::fs::File;
use std::io::Result;
use std::os::fd::AsRawFd;

use crate::config::Target;
use crate::ffi::bindings as b;
use crate::ffi::syscall;
pub use crate::ffi::Attr;

/// Control operation issued on a group leader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Enable,
    Disable,
    Reset,
}

/// Operations a [session][super::CounterGroupSession] needs from the OS.
///
/// Descriptors are owned values: the session hands each one back through
/// [`Sys::close`] exactly once.
pub trait Sys {
    type Fd;

    /// Opens one counter. `group` is `None` for the leader and the leader's
    /// descriptor for members.
    fn open(&self, attr: &Attr, target: &Target, group: Option<&Self::Fd>) -> Result<Self::Fd>;

    /// Applies `op` to the leader and every member of its group.
    fn control(&self, leader: &Self::Fd, op: Control) -> Result<()>;

    /// Reads the leader, returning the number of bytes written to `buf`.
    fn read(&self, leader: &Self::Fd, buf: &mut [u8]) -> Result<usize>;

    fn close(&self, fd: Self::Fd) -> Result<()>;
}

/// The `perf_event_open` syscall family.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linux;

impl Sys for Linux {
    type Fd = File;

    fn open(&self, attr: &Attr, target: &Target, group: Option<&File>) -> Result<File> {
        let group_fd = group.map_or(-1, |it| it.as_raw_fd());
        let flags = b::PERF_FLAG_FD_CLOEXEC as u64;
        syscall!(perf_event_open, attr, target.pid, target.cpu, group_fd, flags)
    }

    fn control(&self, leader: &File, op: Control) -> Result<()> {
        let op = match op {
            Control::Enable => b::PERF_EVENT_IOC_ENABLE,
            Control::Disable => b::PERF_EVENT_IOC_DISABLE,
            Control::Reset => b::PERF_EVENT_IOC_RESET,
        };
        syscall!(ioctl_arg, leader, op as u64, b::PERF_IOC_FLAG_GROUP as u64)?;
        Ok(())
    }

    fn read(&self, leader: &File, buf: &mut [u8]) -> Result<usize> {
        syscall!(read, leader, buf)
    }

    fn close(&self, fd: File) -> Result<()> {
        // Closing a perf descriptor cannot fail in a way we could act on.
        drop(fd);
        Ok(())
    }
}
