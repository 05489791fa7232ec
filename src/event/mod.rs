//! Counter specifications.

use crate::ffi::bindings as b;

pub mod hw;

/// Kernel event category of a [`CounterSpec`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Generalized hardware event (`PERF_TYPE_HARDWARE`).
    Hardware,
    /// Hardware cache event (`PERF_TYPE_HW_CACHE`).
    HardwareCache,
}

/// Describes one hardware counter to request.
///
/// For [`Category::Hardware`] the `event_code` is the generalized event id.
/// For [`Category::HardwareCache`] it is the cache id, combined with
/// `cache_op` and `cache_result` into the kernel config word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterSpec {
    pub category: Category,
    pub event_code: u64,
    pub cache_op: Option<u8>,
    pub cache_result: Option<u8>,
}

impl CounterSpec {
    pub const fn hardware(event_code: u64) -> Self {
        Self {
            category: Category::Hardware,
            event_code,
            cache_op: None,
            cache_result: None,
        }
    }

    pub const fn hardware_cache(cache: u64, op: u8, result: u8) -> Self {
        Self {
            category: Category::HardwareCache,
            event_code: cache,
            cache_op: Some(op),
            cache_result: Some(result),
        }
    }

    /// Cycles, retired instructions and L1D read misses, in that order.
    pub fn default_profile() -> [Self; 3] {
        use hw::{Hardware, Op, OpResult, Type};

        [
            Hardware::CpuCycle.into(),
            Hardware::Instr.into(),
            Hardware::Cache(Type::L1d, Op::Read, OpResult::Miss).into(),
        ]
    }

    pub(crate) fn ty(&self) -> u32 {
        match self.category {
            Category::Hardware => b::PERF_TYPE_HARDWARE,
            Category::HardwareCache => b::PERF_TYPE_HW_CACHE,
        }
    }

    // https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L63
    // { L1-D, L1-I, LLC, ITLB, DTLB, BPU, NODE } x
    // { read, write, prefetch } x
    // { accesses, misses }
    pub(crate) fn config(&self) -> u64 {
        match self.category {
            Category::Hardware => self.event_code,
            Category::HardwareCache => {
                let op = self.cache_op.unwrap_or_default() as u64;
                let result = self.cache_result.unwrap_or_default() as u64;
                self.event_code | (op << 8) | (result << 16)
            }
        }
    }
}

#[cfg(test)]
mod test;
