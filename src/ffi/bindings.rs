// Subset of `include/uapi/linux/perf_event.h` needed for counting groups.
// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h

#![allow(dead_code, non_camel_case_types)]

// enum perf_type_id
pub const PERF_TYPE_HARDWARE: u32 = 0;
pub const PERF_TYPE_HW_CACHE: u32 = 3;

// enum perf_hw_id
pub const PERF_COUNT_HW_CPU_CYCLES: u32 = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: u32 = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: u32 = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: u32 = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: u32 = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: u32 = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: u32 = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: u32 = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: u32 = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: u32 = 9;

// enum perf_hw_cache_id
pub const PERF_COUNT_HW_CACHE_L1D: u32 = 0;
pub const PERF_COUNT_HW_CACHE_L1I: u32 = 1;
pub const PERF_COUNT_HW_CACHE_LL: u32 = 2;
pub const PERF_COUNT_HW_CACHE_DTLB: u32 = 3;
pub const PERF_COUNT_HW_CACHE_ITLB: u32 = 4;
pub const PERF_COUNT_HW_CACHE_BPU: u32 = 5;
pub const PERF_COUNT_HW_CACHE_NODE: u32 = 6;

// enum perf_hw_cache_op_id
pub const PERF_COUNT_HW_CACHE_OP_READ: u32 = 0;
pub const PERF_COUNT_HW_CACHE_OP_WRITE: u32 = 1;
pub const PERF_COUNT_HW_CACHE_OP_PREFETCH: u32 = 2;

// enum perf_hw_cache_op_result_id
pub const PERF_COUNT_HW_CACHE_RESULT_ACCESS: u32 = 0;
pub const PERF_COUNT_HW_CACHE_RESULT_MISS: u32 = 1;

// enum perf_event_read_format
pub const PERF_FORMAT_TOTAL_TIME_ENABLED: u32 = 1 << 0;
pub const PERF_FORMAT_TOTAL_TIME_RUNNING: u32 = 1 << 1;
pub const PERF_FORMAT_ID: u32 = 1 << 2;
pub const PERF_FORMAT_GROUP: u32 = 1 << 3;

// _IOC_NONE sits in the direction bits, which differ per architecture.
#[cfg(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
))]
const IOC_NONE: u32 = 1 << 29;
#[cfg(not(any(
    target_arch = "powerpc",
    target_arch = "powerpc64",
    target_arch = "mips",
    target_arch = "mips64",
    target_arch = "sparc",
    target_arch = "sparc64",
)))]
const IOC_NONE: u32 = 0;

/// `_IO(ty, nr)`
const fn io(ty: u8, nr: u32) -> u32 {
    IOC_NONE | (ty as u32) << 8 | nr
}

pub const PERF_EVENT_IOC_ENABLE: u32 = io(b'$', 0);
pub const PERF_EVENT_IOC_DISABLE: u32 = io(b'$', 1);
pub const PERF_EVENT_IOC_RESET: u32 = io(b'$', 3);

// enum perf_event_ioc_flags
pub const PERF_IOC_FLAG_GROUP: u32 = 1 << 0;

pub const PERF_FLAG_FD_CLOEXEC: u32 = 1 << 3;

pub const PERF_ATTR_SIZE_VER1: u32 = 72;

/// `struct perf_event_attr` up to `PERF_ATTR_SIZE_VER1`.
///
/// The kernel accepts any published size, so the fields added after `config2`
/// are simply left out.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub flags: u64,
    pub wakeup_events: u32,
    pub bp_type: u32,
    pub config1: u64,
    pub config2: u64,
}

macro_rules! bit {
    ($($get:ident, $set:ident, $bit:expr;)+) => {
        impl perf_event_attr {
            $(
            #[inline]
            pub fn $get(&self) -> u64 {
                (self.flags >> $bit) & 1
            }

            #[inline]
            pub fn $set(&mut self, val: u64) {
                self.flags = (self.flags & !(1 << $bit)) | ((val & 1) << $bit);
            }
            )+
        }
    };
}

bit! {
    disabled, set_disabled, 0;
    inherit, set_inherit, 1;
    pinned, set_pinned, 2;
    exclusive, set_exclusive, 3;
    exclude_user, set_exclude_user, 4;
    exclude_kernel, set_exclude_kernel, 5;
    exclude_hv, set_exclude_hv, 6;
    exclude_idle, set_exclude_idle, 7;
}

const _: () = assert!(size_of::<perf_event_attr>() == PERF_ATTR_SIZE_VER1 as usize);
