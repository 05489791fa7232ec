use super::CounterSpec;
use crate::ffi::bindings as b;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    Cache(Type, Op, OpResult),
    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    Instr,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    L1d,
    L1i,
    Ll,
    Dtlb,
    Itlb,
    Bpu,
    Node,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    Read,
    Write,
    Prefetch,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpResult {
    Miss,
    Access,
}

impl From<&Hardware> for CounterSpec {
    fn from(value: &Hardware) -> Self {
        let id = match value {
            Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES,
            Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES,
            Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,

            Hardware::Cache(ty, op, result) => {
                let id = match ty {
                    Type::L1d => b::PERF_COUNT_HW_CACHE_L1D,
                    Type::L1i => b::PERF_COUNT_HW_CACHE_L1I,
                    Type::Ll => b::PERF_COUNT_HW_CACHE_LL,
                    Type::Dtlb => b::PERF_COUNT_HW_CACHE_DTLB,
                    Type::Itlb => b::PERF_COUNT_HW_CACHE_ITLB,
                    Type::Bpu => b::PERF_COUNT_HW_CACHE_BPU,
                    Type::Node => b::PERF_COUNT_HW_CACHE_NODE,
                };
                let op = match op {
                    Op::Read => b::PERF_COUNT_HW_CACHE_OP_READ,
                    Op::Write => b::PERF_COUNT_HW_CACHE_OP_WRITE,
                    Op::Prefetch => b::PERF_COUNT_HW_CACHE_OP_PREFETCH,
                };
                let op_result = match result {
                    OpResult::Miss => b::PERF_COUNT_HW_CACHE_RESULT_MISS,
                    OpResult::Access => b::PERF_COUNT_HW_CACHE_RESULT_ACCESS,
                };
                return CounterSpec::hardware_cache(id as _, op as _, op_result as _);
            }

            Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES,
            Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES,

            Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,
            Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,

            Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
            Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,

            Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,
        };

        CounterSpec::hardware(id as _)
    }
}

impl From<Hardware> for CounterSpec {
    fn from(value: Hardware) -> Self {
        (&value).into()
    }
}
