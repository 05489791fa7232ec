use super::hw::{Hardware, Op, OpResult, Type};
use super::{Category, CounterSpec};
use crate::ffi::bindings as b;

#[test]
fn test_hardware_config() {
    let spec = CounterSpec::from(Hardware::Instr);
    assert_eq!(spec.category, Category::Hardware);
    assert_eq!(spec.ty(), b::PERF_TYPE_HARDWARE);
    assert_eq!(spec.config(), 1);
}

#[test]
fn test_l1d_read_miss_config() {
    let spec = CounterSpec::from(Hardware::Cache(Type::L1d, Op::Read, OpResult::Miss));
    assert_eq!(spec.category, Category::HardwareCache);
    assert_eq!(spec.ty(), b::PERF_TYPE_HW_CACHE);
    // L1D | (READ << 8) | (MISS << 16)
    assert_eq!(spec.config(), 0x10000);
}

#[test]
fn test_cache_config_packs_fields() {
    let spec = CounterSpec::from(Hardware::Cache(Type::Ll, Op::Prefetch, OpResult::Miss));
    assert_eq!(spec.config(), 2 | (2 << 8) | (1 << 16));
}

#[test]
fn test_cache_config_missing_fields() {
    let spec = CounterSpec {
        category: Category::HardwareCache,
        event_code: 3,
        cache_op: None,
        cache_result: None,
    };
    assert_eq!(spec.config(), 3);
}

#[test]
fn test_default_profile() {
    let specs = CounterSpec::default_profile();
    assert_eq!(
        specs,
        [
            CounterSpec::hardware(0),
            CounterSpec::hardware(1),
            CounterSpec::hardware_cache(0, 0, 1),
        ]
    );
}
