#[derive(Clone, Copy, Debug)]
pub struct All;

#[derive(Clone, Copy, Debug)]
pub struct Cpu(pub u32);

impl Cpu {
    pub const ALL: All = All;
}

#[derive(Clone, Copy, Debug)]
pub struct Proc(pub u32);

impl Proc {
    pub const ALL: All = All;
    pub const CURRENT: Proc = Proc(0);
}

/// Task and CPU a counter group is bound to.
///
/// Defaults to the calling process on any CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub(crate) pid: i32,
    pub(crate) cpu: i32,
}

impl Default for Target {
    fn default() -> Self {
        (Proc::CURRENT, Cpu::ALL).into()
    }
}

macro_rules! into_target {
    ($ty: ty, $destruct: tt, $pid: expr, $cpu: expr) => {
        impl From<$ty> for Target {
            fn from($destruct: $ty) -> Self {
                Target {
                    pid: $pid as _,
                    cpu: $cpu as _,
                }
            }
        }
    };
}

into_target!((Proc, Cpu), (Proc(pid), Cpu(cpu)), pid, cpu);
into_target!((Cpu, Proc), (Cpu(cpu), Proc(pid)), pid, cpu);

into_target!((Proc, All), (Proc(pid), _), pid, -1);
into_target!((All, Proc), (_, Proc(pid)), pid, -1);

into_target!((Cpu, All), (Cpu(cpu), _), -1, cpu);
into_target!((All, Cpu), (_, Cpu(cpu)), -1, cpu);

// `(All, All)` is rejected by the kernel:
// https://github.com/torvalds/linux/blob/v6.13/kernel/events/core.c#L12835

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_into_target() {
        assert_eq!(Target::default(), Target { pid: 0, cpu: -1 });
        assert_eq!(Target::from((Proc(42), Cpu(1))), Target { pid: 42, cpu: 1 });
        assert_eq!(Target::from((Cpu(1), Proc(42))), Target { pid: 42, cpu: 1 });
        assert_eq!(Target::from((Proc::ALL, Cpu(3))), Target { pid: -1, cpu: 3 });
        assert_eq!(Target::from((Proc(7), Cpu::ALL)), Target { pid: 7, cpu: -1 });
    }
}
