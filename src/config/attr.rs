use super::Opts;
use crate::event::CounterSpec;
use crate::ffi::{bindings as b, Attr};

/// Every descriptor requests grouped reads with ids, so the leader's read
/// returns `{ nr, { value, id }[nr] }`.
pub(crate) const READ_FORMAT: u64 = (b::PERF_FORMAT_GROUP | b::PERF_FORMAT_ID) as _;

/// Builds the attr of the group leader, created disabled.
pub(crate) fn leader(spec: &CounterSpec, opts: &Opts) -> Attr {
    let mut attr = from(spec, opts);
    attr.set_disabled(1);
    attr
}

/// Builds the attr of a group member.
///
/// Members are created enabled and only start counting once the leader is
/// enabled.
pub(crate) fn member(spec: &CounterSpec, opts: &Opts) -> Attr {
    let mut attr = from(spec, opts);
    attr.set_disabled(0);
    attr
}

fn from(spec: &CounterSpec, opts: &Opts) -> Attr {
    let mut attr = Attr {
        size: size_of::<Attr>() as _,
        ..Default::default()
    };

    attr.type_ = spec.ty();
    attr.config = spec.config();
    attr.read_format = READ_FORMAT;

    macro_rules! when {
        ($bool:ident, $then:tt) => {
            if opts.exclude.$bool {
                attr.$then(1);
            }
        };
    }
    when!(user, set_exclude_user);
    when!(kernel, set_exclude_kernel);
    when!(hv, set_exclude_hv);
    when!(idle, set_exclude_idle);

    attr
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Exclude;
    use crate::event::hw::Hardware;

    #[test]
    fn test_leader_attr() {
        let attr = leader(&Hardware::CpuCycle.into(), &Opts::default());
        assert_eq!(attr.size, b::PERF_ATTR_SIZE_VER1);
        assert_eq!(attr.type_, b::PERF_TYPE_HARDWARE);
        assert_eq!(attr.config, 0);
        assert_eq!(attr.disabled(), 1);
        assert_eq!(attr.exclude_kernel(), 1);
        assert_eq!(attr.exclude_hv(), 1);
        assert_eq!(attr.exclude_user(), 0);
        assert_eq!(attr.read_format, 0b1100);
    }

    #[test]
    fn test_member_attr() {
        let attr = member(&Hardware::Instr.into(), &Opts::default());
        assert_eq!(attr.disabled(), 0);
        assert_eq!(attr.config, 1);
        assert_eq!(attr.read_format, READ_FORMAT);
    }

    #[test]
    fn test_exclude_flags() {
        let opts = Opts {
            exclude: Exclude {
                user: true,
                kernel: false,
                hv: false,
                idle: true,
            },
            ..Default::default()
        };
        let attr = member(&Hardware::Instr.into(), &opts);
        assert_eq!(attr.exclude_user(), 1);
        assert_eq!(attr.exclude_kernel(), 0);
        assert_eq!(attr.exclude_hv(), 0);
        assert_eq!(attr.exclude_idle(), 1);
    }
}
