use std::iter;
use std::mem;

use tracing::{debug, warn};

use super::read::{decode, read_buf_size, GroupReadResult};
use super::sys::{Control, Linux, Sys};
use super::{Error, Result};
use crate::config::{self, Opts};
use crate::event::CounterSpec;

/// Lifecycle state of a [`CounterGroupSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Active,
    Stopped,
}

// Descriptors only exist while the session is active.
enum Phase<F> {
    Idle,
    Active(Group<F>),
    Stopped,
}

struct Group<F> {
    leader: F,
    members: Vec<F>,
}

/// One group of hardware counters measured over one start/stop interval.
///
/// The first spec becomes the group leader, the rest are opened as members
/// of its group. Enabling, disabling and resetting go through the leader, so
/// all counters count the same stretch of execution, and the result is taken
/// with a single grouped read.
///
/// ```text
/// Idle --start--> Active --start (re-arm)--> Active --stop--> Stopped
/// ```
///
/// * `start` on an idle session opens the group. If any open fails, every
///   descriptor opened so far is closed and the session stays idle.
/// * `start` on an active session *re-arms* it: the counts are reset and the
///   group is enabled again, the descriptors are kept.
/// * `stop` disables the group, reads and decodes it, then closes every
///   descriptor whatever the outcome. A stopped session cannot be restarted,
///   and stopping it again reports [`Error::NotStarted`].
///
/// A session still holding descriptors when dropped closes them.
///
/// # Examples
///
/// ```rust,no_run
/// use perf_group_session::count::CounterGroupSession;
/// use perf_group_session::report::report;
///
/// let mut session = CounterGroupSession::default_profile();
///
/// session.start().unwrap();
/// std::hint::black_box((0..1_000_000u64).map(|it| it * it).sum::<u64>());
/// let result = session.stop();
///
/// println!("{}", report(&result));
/// ```
pub struct CounterGroupSession<S: Sys = Linux> {
    sys: S,
    opts: Opts,
    // Never empty, the first one is the leader.
    specs: Vec<CounterSpec>,
    phase: Phase<S::Fd>,
    read_buf: Vec<u8>,
}

impl CounterGroupSession<Linux> {
    /// Creates a session over the `perf_event_open` syscall.
    pub fn new(leader: CounterSpec, members: impl IntoIterator<Item = CounterSpec>) -> Self {
        Self::with_sys(Linux, leader, members)
    }

    /// Cycles, retired instructions and L1D read misses, in that order.
    pub fn default_profile() -> Self {
        let [leader, members @ ..] = CounterSpec::default_profile();
        Self::new(leader, members)
    }
}

impl<S: Sys> CounterGroupSession<S> {
    /// Creates a session over a custom OS layer.
    pub fn with_sys(
        sys: S,
        leader: CounterSpec,
        members: impl IntoIterator<Item = CounterSpec>,
    ) -> Self {
        let specs: Vec<_> = iter::once(leader).chain(members).collect();
        let read_buf = vec![0; read_buf_size(specs.len())];

        Self {
            sys,
            opts: Opts::default(),
            specs,
            phase: Phase::Idle,
            read_buf,
        }
    }

    /// Replaces the session options. Takes effect on the next open.
    pub fn with_opts(mut self, opts: Opts) -> Self {
        self.opts = opts;
        self
    }

    pub fn opts(&self) -> &Opts {
        &self.opts
    }

    /// The counters of this session in open order, the leader first.
    pub fn specs(&self) -> &[CounterSpec] {
        &self.specs
    }

    pub fn state(&self) -> State {
        match self.phase {
            Phase::Idle => State::Idle,
            Phase::Active(_) => State::Active,
            Phase::Stopped => State::Stopped,
        }
    }

    /// Opens the group and starts counting, or re-arms an active group.
    pub fn start(&mut self) -> Result<()> {
        match &self.phase {
            Phase::Idle => {
                let group = self.open()?;
                if let Err(e) = self.arm(&group) {
                    warn!(error = %e, "failed to enable counter group, rolling back");
                    self.close(group);
                    return Err(Error::ControlFailed(e));
                }
                debug!(counters = self.specs.len(), "counter group started");
                self.phase = Phase::Active(group);
                Ok(())
            }
            Phase::Active(group) => {
                self.arm(group).map_err(Error::ControlFailed)?;
                debug!(counters = self.specs.len(), "counter group re-armed");
                Ok(())
            }
            Phase::Stopped => Err(Error::Stopped),
        }
    }

    /// Stops counting, reads the group and releases every descriptor.
    pub fn stop(&mut self) -> Result<GroupReadResult> {
        let group = match mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Active(group) => group,
            Phase::Idle => {
                self.phase = Phase::Idle;
                return Err(Error::NotStarted);
            }
            // Descriptors are gone, same as never started.
            Phase::Stopped => return Err(Error::NotStarted),
        };

        let result = self.collect(&group);
        self.close(group);

        match &result {
            Ok(_) => debug!(counters = self.specs.len(), "counter group stopped"),
            Err(e) => warn!(error = %e, "counter group stopped with error"),
        }
        result
    }

    /// Counts `f` from a fresh start to stop.
    pub fn measure<T>(&mut self, f: impl FnOnce() -> T) -> Result<(T, GroupReadResult)> {
        self.start()?;
        let output = f();
        let result = self.stop()?;
        Ok((output, result))
    }

    fn open(&self) -> Result<Group<S::Fd>> {
        let target = &self.opts.target;

        let attr = config::leader(&self.specs[0], &self.opts);
        let leader = self.sys.open(&attr, target, None).map_err(|source| {
            warn!(index = 0, error = %source, "failed to open group leader");
            Error::OpenFailed { index: 0, source }
        })?;

        let mut members = Vec::with_capacity(self.specs.len() - 1);
        for (index, spec) in self.specs.iter().enumerate().skip(1) {
            let attr = config::member(spec, &self.opts);
            match self.sys.open(&attr, target, Some(&leader)) {
                Ok(fd) => members.push(fd),
                Err(source) => {
                    warn!(index, error = %source, "failed to open group member, rolling back");
                    self.close(Group { leader, members });
                    return Err(Error::OpenFailed { index, source });
                }
            }
        }

        Ok(Group { leader, members })
    }

    fn arm(&self, group: &Group<S::Fd>) -> std::io::Result<()> {
        self.sys.control(&group.leader, Control::Reset)?;
        self.sys.control(&group.leader, Control::Enable)
    }

    fn collect(&mut self, group: &Group<S::Fd>) -> Result<GroupReadResult> {
        self.sys
            .control(&group.leader, Control::Disable)
            .map_err(Error::ControlFailed)?;

        let bytes = self
            .sys
            .read(&group.leader, &mut self.read_buf)
            .map_err(Error::ReadFailed)?;
        let bytes = bytes.min(self.read_buf.len());

        decode(&self.read_buf[..bytes], self.specs.len())
    }

    fn close(&self, group: Group<S::Fd>) {
        let Group { leader, members } = group;
        for fd in members.into_iter().rev().chain(iter::once(leader)) {
            if let Err(e) = self.sys.close(fd) {
                warn!(error = %e, "failed to close counter descriptor");
            }
        }
    }
}

impl<S: Sys> Drop for CounterGroupSession<S> {
    fn drop(&mut self) {
        if let Phase::Active(group) = mem::replace(&mut self.phase, Phase::Stopped) {
            debug!("closing counter group of a dropped session");
            self.close(group);
        }
    }
}
