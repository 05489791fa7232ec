//! Atomic hardware counter groups over one explicit start/stop interval.
//!
//! A [session][count::CounterGroupSession] opens a leader counter and its
//! members as one kernel counter group with `perf_event_open`, enables and
//! disables them together, and collects every value with a single grouped
//! read, so the counts cover exactly the same instructions.
//!
//! ## Example
//!
//! Count cycles, retired instructions and L1D read misses of a loop.
//!
//! ```rust,no_run
//! use perf_group_session::count::CounterGroupSession;
//! use perf_group_session::event::hw::{Hardware, Op, OpResult, Type};
//! use perf_group_session::event::CounterSpec;
//! use perf_group_session::report::report;
//!
//! let mut session = CounterGroupSession::new(
//!     Hardware::CpuCycle.into(),
//!     [
//!         CounterSpec::from(Hardware::Instr),
//!         CounterSpec::from(Hardware::Cache(Type::L1d, Op::Read, OpResult::Miss)),
//!     ],
//! );
//!
//! session.start().unwrap(); // Open the group and start counting.
//! let sum: u64 = (0..100_000_000u64).map(|i| i * i).sum();
//! std::hint::black_box(sum);
//! let result = session.stop(); // Stop, read and close the group.
//!
//! // "cycles=..., instructions=..., l1_misses=..."
//! println!("{}", report(&result));
//! ```
//!
//! Sessions are plain values: several threads may each own one. A session
//! still holding its counters when dropped closes them.

pub mod config;
pub mod count;
pub mod event;
mod ffi;
pub mod report;
