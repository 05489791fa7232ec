use super::{Error, Result};

const WORD: usize = size_of::<u64>();

/// One record of a grouped read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Kernel-assigned event id of the counter.
    pub id: u64,
    pub value: u64,
}

/// Decoded result of a grouped read.
///
/// `entries[i]` belongs to the `i`-th counter of the session, the leader first.
/// The mapping is positional: the kernel delivers siblings in the order they
/// joined the group, which is the open order. The ids are kept for callers
/// that want to check this, but are never used to reorder entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupReadResult {
    /// Number of records the kernel reported in the header.
    pub record_count: u64,
    pub entries: Vec<Entry>,
}

impl GroupReadResult {
    /// Counter values in spec order.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|it| it.value)
    }

    /// Returns the value of the counter at `index`.
    pub fn value(&self, index: usize) -> Option<u64> {
        self.entries.get(index).map(|it| it.value)
    }
}

/// Size of the buffer a grouped read of `group_size` counters needs.
pub fn read_buf_size(group_size: usize) -> usize {
    WORD + group_size * 2 * WORD
}

// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h#L344
// With `PERF_FORMAT_GROUP | PERF_FORMAT_ID`:
// struct read_format {
//     u64 nr;
//     {
//         u64 value;
//         u64 id;
//     } cntr[nr];
// };
/// Decodes the bytes returned by a grouped read on the leader.
///
/// `buf` holds exactly the bytes the read call reported. Records beyond the
/// first `expected` are ignored.
pub fn decode(buf: &[u8], expected: usize) -> Result<GroupReadResult> {
    let mut words = buf.chunks_exact(WORD).map(word);

    let Some(record_count) = words.next() else {
        return Err(Error::Corrupt { expected, got: 0 });
    };
    if record_count < expected as u64 {
        return Err(Error::Corrupt {
            expected,
            got: record_count as _,
        });
    }

    let entries: Vec<_> = (0..expected)
        .map_while(|_| {
            let value = words.next()?;
            let id = words.next()?;
            Some(Entry { id, value })
        })
        .collect();
    // Short read: the header promised more than the buffer holds.
    if entries.len() < expected {
        return Err(Error::Corrupt {
            expected,
            got: entries.len(),
        });
    }

    Ok(GroupReadResult {
        record_count,
        entries,
    })
}

fn word(chunk: &[u8]) -> u64 {
    let mut bytes = [0; WORD];
    bytes.copy_from_slice(chunk);
    u64::from_ne_bytes(bytes)
}
