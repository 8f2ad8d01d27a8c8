//! Pipeline stages and the occupancy rule.

use std::fmt;

use serde::Serialize;

/// One of the five fixed pipeline stages, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    /// Instruction fetch (IF).
    Fetch,
    /// Instruction decode (ID).
    Decode,
    /// Execute (EX).
    Execute,
    /// Memory access (MEM).
    Memory,
    /// Writeback (WB).
    Writeback,
}

impl Stage {
    /// Number of pipeline stages.
    pub const COUNT: usize = 5;

    /// All stages in pipeline order.
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::Fetch,
        Stage::Decode,
        Stage::Execute,
        Stage::Memory,
        Stage::Writeback,
    ];

    /// 0-based stage index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stage with the given 0-based index, if in range.
    pub fn from_index(index: usize) -> Option<Stage> {
        Stage::ALL.get(index).copied()
    }

    /// Stage occupied by slot `slot` at cycle `cycle`.
    ///
    /// A slot enters fetch on cycle `slot + 1` and advances one stage per
    /// cycle, so its stage index at cycle `c` is `c - slot - 1`. Outside
    /// `[0, COUNT)` the slot is not in the pipeline: either not yet
    /// fetched or already retired.
    pub fn occupied_at(cycle: usize, slot: usize) -> Option<Stage> {
        let index = cycle.checked_sub(slot + 1)?;
        Stage::from_index(index)
    }

    /// Conventional abbreviation: IF, ID, EX, MEM, WB.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Stage::Fetch => "IF",
            Stage::Decode => "ID",
            Stage::Execute => "EX",
            Stage::Memory => "MEM",
            Stage::Writeback => "WB",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
