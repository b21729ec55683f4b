//! Runtime configuration and result types.

/// Sizes and limits for one interpreter instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub heap_cells: usize,
    pub root_stack_size: usize,
    /// Most `Pending` cells a collection tolerates.
    pub max_pending: usize,
    /// Stop after this many output elements. `None` runs to completion.
    pub step_limit: Option<u64>,
}

impl RuntimeConfig {
    /// The small embedded target the image format is built for.
    pub fn target() -> Self {
        Self {
            heap_cells: 6 * 1024,
            root_stack_size: 512,
            max_pending: 8,
            step_limit: None,
        }
    }

    /// A roomier profile for running on a workstation.
    pub fn host() -> Self {
        Self {
            heap_cells: 8 * 1024 * 1024,
            root_stack_size: 2560,
            ..Self::target()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::target()
    }
}

/// Result of running a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// Exit code requested by the program; `None` if the step limit hit first.
    pub exit_code: Option<u32>,
    pub bytes_written: u64,
}
