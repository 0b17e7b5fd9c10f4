//! Global constants for gapedit

pub mod buffer {
    /// Capacity of the buffer allocated for a file that does not exist yet
    pub const DEFAULT_CAPACITY: usize = 1024;
}

pub mod input {
    /// Interval between non-blocking key polls in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 13;

    /// Upper bound on tokens held by a pending chord
    pub const MAX_CHORD_TOKENS: usize = 8;

    /// Chord that abandons a pending sequence
    pub const CANCEL_TOKEN: &str = "C-g";
}

pub mod env {
    pub const POLL_MS: &str = "GAPEDIT_POLL_MS";
    pub const CAPACITY: &str = "GAPEDIT_CAPACITY";
    pub const LOG_FILE: &str = "GAPEDIT_LOG_FILE";
    pub const LOG_FILTER: &str = "GAPEDIT_LOG";
}

pub mod ui {
    /// Rows reserved below the buffer window for the status line
    pub const STATUS_ROWS: usize = 1;

    /// Cell drawn for bytes with no printable form
    pub const PLACEHOLDER: char = '?';
}

pub mod messages {
    pub const SAVED: &str = "buffer saved";
    pub const EXPANDED: &str = "expanded buffer";
    pub const CANCELLED: &str = "cancelled";
}
