// Constants for the interpreter

/// Number of cells in a heap created with default settings
pub const DEFAULT_HEAP_SIZE: usize = 100;

/// Largest heap a run may ask for; bigger requests are capped here
pub const MAX_HEAP_SIZE: usize = 1 << 20;

/// Maximum nesting of blocks and procedure calls before a run is aborted
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Snapshot history memory limit used by the viewer (256 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Stack space kept free before recursing; below this the native stack is grown
pub const STACK_RED_ZONE: usize = 100 * 1024;

/// Size of each native stack extension
pub const STACK_GROWTH: usize = 1024 * 1024;
