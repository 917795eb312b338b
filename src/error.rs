use thiserror::Error;

/// Configuration errors caught before any parallel work starts.
///
/// These are caller mistakes, not runtime faults: batch mode turns them
/// into a diagnostic plus a non-zero exit, interactive mode re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("matrix size {n} must be divisible by block size {neib} for the blocked method")]
    BlockSize { n: usize, neib: usize },
    #[error("unknown method selector {0} (1 = blocked, 2 = standard, 3 = sequential)")]
    UnknownMethod(u32),
    #[error("matrix size must be positive")]
    ZeroSize,
    #[error("block size must be positive")]
    ZeroBlockSize,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
