use thiserror::Error;

/// Errors raised while validating command-line input.
///
/// All of these are detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The host list contained no entries after trimming.
    #[error("host list must not be empty")]
    EmptyHostList,

    /// A host did not match `https://<label>.<label>`.
    #[error("invalid host `{0}`: expected https://<name>.<tld> without path, port or query")]
    InvalidHost(String),

    /// The request count was not an integer in `1..=u32::MAX`.
    #[error("invalid count `{0}`: must be an integer between 1 and {max}", max = u32::MAX)]
    InvalidCount(String),
}
