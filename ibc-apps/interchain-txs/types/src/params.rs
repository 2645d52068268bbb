/// Default relative timeout of a sent transaction, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default maximum number of messages in one sent transaction.
pub const DEFAULT_MAX_MSGS: u64 = 16;

/// Parameters of the interchain transactions relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Relative timeout, in seconds, used when a submission leaves it at 0.
    pub default_timeout: u64,
    pub max_msgs: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_TIMEOUT_SECS,
            max_msgs: DEFAULT_MAX_MSGS,
        }
    }
}
