use std::time::Duration;

use vodca::{AsRefln, Fromln};

/// Upper bound applied to every store interaction issued by a service call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct OperationTimeout(Duration);

impl OperationTimeout {
    pub const DEFAULT: Duration = Duration::from_secs(2);

    pub fn new(timeout: impl Into<Duration>) -> Self {
        Self(timeout.into())
    }
}

impl Default for OperationTimeout {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

pub trait DependOnOperationTimeout: 'static + Sync + Send {
    fn operation_timeout(&self) -> &OperationTimeout;
}
