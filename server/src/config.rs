use std::time::Duration;

use kernel::interface::timeout::OperationTimeout;
use error_stack::Report;
use kernel::KernelError;

const PORT: &str = "PORT";
const BOOK_OPERATION_TIMEOUT_MS: &str = "BOOK_OPERATION_TIMEOUT_MS";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_OPERATION_TIMEOUT_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub operation_timeout: OperationTimeout,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let port = driver::env_or(PORT, DEFAULT_PORT)?;
        let timeout = driver::env_or(BOOK_OPERATION_TIMEOUT_MS, DEFAULT_OPERATION_TIMEOUT_MS)?;
        Ok(Self {
            port,
            operation_timeout: operation_timeout(timeout)?,
        })
    }
}

fn operation_timeout(millis: u64) -> error_stack::Result<OperationTimeout, KernelError> {
    if millis == 0 {
        return Err(Report::new(KernelError::Internal)
            .attach_printable(format!("`{BOOK_OPERATION_TIMEOUT_MS}` must be greater than 0")));
    }
    Ok(OperationTimeout::new(Duration::from_millis(millis)))
}
