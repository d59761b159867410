use error_stack::ResultExt;

use kernel::KernelError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`"))
}

/// Reads an optional variable, falling back to `default` when unset.
pub fn env_or<T>(key: &str, default: T) -> error_stack::Result<T, KernelError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(key) {
        Ok(value) => value
            .parse::<T>()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Invalid value `{value}` for `{key}`")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default),
        Err(e) => Err(e)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`")),
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use super::env_or;

    #[test]
    fn unset_variable_falls_back_to_default() {
        std::env::remove_var("DRIVER_TEST_UNSET");
        assert_eq!(env_or("DRIVER_TEST_UNSET", 5u32).unwrap(), 5);
    }

    #[test]
    fn set_variable_is_parsed() {
        std::env::set_var("DRIVER_TEST_SET", "12");
        assert_eq!(env_or("DRIVER_TEST_SET", 5u32).unwrap(), 12);
    }

    #[test]
    fn unparseable_value_is_rejected() {
        std::env::set_var("DRIVER_TEST_INVALID", "twelve");
        let report = env_or("DRIVER_TEST_INVALID", 5u32).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        std::env::set_var("DRIVER_TEST_NON_UNICODE", OsStr::from_bytes(&[0x66, 0x6f, 0x80]));
        let report = env_or("DRIVER_TEST_NON_UNICODE", 5u32).unwrap_err();
        assert_eq!(report.current_context(), &KernelError::Internal);
    }
}
