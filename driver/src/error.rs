use kernel::KernelError;

/// Lifts a driver-level failure into a [`KernelError`] report, classifying it on the way.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
