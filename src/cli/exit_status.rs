use std::process::ExitCode;

/// Process exit status of a tolk invocation.
///
/// - `Success` (0): command completed, no errors (warnings allowed)
/// - `Failure` (1): `check` found at least one error
/// - `Error` (2): tolk itself failed (unreadable config, bad arguments, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a completed command that reported `error_count` errors.
    pub fn from_error_count(error_count: usize) -> Self {
        if error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn warnings_alone_succeed() {
        assert_eq!(ExitStatus::from_error_count(0), ExitStatus::Success);
        assert_eq!(ExitStatus::from_error_count(3), ExitStatus::Failure);
    }
}
