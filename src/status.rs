//! Exit status codes for the CLI
//!
//! - 0: Success, including a tag that passes `--is-valid-syntax`
//! - 1: Usage errors, a tag failing `--is-valid-syntax`, or a tag that cannot
//!   be interpreted at all

use std::process::{ExitCode, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 1,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

impl ExitStatus {
    pub fn from_bool(success: bool) -> Self {
        if success {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_success_flag_to_status() {
        assert_eq!(ExitStatus::from_bool(true), ExitStatus::Success);
        assert_eq!(ExitStatus::from_bool(false), ExitStatus::Failure);
        assert_eq!(ExitStatus::Failure as u8, 1);
    }
}
