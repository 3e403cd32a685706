//! Exit code constants for the agentscape CLI.
//!
//! - 0: Success, including no-op outcomes (nothing to list, empty selection)
//! - 1: Error (missing template, filesystem failure, bad arguments or config)
//! - 2: Cancelled (the user declined an overwrite)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing template, filesystem failure, invalid arguments or config.
pub const ERROR: i32 = 1;

/// The user declined a prompt that guarded a write.
pub const CANCELLED: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, ERROR, CANCELLED];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(ERROR, 1);
    }
}
