//! Utility functions

/// Technically Linux requires sysfs to be at `/sys`, so the PWM class is
/// always at `/sys/class/pwm`.
///
/// Kept in one place so a nonstandard layout only needs one change.
pub(crate) const PWM_CLASS_PATH: &str = "/sys/class/pwm";
