//! Interface to PWM chips exposed through sysfs.
//!
//! # Examples
//!
//! Drive a 50Hz signal at half duty on channel 0 of chip 0
//!
//! ```rust,no_run
//! # use linpwm::pwm::PwmChip;
//!
//! let chip = PwmChip::new(0);
//! chip.export().unwrap();
//! chip.set_period(20_000_000).unwrap();
//! chip.set_duty_cycle(10_000_000).unwrap();
//! chip.enable().unwrap();
//! ```
//!
//! # Implementation
//!
//! This uses the sysfs class interface, documented [here][1].
//!
//! A chip may expose several channels, but this interface deliberately
//! addresses channel 0 only, which the kernel presents as `pwm0` once
//! exported.
//!
//! [1]: https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-pwm
use crate::{error::PwmError, util::PWM_CLASS_PATH};
use nix::unistd::close;
use rustix::fs::{access, Access};
use std::{
    fs::OpenOptions,
    io::Write,
    os::unix::io::IntoRawFd,
    path::{Path, PathBuf},
};
use tracing::debug;

pub type Result<T, E = PwmError> = std::result::Result<T, E>;

/// Channel number written to the `export`/`unexport` controls.
const CHANNEL: &str = "0";

/// Channel 0 of a PWM chip under the sysfs PWM class.
///
/// Holds no kernel state. The chip's actual state lives in the driver and
/// is only reachable through the control files, which each method opens
/// and closes on its own.
#[derive(Debug, Clone)]
pub struct PwmChip {
    /// Chip index, the `N` in `pwmchipN`
    chip: u16,

    /// Class directory the chip lives under
    base: PathBuf,
}

// Public
impl PwmChip {
    /// Channel 0 of `pwmchip<chip>` under `/sys/class/pwm`.
    pub fn new(chip: u16) -> Self {
        Self::with_base(PWM_CLASS_PATH, chip)
    }

    /// Like [`PwmChip::new`], against an alternate class directory.
    ///
    /// Useful for testing against a simulated hierarchy.
    pub fn with_base<P: AsRef<Path>>(base: P, chip: u16) -> Self {
        Self {
            chip,
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Chip index
    pub fn chip(&self) -> u16 {
        self.chip
    }

    /// Whether channel 0 is currently exported.
    ///
    /// True iff the `pwm0` directory exists under the chip.
    pub fn exported(&self) -> bool {
        access(&self.channel_dir(), Access::EXISTS).is_ok()
    }

    /// Export channel 0, making its control files appear.
    ///
    /// Idempotent. If the channel is already exported nothing is written
    /// and the call succeeds.
    ///
    /// # Errors
    ///
    /// - If the chip directory doesn't exist, or the `export` control
    ///   couldn't be opened (driver not loaded, missing permission)
    /// - If writing or closing the control fails
    pub fn export(&self) -> Result<()> {
        if self.exported() {
            debug!("pwmchip{} already exported", self.chip);
            return Ok(());
        }
        self.write_control(&self.chip_dir().join("export"), CHANNEL)
    }

    /// Unexport channel 0, tearing its control files down.
    ///
    /// Idempotent. If the channel isn't exported nothing is written and
    /// the call succeeds.
    ///
    /// # Errors
    ///
    /// - See [`PwmChip::export`]
    pub fn unexport(&self) -> Result<()> {
        if !self.exported() {
            debug!("pwmchip{} already unexported", self.chip);
            return Ok(());
        }
        self.write_control(&self.chip_dir().join("unexport"), CHANNEL)
    }

    /// Start output on channel 0.
    ///
    /// There is no disable counterpart, unexport the channel instead.
    ///
    /// # Errors
    ///
    /// - [`PwmError::NotExported`] if the channel isn't exported. No file
    ///   is touched in that case.
    /// - If opening, writing, or closing the control fails
    pub fn enable(&self) -> Result<()> {
        self.channel_control("enable", "1")
    }

    /// Set the full cycle duration of channel 0, in nanoseconds.
    ///
    /// # Errors
    ///
    /// - See [`PwmChip::enable`]
    pub fn set_period(&self, period_ns: u32) -> Result<()> {
        self.channel_control("period", &period_ns.to_string())
    }

    /// Set the high-level duration within the period of channel 0, in
    /// nanoseconds.
    ///
    /// Whether `duty_ns` greater than the configured period is rejected
    /// is up to the driver; no check is made here.
    ///
    /// # Errors
    ///
    /// - See [`PwmChip::enable`]
    pub fn set_duty_cycle(&self, duty_ns: u32) -> Result<()> {
        self.channel_control("duty_cycle", &duty_ns.to_string())
    }
}

// Private
impl PwmChip {
    fn chip_dir(&self) -> PathBuf {
        self.base.join(format!("pwmchip{}", self.chip))
    }

    fn channel_dir(&self) -> PathBuf {
        self.chip_dir().join("pwm0")
    }

    /// Write to a channel attribute, failing fast if not exported
    fn channel_control(&self, attr: &str, value: &str) -> Result<()> {
        if !self.exported() {
            return Err(PwmError::NotExported(self.chip));
        }
        self.write_control(&self.channel_dir().join(attr), value)
    }

    /// One attempt each of open, write, close. Any failing step fails the
    /// whole operation.
    fn write_control(&self, path: &Path, value: &str) -> Result<()> {
        debug!("writing `{}` to `{}`", value, path.display());
        let mut file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| PwmError::Open(path.into(), e))?;
        // A failed write drops `file`, which still releases the
        // descriptor, just without surfacing close errors.
        file.write_all(value.as_bytes())
            .map_err(|e| PwmError::Write(path.into(), e))?;
        close(file.into_raw_fd()).map_err(|e| PwmError::Close(path.into(), e.into()))?;
        Ok(())
    }
}
