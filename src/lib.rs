//! High level bindings to the Linux sysfs PWM interface
//!
//! # Implementation details
//!
//! The kernel exposes PWM controllers as files under `/sys/class/pwm`,
//! so this library requires sysfs to exist and the platform's PWM driver
//! to be loaded.
//!
//! A successful write to a control file means the kernel accepted it,
//! not that the hardware applied the requested state. Nothing is read
//! back to confirm.
//!
//! The interface is documented [here][1], and this crate attempts to
//! document it correctly on a best effort basis.
//!
//! [1]: https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-pwm
#![doc(html_root_url = "https://docs.rs/linpwm/0.1.0")]

pub mod error;
pub mod pwm;
mod util;
