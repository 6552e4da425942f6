//! Process-wide floating-point trap configuration
//!
//! When enabled, pending floating-point exception flags are cleared and the
//! hardware is told to trap on divide-by-zero, invalid-operation and overflow.
//! Traps live in the calling thread's floating-point environment and stay
//! installed until exit; the entry points are single-threaded, so that thread
//! is the whole run.
//! Only glibc Linux on x86_64 and aarch64 has the facility; everywhere else
//! installation reports [`FpTrapStatus::Unsupported`].

/// Whether an entry point should install floating-point traps at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FpTrapConfig {
    pub enabled: bool,
}

impl Default for FpTrapConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

/// Outcome of [`FpTrapConfig::install`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpTrapStatus {
    /// Configuration asked for no traps; nothing was touched
    Disabled,
    /// Flags cleared and traps enabled
    Installed,
    /// Platform or hardware cannot trap on floating-point exceptions
    Unsupported,
}

impl FpTrapConfig {
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Apply the configuration to the current process
    pub fn install(&self) -> FpTrapStatus {
        if !self.enabled {
            return FpTrapStatus::Disabled;
        }

        if sys::enable_traps() {
            tracing::debug!("floating-point traps enabled");
            FpTrapStatus::Installed
        } else {
            tracing::warn!("floating-point traps are not supported on this platform");
            FpTrapStatus::Unsupported
        }
    }
}

#[cfg(all(
    target_os = "linux",
    target_env = "gnu",
    any(target_arch = "x86_64", target_arch = "aarch64")
))]
mod sys {
    use std::ffi::c_int;

    #[cfg(target_arch = "x86_64")]
    mod fe {
        use std::ffi::c_int;
        pub const INVALID: c_int = 0x01;
        pub const DIVBYZERO: c_int = 0x04;
        pub const OVERFLOW: c_int = 0x08;
        pub const ALL_EXCEPT: c_int = 0x3d;
    }

    #[cfg(target_arch = "aarch64")]
    mod fe {
        use std::ffi::c_int;
        pub const INVALID: c_int = 0x01;
        pub const DIVBYZERO: c_int = 0x02;
        pub const OVERFLOW: c_int = 0x04;
        pub const ALL_EXCEPT: c_int = 0x1f;
    }

    #[link(name = "m")]
    unsafe extern "C" {
        fn feclearexcept(excepts: c_int) -> c_int;
        fn feenableexcept(excepts: c_int) -> c_int;
    }

    pub(super) fn enable_traps() -> bool {
        // SAFETY: both calls only modify the floating-point environment of the
        // calling thread and take plain integer masks.
        unsafe {
            feclearexcept(fe::ALL_EXCEPT);
            feenableexcept(fe::DIVBYZERO | fe::INVALID | fe::OVERFLOW) != -1
        }
    }
}

#[cfg(not(all(
    target_os = "linux",
    target_env = "gnu",
    any(target_arch = "x86_64", target_arch = "aarch64")
)))]
mod sys {
    pub(super) fn enable_traps() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled() {
        assert!(FpTrapConfig::default().enabled);
    }

    #[test]
    fn test_disabled_touches_nothing() {
        assert_eq!(FpTrapConfig::disabled().install(), FpTrapStatus::Disabled);

        // Still free to produce non-finite values afterwards
        let zero = std::hint::black_box(0.0f64);
        assert!((zero / zero).is_nan());
    }
}
