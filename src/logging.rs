use core::fmt;

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq)]
#[repr(u8)]
pub enum LogLevel {
    // Debug: very specific, low-level information.
    Debug = 0,
    // Info: general information, status messages, etc.
    Info = 1,
    // Warning: abnormal conditions that may require attention
    Warning = 2,
    // Severe: abnormal conditions that may directly impair the operation of the loader
    Severe = 3,
    // Fatal: things can no longer continue in this state. Usually followed by a panic
    Fatal = 4,
}
impl LogLevel {
    pub fn name(self) -> &'static str {
        use LogLevel::*;
        match self {
            Debug => "DBG",
            Info => "INFO",
            Warning => "WARN",
            Severe => "SEVERE",
            Fatal => "FATAL ERROR",
        }
    }
}

use crate::coredrivers::serial_uart::SERIAL1;
use crate::util::LockedWrite;

// There is no heap at this stage, so everything formats straight into the
// serial writer via format_args - no intermediate string.
pub fn _loader_log(level: LogLevel, component: &str, args: fmt::Arguments) {
    let _ = SERIAL1.write_fmt(format_args!(
        "[{}] {} - {}\r\n",
        level.name(),
        component,
        args
    ));
}

macro_rules! klog {
    ($level:ident, $component:ident, $($arg:tt)*) => {
        {
            use crate::logging::LogLevel::*;
            use crate::logging::contexts::*;
            if const { ($level as u8) >= ($component as u8) } {
                crate::logging::_loader_log($level, stringify!($component), core::format_args!($($arg)*))
            }
        }
    };
}
pub(crate) use klog;

// For use in emergency situations, i.e. the panic handler.
// Uses no heap allocation and forcibly bypasses the serial lock - whoever
// held it is not coming back to release it.
macro_rules! emergency_log {
    ($($msg:tt)*) => {
        crate::lowlevel::without_interrupts(|| {
            use crate::coredrivers::serial_uart::SERIAL1;
            use core::fmt::Write;
            let mut serial = unsafe { loop { match SERIAL1.inner.try_lock() {
                    Some(lock) => break lock,
                    None => SERIAL1.inner.force_unlock(),
                }
            }};
            let _ = write!(serial, $($msg)*);
        })
    }
}
pub(crate) use emergency_log;

// Logging contexts allow filtered log levels to be configured per-context
pub mod contexts {
    use super::LogLevel;
    use LogLevel::*;
    macro_rules! def_context {
        ($id: ident, $parent: ident, $filter_level: ident) => {
            pub const $id: LogLevel = $filter_level;
        };
        ($id: ident, $parent: ident) => {
            pub const $id: LogLevel = $parent;
        };
    }

    pub const DEFAULT_MIN_LOG_LEVEL: LogLevel = Info;
    pub const ROOT: LogLevel = DEFAULT_MIN_LOG_LEVEL;

    def_context!(BOOT, ROOT); // boot-time top-level progress messages
    def_context!(COREDRIVERS, ROOT);
      def_context!(COREDRIVERS_SERIAL, COREDRIVERS);
      def_context!(COREDRIVERS_VGA, COREDRIVERS);
}

#[cfg(test)]
mod tests {
    use super::contexts;
    use super::LogLevel::{self, *};

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Debug < Info);
        assert!(Info < Warning);
        assert!(Warning < Severe);
        assert!(Severe < Fatal);
    }

    #[test]
    fn level_names() {
        assert_eq!(Info.name(), "INFO");
        assert_eq!(Fatal.name(), "FATAL ERROR");
    }

    // the filter in klog! compares level against context with >=
    #[test]
    fn default_filter_drops_debug_and_passes_info() {
        assert!((Debug as u8) < (contexts::BOOT as u8));
        assert!((Info as u8) >= (contexts::BOOT as u8));
        assert!((Fatal as u8) >= (contexts::BOOT as u8));
    }

    #[test]
    fn contexts_inherit_from_parent() {
        assert_eq!(contexts::COREDRIVERS_SERIAL as u8, contexts::COREDRIVERS as u8);
        assert_eq!(contexts::COREDRIVERS_VGA as u8, contexts::ROOT as u8);
    }

    #[test]
    fn levels_roundtrip_as_u8() {
        let levels: [LogLevel; 5] = [Debug, Info, Warning, Severe, Fatal];
        for (i, l) in levels.iter().enumerate() {
            assert_eq!(*l as u8, i as u8);
        }
    }
}
