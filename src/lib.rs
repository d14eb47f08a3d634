#![no_std]

// Declares an architecture-specific module backed by a per-arch directory.
// Building for an architecture without an implementation is a hard error:
// the halt directive is a platform instruction and there is no portable
// fallback worth pretending to have.
#[macro_export]
macro_rules! arch_specific_module {
    ($v:vis mod $name:ident) => {
        $v mod $name { cfg_if::cfg_if! {
            if #[cfg(target_arch = "x86_64")] {
                mod x86_64;
                // self:: keeps the child module from colliding with the
                // extern crate of the same name
                pub use self::x86_64::*;
            } else {
                compile_error!(concat!("This architecture is unsupported as it does not have an implementation for the '",stringify!($name),"' module!"));
            }
        }}
    }
}

mod util;

pub mod logging;
use crate::logging::klog;

pub mod coredrivers;

arch_specific_module!(pub mod lowlevel);

#[cfg(not(test))]
mod panic;

/// One-time set-up before the CPU is parked. Nothing here may depend on a
/// heap, descriptor tables, or the display region - stage 1 guarantees none
/// of them.
fn _linit() {
    klog!(Info, BOOT, "stage 2 entered; nothing further to load, parking CPU");
}

/// Stage-2 entry point. Stage 1 jumps here directly; there is no caller to
/// return to and no return address worth trusting.
///
/// Once this runs, the only thing this core ever does again is re-issue the
/// wait directive (see `lowlevel::park`). Any path out of this function
/// short of an external reset is a bug.
#[no_mangle]
pub extern "C" fn _lmain() -> ! {
    _linit();

    lowlevel::park()
}
