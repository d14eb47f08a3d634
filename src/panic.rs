use core::panic::PanicInfo;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::logging::emergency_log;

// Set once the first panic is underway. If a second panic arrives (most
// likely raised by the reporting path itself), there is nothing left worth
// trying - just stop.
static ABORTING: AtomicBool = AtomicBool::new(false);

/// This stage has no caller to report failure to and no display driver to
/// paint it with; a panic is reported once over serial and then the core is
/// halted with interrupts masked. From the outside this is indistinguishable
/// from a successful park, which is inherent to the stage.
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    if ABORTING.swap(true, Ordering::SeqCst) {
        crate::lowlevel::halt();
    }

    emergency_log!("\r\n\r\n*** LOADER PANIC (unrecoverable): {}\r\n", info);
    emergency_log!("End of panic. Halting.\r\n");

    crate::lowlevel::halt()
}
