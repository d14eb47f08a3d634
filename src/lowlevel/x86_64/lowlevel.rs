use core::arch::asm;

/// Park this core forever with the interrupt flag left as stage 1 set it.
///
/// `hlt` suspends instruction fetch until the next wake event (hardware
/// interrupt, NMI, SMI). A wake does not mean there is work to do - an
/// interrupt handler may run and return, or the wake may carry no handler
/// at all - so the directive is re-issued immediately, every time. If
/// interrupts are disabled the core simply never wakes short of a reset.
pub fn park() -> ! {
    // SAFETY: `hlt` modifies no memory or registers; it only stops the core
    // until the next wake event, and the loop re-enters it on every wake.
    unsafe {
        loop {
            asm!("hlt");
        }
    }
}

/// Terminal stop for unrecoverable conditions (the panic path).
///
/// Unlike [`park`], this masks maskable interrupts first: once something has
/// gone wrong enough to land here, being woken to run more code is exactly
/// what we don't want.
pub fn halt() -> ! {
    // SAFETY: clearing IF on the way into a permanent halt cannot break any
    // invariant - nothing runs on this core afterwards.
    unsafe {
        asm!("cli");
    }
    park()
}

pub fn without_interrupts<R, F: FnOnce() -> R>(f: F) -> R {
    use x86_64::instructions::interrupts;
    interrupts::without_interrupts(f)
}
