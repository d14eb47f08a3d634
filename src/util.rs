pub trait LockedNoInterrupts {
    type Wraps;
    fn with_lock<R, F: FnOnce(spin::MutexGuard<Self::Wraps>) -> R>(&self, f: F) -> R;
}

// Wraps a value in a spin mutex whose acquisitions always run with
// interrupts masked. Without this, an interrupt handler spinning on the same
// lock as the code it interrupted deadlocks the core.
macro_rules! mutex_no_interrupts {
    ($name:ident, $wraps:ty) => {
        use crate::util::LockedNoInterrupts;
        #[repr(transparent)]
        pub struct $name {
            // exposed so the emergency logging path can force the lock open
            pub(crate) inner: spin::Mutex<$wraps>,
        }
        impl $name {
            pub fn wraps(inner: $wraps) -> Self {
                Self {
                    inner: spin::Mutex::new(inner),
                }
            }
        }
        impl LockedNoInterrupts for $name {
            type Wraps = $wraps;
            fn with_lock<R, F: FnOnce(spin::MutexGuard<Self::Wraps>) -> R>(&self, f: F) -> R {
                crate::lowlevel::without_interrupts(|| f(self.inner.lock()))
            }
        }
    };
}
pub(crate) use mutex_no_interrupts;

use core::fmt::Write;

// Lets write!() target a locked writer through &self - the lock is taken and
// released around each write instead of holding &mut across calls.
pub trait LockedWrite {
    fn write_str(&self, s: &str) -> Result<(), core::fmt::Error>;
    fn write_char(&self, c: char) -> Result<(), core::fmt::Error>;
    fn write_fmt(&self, args: core::fmt::Arguments<'_>) -> Result<(), core::fmt::Error>;
}
impl<T: LockedNoInterrupts> LockedWrite for T
where
    T::Wraps: core::fmt::Write,
{
    fn write_str(&self, s: &str) -> Result<(), core::fmt::Error> {
        self.with_lock(|mut w| w.write_str(s))
    }
    fn write_char(&self, c: char) -> Result<(), core::fmt::Error> {
        self.with_lock(|mut w| w.write_char(c))
    }
    fn write_fmt(&self, args: core::fmt::Arguments<'_>) -> Result<(), core::fmt::Error> {
        self.with_lock(|mut w| w.write_fmt(args))
    }
}
