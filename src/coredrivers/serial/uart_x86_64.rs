use lazy_static::lazy_static;
use uart_16550::SerialPort;

const COM1_IO_BASE: u16 = 0x3F8;

fn init_serial_1() -> SerialPort {
    // SAFETY: 0x3F8 is the standard COM1 I/O base on PC-compatibles and is
    // not claimed by anything else at this stage.
    let mut serial_port = unsafe { SerialPort::new(COM1_IO_BASE) };
    serial_port.init();
    serial_port
}
pub type SerialPortType = SerialPort;

// This writer uses spinlocks and without_interrupts(...) to ensure that no
// deadlocks or race conditions occur
use crate::util::mutex_no_interrupts;
mutex_no_interrupts!(LockedSerialPort, SerialPortType);
impl LockedSerialPort {
    pub fn send(&self, data: u8) {
        self.with_lock(|mut w| w.send(data));
    }
}

lazy_static! {
    pub static ref SERIAL1: LockedSerialPort = LockedSerialPort::wraps(init_serial_1());
}
