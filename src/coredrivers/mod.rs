/* Core drivers are statically linked modules, linked with the loader,
so that they are accessible from the moment stage 1 hands control over
(prior to any filesystem, allocator, or driver-loading machinery existing).

The serial port is the only driver this stage actually drives; the display
is declared but deliberately left untouched (see display_vga).
*/

#[cfg_attr(target_arch = "x86_64", path = "serial/uart_x86_64.rs")]
pub mod serial_uart;

#[cfg_attr(target_arch = "x86_64", path = "display/vga_x86.rs")]
pub mod display_vga;
