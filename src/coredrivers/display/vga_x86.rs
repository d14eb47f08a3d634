/* The VGA text-mode display this stage is positioned in front of.

Everything in here is declarative: the region's address, geometry, and cell
layout are fixed properties of the platform, recorded so a future rendering
collaborator can map and drive the display without re-deriving them. This
stage itself never constructs a reference into the region, and never reads
or writes it.
*/

use volatile::Volatile;
use x86_64::PhysAddr;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BaseColour {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
}
impl BaseColour {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0b0111 {
            0 => BaseColour::Black,
            1 => BaseColour::Blue,
            2 => BaseColour::Green,
            3 => BaseColour::Cyan,
            4 => BaseColour::Red,
            5 => BaseColour::Magenta,
            6 => BaseColour::Brown,
            _ => BaseColour::LightGray,
        }
    }
}

const FLAG_BLINK: u8 = 0b1000_0000;
const FLAG_LIGHT: u8 = 0b0000_1000;

/// One attribute byte: bbbb_ifff (blink, background, intensity, foreground).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct VGAColour(u8);
impl VGAColour {
    pub const fn new(foreground: BaseColour, background: BaseColour, bright: bool, blink: bool) -> Self {
        let bright_flag = if bright { FLAG_LIGHT } else { 0 };
        let blink_flag = if blink { FLAG_BLINK } else { 0 };
        VGAColour((background as u8) << 4 | (foreground as u8) | bright_flag | blink_flag)
    }

    pub const fn to_byte(self) -> u8 {
        self.0
    }

    pub const fn is_blinking(self) -> bool {
        (self.0 & FLAG_BLINK) != 0
    }
    pub const fn is_bright(self) -> bool {
        (self.0 & FLAG_LIGHT) != 0
    }
    pub const fn foreground(self) -> BaseColour {
        BaseColour::from_bits(self.0)
    }
    pub const fn background(self) -> BaseColour {
        BaseColour::from_bits(self.0 >> 4)
    }
}

/// One character cell: codepoint byte then attribute byte, as the hardware
/// lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct VGAChar {
    ascii_code: u8,
    colour: VGAColour,
}
impl VGAChar {
    pub const fn new(ascii_code: u8, colour: VGAColour) -> Self {
        VGAChar { ascii_code, colour }
    }
    pub const fn ascii_code(self) -> u8 {
        self.ascii_code
    }
    pub const fn colour(self) -> VGAColour {
        self.colour
    }
}

pub const VGA_WIDTH: usize = 80;
pub const VGA_HEIGHT: usize = 25;
pub const VGA_BUFFER_PHYSICAL: u64 = 0xb8000;
pub const VGA_BUFFER_SIZE: usize = VGA_WIDTH * VGA_HEIGHT * core::mem::size_of::<VGAChar>();

/// The character grid as it exists at the base address. Cells are volatile
/// because they are device memory, not RAM - a writer must not have its
/// stores elided or reordered away.
#[repr(transparent)]
pub struct VGABuffer {
    pub chars: [[Volatile<VGAChar>; VGA_WIDTH]; VGA_HEIGHT],
}

/// Typed handle to the display's physical region. Deliberately opaque: it
/// answers where the region is and how big it is, but hands out no pointer
/// and no reference - mapping and dereferencing it is the (absent) display
/// driver's job, not ours.
#[derive(Debug, Clone, Copy)]
pub struct VGATextRegion {
    base: PhysAddr,
}

pub const VGA_TEXT_REGION: VGATextRegion = VGATextRegion {
    base: PhysAddr::new(VGA_BUFFER_PHYSICAL),
};

impl VGATextRegion {
    pub const fn base(self) -> PhysAddr {
        self.base
    }
    pub const fn size_bytes(self) -> usize {
        VGA_BUFFER_SIZE
    }
    pub const fn cells(self) -> usize {
        VGA_WIDTH * VGA_HEIGHT
    }
    /// First physical address past the region.
    pub fn end(self) -> PhysAddr {
        self.base + VGA_BUFFER_SIZE as u64
    }
    pub fn contains(self, addr: PhysAddr) -> bool {
        addr >= self.base && addr < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};

    #[test]
    fn cell_is_two_bytes() {
        assert_eq!(size_of::<VGAChar>(), 2);
        assert_eq!(align_of::<VGAChar>(), 1);
    }

    #[test]
    fn grid_covers_the_whole_region() {
        assert_eq!(size_of::<VGABuffer>(), VGA_BUFFER_SIZE);
        assert_eq!(VGA_BUFFER_SIZE, 4000);
    }

    #[test]
    fn region_geometry() {
        assert_eq!(VGA_TEXT_REGION.base().as_u64(), 0xb8000);
        assert_eq!(VGA_TEXT_REGION.end().as_u64(), 0xb8fa0);
        assert_eq!(VGA_TEXT_REGION.cells(), 80 * 25);
        assert_eq!(VGA_TEXT_REGION.size_bytes(), VGA_BUFFER_SIZE);
    }

    #[test]
    fn region_contains_its_cells_and_nothing_else() {
        assert!(VGA_TEXT_REGION.contains(PhysAddr::new(0xb8000)));
        assert!(VGA_TEXT_REGION.contains(PhysAddr::new(0xb8f9f)));
        assert!(!VGA_TEXT_REGION.contains(PhysAddr::new(0xb7fff)));
        assert!(!VGA_TEXT_REGION.contains(PhysAddr::new(0xb8fa0)));
    }

    #[test]
    fn colour_packs_and_unpacks() {
        let colours = [
            BaseColour::Black,
            BaseColour::Blue,
            BaseColour::Green,
            BaseColour::Cyan,
            BaseColour::Red,
            BaseColour::Magenta,
            BaseColour::Brown,
            BaseColour::LightGray,
        ];
        for &fg in &colours {
            for &bg in &colours {
                for &(bright, blink) in &[(false, false), (true, false), (false, true), (true, true)] {
                    let c = VGAColour::new(fg, bg, bright, blink);
                    assert_eq!(c.foreground(), fg);
                    assert_eq!(c.background(), bg);
                    assert_eq!(c.is_bright(), bright);
                    assert_eq!(c.is_blinking(), blink);
                }
            }
        }
    }

    #[test]
    fn classic_white_on_blue_attribute() {
        let c = VGAColour::new(BaseColour::LightGray, BaseColour::Blue, true, false);
        assert_eq!(c.to_byte(), 0x1f);
    }

    #[test]
    fn cell_roundtrip() {
        let colour = VGAColour::new(BaseColour::Green, BaseColour::Black, false, false);
        let cell = VGAChar::new(b'A', colour);
        assert_eq!(cell.ascii_code(), b'A');
        assert_eq!(cell.colour(), colour);
    }
}
