//! Segmented register values.
//!
//! Every value the SCI virtual machine handles, whether an integer, an object
//! reference or a code address, is a [`Reg`]: a segment id paired with an
//! offset into that segment. Plain integers live in segment 0.

use std::fmt;

/// Identifies a segment managed by the segment manager.
pub type SegmentId = u16;

/// A segment:offset pair, the universal value type of the VM.
///
/// The program counter, the accumulator, object references and every stack
/// slot are all `Reg`s.
///
/// # Example
///
/// ```rust
/// use scihooks::engine::Reg;
///
/// let pc = Reg::new(0x0018, 0x144d);
/// assert_eq!(pc.segment(), 0x0018);
/// assert_eq!(pc.offset(), 0x144d);
/// assert_eq!(pc.to_string(), "0018:144d");
///
/// let value = Reg::from_int(800);
/// assert!(value.is_number());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reg {
    segment: SegmentId,
    offset: u32,
}

impl Reg {
    /// The null reference (0000:0000), which doubles as the integer 0.
    pub const NULL: Reg = Reg {
        segment: 0,
        offset: 0,
    };

    /// Creates a register from a segment and an offset.
    #[must_use]
    pub const fn new(segment: SegmentId, offset: u32) -> Self {
        Reg { segment, offset }
    }

    /// Creates an integer register value.
    ///
    /// Integers are stored in segment 0 as their 16-bit two's complement
    /// representation, matching how script bytecode pushes immediates.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_int(value: i16) -> Self {
        Reg {
            segment: 0,
            offset: value as u16 as u32,
        }
    }

    /// Returns the segment part.
    #[must_use]
    pub const fn segment(&self) -> SegmentId {
        self.segment
    }

    /// Returns the offset part.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns true if this register holds a plain number (segment 0).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.segment == 0
    }

    /// Returns true if this is the null reference.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.segment == 0 && self.offset == 0
    }
}

impl fmt::Debug for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reg({:04x}:{:04x})", self.segment, self.offset)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.segment, self.offset)
    }
}
