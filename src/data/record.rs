//! Plain-data record and its field selector.

/// A plain-old-data record shared with C callers by pointer.
///
/// Layout is C's: `a` at offset 0, `b` at 2, `c` at 4, `d` at 8, size 12.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Record {
    pub a: u8,
    pub b: u16,
    pub c: u8,
    pub d: i32,
}

impl Record {
    /// Create a record from its four fields.
    pub const fn new(a: u8, b: u16, c: u8, d: i32) -> Self {
        Self { a, b, c, d }
    }

    /// Get the selected field widened to `u32`.
    ///
    /// `d` is reinterpreted, not converted: `-1` reads as `u32::MAX`.
    pub fn field(&self, field: Field) -> u32 {
        match field {
            Field::A => u32::from(self.a),
            Field::B => u32::from(self.b),
            Field::C => u32::from(self.c),
            Field::D => self.d as u32,
        }
    }
}

/// Selects one field of a [`Record`].
///
/// C callers pass the selector as a raw `u32`; see [`Field::from_raw`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Field {
    /// All selectors in declaration order.
    pub const ALL: [Field; 4] = [Field::A, Field::B, Field::C, Field::D];

    /// Decode a raw selector. Values outside `0..=3` yield `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Field::A),
            1 => Some(Field::B),
            2 => Some(Field::C),
            3 => Some(Field::D),
            _ => None,
        }
    }

    /// Lower-case field name as printed.
    pub fn name(&self) -> &'static str {
        match self {
            Field::A => "a",
            Field::B => "b",
            Field::C => "c",
            Field::D => "d",
        }
    }
}
