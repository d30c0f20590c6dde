//! Text produced by the flat function set.
//!
//! Every printer writes into a caller-supplied [`Write`]; the C entry points
//! bind it to stdout, tests bind it to a `Vec<u8>`.

use crate::data::{Field, Record};
use std::io::{self, Write};

/// Line emitted for a selector outside the [`Field`] set.
pub const UNKNOWN_FIELD: &str = "unknown enum";

/// Write the fixed greeting.
pub fn greet<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hello World.")
}

/// Signed 32-bit addition. Overflow wraps (two's complement).
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Write `A + B = <sum>`.
pub fn print_sum<W: Write + ?Sized>(out: &mut W, a: i32, b: i32) -> io::Result<()> {
    writeln!(out, "A + B = {}", add(a, b))
}

/// Write each byte as unsigned decimal followed by a space.
///
/// An absent sequence writes nothing.
pub fn print_bytes<W: Write + ?Sized>(out: &mut W, bytes: Option<&[u8]>) -> io::Result<()> {
    let Some(bytes) = bytes else {
        return Ok(());
    };

    write!(out, "Array: ")?;
    for byte in bytes {
        write!(out, "{} ", byte)?;
    }
    writeln!(out)
}

/// Write the field picked by a raw selector, or [`UNKNOWN_FIELD`].
///
/// Returns the decoded selector so callers can react to unknown values.
pub fn print_field<W: Write + ?Sized>(
    out: &mut W,
    record: &Record,
    selector: u32,
) -> io::Result<Option<Field>> {
    match Field::from_raw(selector) {
        Some(field) => {
            writeln!(out, "Record.{} = {}", field.name(), record.field(field))?;
            Ok(Some(field))
        }
        None => {
            tracing::warn!(selector, "unknown record field selector");
            writeln!(out, "{}", UNKNOWN_FIELD)?;
            Ok(None)
        }
    }
}

/// Write the trace line for one accumulator addition.
pub fn print_accumulate<W: Write + ?Sized>(out: &mut W, amount: i32) -> io::Result<()> {
    writeln!(out, "Accumulator.add({})", amount)
}

/// Write an accumulator's current value.
pub fn print_accumulator_value<W: Write + ?Sized>(out: &mut W, value: i32) -> io::Result<()> {
    writeln!(out, "Accumulator.value = {}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_greet() {
        assert_eq!(capture(|o| greet(o)), "Hello World.\n");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(21, 21), 42);
        assert_eq!(add(-5, 3), -2);
        for (a, b) in [(0, 0), (1, -1), (1000, 2000), (-70_000, 12)] {
            assert_eq!(add(a, b), a + b);
        }
    }

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_print_sum() {
        assert_eq!(capture(|o| print_sum(o, 20, 22)), "A + B = 42\n");
    }

    #[test]
    fn test_print_bytes() {
        let out = capture(|o| print_bytes(o, Some(&[1, 2, 3, 4])));
        assert_eq!(out, "Array: 1 2 3 4 \n");
        assert!(out.contains("1 2 3 4 "));
    }

    #[test]
    fn test_print_bytes_absent() {
        assert_eq!(capture(|o| print_bytes(o, None)), "");
    }

    #[test]
    fn test_print_bytes_empty() {
        assert_eq!(capture(|o| print_bytes(o, Some(&[]))), "Array: \n");
    }

    #[test]
    fn test_print_field() {
        let r = Record::new(10, 5000, 20, 100_000);
        assert_eq!(capture(|o| print_field(o, &r, 0).map(|_| ())), "Record.a = 10\n");
        assert_eq!(capture(|o| print_field(o, &r, 1).map(|_| ())), "Record.b = 5000\n");
        assert_eq!(capture(|o| print_field(o, &r, 2).map(|_| ())), "Record.c = 20\n");
        assert_eq!(capture(|o| print_field(o, &r, 3).map(|_| ())), "Record.d = 100000\n");
    }

    #[test]
    fn test_print_field_unknown() {
        let r = Record::default();
        let mut buf = Vec::new();
        let decoded = print_field(&mut buf, &r, 4).unwrap();
        assert_eq!(decoded, None);
        assert_eq!(String::from_utf8(buf).unwrap(), "unknown enum\n");
    }

    #[test]
    fn test_accumulator_lines() {
        assert_eq!(capture(|o| print_accumulate(o, 19)), "Accumulator.add(19)\n");
        assert_eq!(
            capture(|o| print_accumulator_value(o, 42)),
            "Accumulator.value = 42\n"
        );
    }
}
