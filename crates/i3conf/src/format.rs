//! Positional slot filling for command templates.
//!
//! Templates use `{}` for a positional slot and `{{` / `}}` for literal braces.
//! Every other use of a brace is rejected, and the number of slots must match
//! the number of arguments exactly.

use crate::{Error, Result};

/// A parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    /// Literal text copied verbatim.
    Text(&'a str),
    /// A literal brace produced by an escape.
    Brace(char),
    /// A positional slot.
    Slot,
}

/// Split `template` into pieces, rejecting malformed braces.
fn parse(template: &str) -> Result<Vec<Piece<'_>>> {
    let bytes = template.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b != b'{' && b != b'}' {
            i += 1;
            continue;
        }
        if start < i {
            pieces.push(Piece::Text(&template[start..i]));
        }
        match (b, bytes.get(i + 1)) {
            (b'{', Some(b'{')) => pieces.push(Piece::Brace('{')),
            (b'}', Some(b'}')) => pieces.push(Piece::Brace('}')),
            (b'{', Some(b'}')) => pieces.push(Piece::Slot),
            (b'{', _) => {
                return Err(Error::format(format!(
                    "unsupported or unmatched '{{' at offset {} in {:?}",
                    i, template
                )));
            }
            _ => {
                return Err(Error::format(format!(
                    "single '}}' encountered at offset {} in {:?}",
                    i, template
                )));
            }
        }
        i += 2;
        start = i;
    }
    if start < bytes.len() {
        pieces.push(Piece::Text(&template[start..]));
    }
    Ok(pieces)
}

/// Fill the `{}` slots of `template` with `args`, in order.
///
/// Fails with [`Error::Format`] when the template is malformed or when the
/// slot count differs from `args.len()`.
pub fn fill_slots<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String> {
    let pieces = parse(template)?;
    let slots = pieces.iter().filter(|p| matches!(p, Piece::Slot)).count();
    if slots != args.len() {
        return Err(Error::format(format!(
            "template {:?} has {} slot(s) but {} argument(s) were given",
            template,
            slots,
            args.len()
        )));
    }

    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    for piece in pieces {
        match piece {
            Piece::Text(t) => out.push_str(t),
            Piece::Brace(c) => out.push(c),
            Piece::Slot => {
                if let Some(arg) = args.next() {
                    out.push_str(arg.as_ref());
                }
            }
        }
    }
    Ok(out)
}
