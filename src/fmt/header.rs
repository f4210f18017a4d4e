//! Header rendering in the fixed field order
//! `<prefix><date ><time[.micros] ><file:line: >`.

use super::pad::push_decimal;
use crate::flags::Flags;
use chrono::{DateTime, Datelike, Local, Timelike};

/// Appends the line header for the enabled flags. The prefix always comes
/// first, verbatim; each numeric field is zero-padded to its fixed width.
///
/// `caller` is only consulted when a file flag is set. `None` with a file
/// flag set renders the `???:0: ` placeholder — callers that cannot resolve
/// their location still get a well-formed line.
pub fn format_header(
    buf: &mut Vec<u8>,
    prefix: &str,
    flags: Flags,
    now: DateTime<Local>,
    caller: Option<(&str, u32)>,
) {
    buf.extend_from_slice(prefix.as_bytes());

    if flags.contains(Flags::DATE) {
        push_decimal(buf, now.year().unsigned_abs(), 4);
        buf.push(b'/');
        push_decimal(buf, now.month(), 2);
        buf.push(b'/');
        push_decimal(buf, now.day(), 2);
        buf.push(b' ');
    }
    // MICROSECONDS alone still renders the time field it refines.
    if flags.intersects(Flags::TIME.union(Flags::MICROSECONDS)) {
        push_decimal(buf, now.hour(), 2);
        buf.push(b':');
        push_decimal(buf, now.minute(), 2);
        buf.push(b':');
        push_decimal(buf, now.second(), 2);
        if flags.contains(Flags::MICROSECONDS) {
            buf.push(b'.');
            push_decimal(buf, now.nanosecond() / 1_000, 6);
        }
        buf.push(b' ');
    }

    if flags.intersects(Flags::SHORT_FILE.union(Flags::LONG_FILE)) {
        let (file, line) = caller.unwrap_or(("???", 0));
        let file = if flags.contains(Flags::SHORT_FILE) {
            file.rfind(['/', '\\']).map_or(file, |at| &file[at + 1..])
        } else {
            file
        };
        buf.extend_from_slice(file.as_bytes());
        buf.push(b':');
        push_decimal(buf, line, 0);
        buf.extend_from_slice(b": ");
    }
}

/// Appends the message bytes, terminated by exactly one newline.
///
/// Already-terminated messages gain nothing; empty messages stay empty.
pub fn push_message(buf: &mut Vec<u8>, msg: &str) {
    buf.extend_from_slice(msg.as_bytes());
    if !msg.is_empty() && !msg.ends_with('\n') {
        buf.push(b'\n');
    }
}
