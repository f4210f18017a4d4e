//! Tests for the flag bitset and its config-facing string parsing.

use rollog::Flags;

#[test]
fn default_is_date_and_time() {
    let flags = Flags::default();
    assert_eq!(flags, Flags::STD);
    assert!(flags.contains(Flags::DATE));
    assert!(flags.contains(Flags::TIME));
    assert!(!flags.contains(Flags::MICROSECONDS));
}

#[test]
fn union_and_contains() {
    let flags = Flags::DATE | Flags::SHORT_FILE;
    assert!(flags.contains(Flags::DATE));
    assert!(flags.contains(Flags::SHORT_FILE));
    assert!(!flags.contains(Flags::DATE | Flags::TIME));
    assert!(flags.intersects(Flags::DATE | Flags::TIME));
    assert!(Flags::NONE.is_empty());
    assert!(!flags.is_empty());
}

#[test]
fn parses_every_name() {
    for (name, want) in [
        ("date", Flags::DATE),
        ("time", Flags::TIME),
        ("microseconds", Flags::MICROSECONDS),
        ("micros", Flags::MICROSECONDS),
        ("longfile", Flags::LONG_FILE),
        ("shortfile", Flags::SHORT_FILE),
        ("std", Flags::STD),
        ("DATE", Flags::DATE),
    ] {
        assert_eq!(name.parse::<Flags>().unwrap(), want, "name={name}");
    }
}

#[test]
fn from_names_accumulates() {
    let flags = Flags::from_names(&["date", "time", "shortfile"]).unwrap();
    assert_eq!(flags, Flags::DATE | Flags::TIME | Flags::SHORT_FILE);
    assert_eq!(Flags::from_names::<&str>(&[]).unwrap(), Flags::NONE);
}

#[test]
fn unknown_name_is_rejected() {
    assert!("datetime".parse::<Flags>().is_err());
    assert!(Flags::from_names(&["date", "nope"]).is_err());
}
