/// First printable ASCII code point (space).
pub const FIRST_PRINTABLE: u8 = 32;
/// Last printable ASCII code point (`~`).
pub const LAST_PRINTABLE: u8 = 126;

/// Every printable ASCII character except `/`, in ascending order.
pub fn ascii_range() -> String {
    (FIRST_PRINTABLE..=LAST_PRINTABLE)
        .map(char::from)
        .filter(|&c| c != '/')
        .collect()
}
