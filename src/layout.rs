//! Meaning of the leading EEPROM bytes as read by the macro pad firmware.

/// Marks a slot without a key or modifier.
pub const UNUSED: u8 = 0xFF;

pub const SLOT_NAMES: [&str; 12] = [
    "key 1",
    "key 2",
    "key 3",
    "knob switch",
    "knob clockwise",
    "knob counter-clockwise",
    "key 1 modifier",
    "key 2 modifier",
    "key 3 modifier",
    "knob switch modifier",
    "knob clockwise modifier",
    "knob counter-clockwise modifier",
];

pub fn slot_name(offset: usize) -> &'static str {
    SLOT_NAMES.get(offset).copied().unwrap_or("unknown")
}

pub fn describe_byte(b: u8) -> String {
    match b {
        UNUSED => "unused".to_string(),
        b if b.is_ascii_graphic() || b == b' ' => format!("{:?}", b as char),
        b => format!("0x{b:02x}"),
    }
}

pub fn hexdump(data: &[u8]) -> String {
    if data.is_empty() {
        return "".to_string();
    }
    let mut ret = String::new();
    ret.push_str(&format!("{:02x}", data[0]));
    for b in &data[1..] {
        ret.push_str(&format!(" {:02x}", b));
    }
    ret
}

/// One line per byte: offset, slot, hex value and a readable description.
pub fn render_table(header: &[u8]) -> String {
    let mut ret = String::new();
    for (offset, b) in header.iter().enumerate() {
        ret.push_str(&format!(
            "  0x{offset:02x}  {:<32} {b:02x}  {}\n",
            slot_name(offset),
            describe_byte(*b),
        ));
    }
    ret
}
