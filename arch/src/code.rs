use bimap::BiMap;
use once_cell::sync::Lazy;

/// Destination mnemonic -> 3-bit pattern.
static DESTS: Lazy<BiMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = BiMap::new();
    map.insert("M", "001");
    map.insert("D", "010");
    map.insert("DM", "011");
    map.insert("A", "100");
    map.insert("AM", "101");
    map.insert("AD", "110");
    map.insert("ADM", "111");
    map
});

/// Jump mnemonic -> 3-bit pattern.
static JUMPS: Lazy<BiMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = BiMap::new();
    map.insert("JGT", "001");
    map.insert("JEQ", "010");
    map.insert("JGE", "011");
    map.insert("JLT", "100");
    map.insert("JNE", "101");
    map.insert("JLE", "110");
    map.insert("JMP", "111");
    map
});

/// Computation mnemonic -> 7-bit pattern.
///
/// The leading bit is the operand-source bit: 0 for the register-operand
/// family (A) and 1 for the memory-operand family (M). Both families share
/// the same 6 functional bits, so with the leading bit included every
/// pattern is unique in both directions.
static COMPS: Lazy<BiMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = BiMap::new();
    map.insert("0", "0101010");
    map.insert("1", "0111111");
    map.insert("-1", "0111010");
    map.insert("D", "0001100");
    map.insert("A", "0110000");
    map.insert("!A", "0110001");
    map.insert("!D", "0001101");
    map.insert("-D", "0001111");
    map.insert("-A", "0110011");
    map.insert("D+1", "0011111");
    map.insert("A+1", "0110111");
    map.insert("D-1", "0001110");
    map.insert("A-1", "0110010");
    map.insert("D+A", "0000010");
    map.insert("D-A", "0010011");
    map.insert("A-D", "0000111");
    map.insert("D&A", "0000000");
    map.insert("D|A", "0010101");
    map.insert("M", "1110000");
    map.insert("!M", "1110001");
    map.insert("M+1", "1110111");
    map.insert("M-1", "1110010");
    map.insert("D+M", "1000010");
    map.insert("D-M", "1010011");
    map.insert("M-D", "1000111");
    map.insert("D&M", "1000000");
    map.insert("D|M", "1010101");
    map
});

/// An unknown or empty mnemonic is `None`, never an all-zero pattern.
/// Callers are expected to have validated the mnemonic at classification
/// and must surface `None` as an error.
pub fn dest(mnemonic: &str) -> Option<&'static str> {
    DESTS.get_by_left(mnemonic).copied()
}

pub fn comp(mnemonic: &str) -> Option<&'static str> {
    COMPS.get_by_left(mnemonic).copied()
}

pub fn jump(mnemonic: &str) -> Option<&'static str> {
    JUMPS.get_by_left(mnemonic).copied()
}

/// Reverse lookups, for tooling that renders encoded words back to text.
pub fn dest_mnemonic(bits: &str) -> Option<&'static str> {
    DESTS.get_by_right(bits).copied()
}

pub fn comp_mnemonic(bits: &str) -> Option<&'static str> {
    COMPS.get_by_right(bits).copied()
}

pub fn jump_mnemonic(bits: &str) -> Option<&'static str> {
    JUMPS.get_by_right(bits).copied()
}
