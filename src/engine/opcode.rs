//! SCI opcode mnemonics.
//!
//! The first byte of every SCI instruction encodes the opcode in its upper
//! seven bits. The lowest bit selects between byte-sized and word-sized
//! operands and carries no meaning for the mnemonic. The names below are the
//! ones the debugger prints, which is also what hook fingerprints are written
//! against.

/// Mnemonics of all 128 SCI opcodes, indexed by `raw_byte >> 1`.
pub const OPCODE_NAMES: [&str; 128] = [
    "bnot", "add", "sub", "mul", "div", //
    "mod", "shr", "shl", "xor", "and", //
    "or", "neg", "not", "eq?", "ne?", //
    "gt?", "ge?", "lt?", "le?", "ugt?", //
    "uge?", "ult?", "ule?", "bt", "bnt", //
    "jmp", "ldi", "push", "pushi", "toss", //
    "dup", "link", "call", "callk", "callb", //
    "calle", "ret", "send", "dummy", "dummy", //
    "class", "dummy", "self", "super", "&rest", //
    "lea", "selfID", "dummy", "pprev", "pToa", //
    "aTop", "pTos", "sTop", "ipToa", "dpToa", //
    "ipTos", "dpTos", "lofsa", "lofss", "push0", //
    "push1", "push2", "pushSelf", "line", "lag", //
    "lal", "lat", "lap", "lsg", "lsl", //
    "lst", "lsp", "lagi", "lali", "lati", //
    "lapi", "lsgi", "lsli", "lsti", "lspi", //
    "sag", "sal", "sat", "sap", "ssg", //
    "ssl", "sst", "ssp", "sagi", "sali", //
    "sati", "sapi", "ssgi", "ssli", "ssti", //
    "sspi", "+ag", "+al", "+at", "+ap", //
    "+sg", "+sl", "+st", "+sp", "+agi", //
    "+ali", "+ati", "+api", "+sgi", "+sli", //
    "+sti", "+spi", "-ag", "-al", "-at", //
    "-ap", "-sg", "-sl", "-st", "-sp", //
    "-agi", "-ali", "-ati", "-api", "-sgi", //
    "-sli", "-sti", "-spi",
];

/// Decodes the mnemonic of a raw instruction byte.
///
/// # Example
///
/// ```rust
/// use scihooks::engine::opcode_name;
///
/// // 0x76 and 0x77 are both push0, differing only in operand width.
/// assert_eq!(opcode_name(0x76), "push0");
/// assert_eq!(opcode_name(0x77), "push0");
/// assert_eq!(opcode_name(0x48), "ret");
/// ```
#[must_use]
pub fn opcode_name(raw: u8) -> &'static str {
    OPCODE_NAMES[usize::from(raw >> 1)]
}

/// Returns true if `name` is one of the known mnemonics.
#[must_use]
pub fn is_mnemonic(name: &str) -> bool {
    OPCODE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_family() {
        assert_eq!(opcode_name(0x40), "call");
        assert_eq!(opcode_name(0x42), "callk");
        assert_eq!(opcode_name(0x46), "calle");
        assert_eq!(opcode_name(0x4a), "send");
    }

    #[test]
    fn test_width_bit_ignored() {
        for raw in 0..=u8::MAX {
            assert_eq!(opcode_name(raw), opcode_name(raw & !1));
        }
    }

    #[test]
    fn test_last_opcode() {
        assert_eq!(opcode_name(0xfe), "-spi");
        assert_eq!(opcode_name(0xff), "-spi");
    }

    #[test]
    fn test_is_mnemonic() {
        assert!(is_mnemonic("push0"));
        assert!(is_mnemonic("&rest"));
        assert!(!is_mnemonic("push3"));
    }
}
