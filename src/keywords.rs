//! The fixed, case-insensitive J73 keyword set (spec §4.1) and the short
//! English descriptions `hover_at` shows for a bare keyword (spec §4.6,
//! §6 Keyword payload).

/// All reserved words the recogniser and completion/hover layers are aware
/// of. Order here is cosmetic; lookups always go through [`is_keyword`] or
/// [`describe`].
pub const KEYWORDS: &[&str] = &[
    // Module structure
    "START", "TERM", "BEGIN", "END", "COMPOOL", "PROGRAM",
    // Declarations
    "ITEM", "TABLE", "PROC", "TYPE", "DEFINE", "DEF", "REF",
    // Type abbreviations
    "S", "U", "F", "A", "B", "C", "P", "STATUS", "LIKE",
    // Attributes
    "STATIC", "CONSTANT", "PARALLEL", "OVERLAY", "POS", "W", "D",
    "ROUND", "TRUNCATE", "DENSE", "BLOCK",
    // Control flow
    "IF", "THEN", "ELSE", "FOR", "BY", "WHILE", "UNTIL",
    "CASE", "DEFAULT", "FALLTHRU", "GOTO", "EXIT", "ABORT", "RETURN", "STOP",
    // Operators
    "AND", "OR", "NOT", "XOR", "EQV", "MOD", "ABS", "SGN",
    // Built-ins
    "LOC", "NEXT", "BIT", "BYTE", "SHIFTL", "SHIFTR", "SHIFTLA", "SHIFTRA",
    "FIRST", "LAST", "LBOUND", "HBOUND", "NENT", "NWDSEN", "BITSIZE",
    "BYTESIZE", "WORDSIZE",
    // I/O
    "INPUT", "OUTPUT", "OPEN", "CLOSE",
];

pub fn is_keyword(word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    KEYWORDS.iter().any(|kw| *kw == upper)
}

/// Short English description for a keyword's hover payload. Every entry in
/// [`KEYWORDS`] gets a real description; none fall through to a generic
/// placeholder — the original Python server allows that fallback, but
/// since the keyword set here is closed and small it costs nothing to cover
/// every member explicitly.
pub fn describe(keyword: &str) -> &'static str {
    match keyword.to_ascii_uppercase().as_str() {
        "START" => "Begin main program module",
        "TERM" => "End program module",
        "BEGIN" => "Begin block",
        "END" => "End block",
        "COMPOOL" => "Communication pool module (shared data)",
        "PROGRAM" => "Program module marker",
        "ITEM" => "Scalar variable declaration",
        "TABLE" => "Array/structure declaration",
        "PROC" => "Procedure declaration",
        "TYPE" => "User-defined type declaration",
        "DEFINE" => "Compile-time constant",
        "DEF" => "Import from COMPOOL",
        "REF" => "Reference to external procedure",
        "S" => "Signed integer type",
        "U" => "Unsigned integer type",
        "F" => "Floating-point type",
        "A" => "Fixed-point (scaled) type",
        "B" => "Bit string type",
        "C" => "Character string type",
        "P" => "Pointer type",
        "STATUS" => "Enumeration type",
        "LIKE" => "Declare by structural equivalence to another item",
        "STATIC" => "Static allocation (persistent)",
        "CONSTANT" => "Read-only value",
        "PARALLEL" => "Parallel allocation for bit-packing",
        "OVERLAY" => "Share storage with another declaration",
        "POS" => "Explicit bit/word position",
        "W" => "Word size attribute",
        "D" => "Double-precision attribute",
        "ROUND" => "Round on assignment/conversion",
        "TRUNCATE" => "Truncate on assignment/conversion",
        "DENSE" => "Dense (unpacked) table allocation",
        "BLOCK" => "Block-structured region",
        "IF" => "Conditional statement",
        "THEN" => "Consequent clause of IF",
        "ELSE" => "Alternative clause of IF",
        "FOR" => "Counted loop",
        "BY" => "Loop step increment",
        "WHILE" => "Conditional loop (test before)",
        "UNTIL" => "Conditional loop (test after)",
        "CASE" => "Multi-way branch",
        "DEFAULT" => "Default branch of CASE",
        "FALLTHRU" => "Fall through to next CASE branch",
        "GOTO" => "Unconditional branch",
        "EXIT" => "Exit from loop",
        "ABORT" => "Abort program execution",
        "RETURN" => "Return from procedure",
        "STOP" => "Halt program execution",
        "AND" => "Logical conjunction",
        "OR" => "Logical disjunction",
        "NOT" => "Logical negation",
        "XOR" => "Logical exclusive-or",
        "EQV" => "Logical equivalence",
        "MOD" => "Modulo operator",
        "ABS" => "Absolute value function",
        "SGN" => "Sign function",
        "LOC" => "Location (address) function",
        "NEXT" => "Next value in sequence",
        "BIT" => "Bit extraction function",
        "BYTE" => "Byte extraction function",
        "SHIFTL" => "Shift left",
        "SHIFTR" => "Shift right",
        "SHIFTLA" => "Arithmetic shift left",
        "SHIFTRA" => "Arithmetic shift right",
        "FIRST" => "First bound of a dimension",
        "LAST" => "Last bound of a dimension",
        "LBOUND" => "Lower bound of a table dimension",
        "HBOUND" => "Upper bound of a table dimension",
        "NENT" => "Number of entries in a table dimension",
        "NWDSEN" => "Words per entry in a table",
        "BITSIZE" => "Size of a value in bits",
        "BYTESIZE" => "Size of a value in bytes",
        "WORDSIZE" => "Size of a value in words",
        "INPUT" => "Input file declaration",
        "OUTPUT" => "Output file declaration",
        "OPEN" => "Open a file for I/O",
        "CLOSE" => "Close a file",
        other => {
            let _ = other;
            "J73 reserved word"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_has_a_real_description() {
        for kw in KEYWORDS {
            assert_ne!(
                describe(kw),
                "J73 reserved word",
                "keyword {kw} is missing an explicit description"
            );
        }
    }

    #[test]
    fn is_keyword_case_insensitive() {
        assert!(is_keyword("item"));
        assert!(is_keyword("ITEM"));
        assert!(is_keyword("Item"));
        assert!(!is_keyword("ALTITUDE"));
    }
}
