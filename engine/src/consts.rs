pub const AND_SYM: &str = "^";
pub const OR_SYM: &str = "v";
pub const XOR_SYM: &str = "XOR";
pub const NOT_SYM: &str = "!";

pub const OUTPUT_PREFIX: &str = "f";
pub const ASSIGN_SEP: &str = " = ";
pub const FUNCTION_SEP: &str = "; ";

pub const FIRST_INPUT_LETTER: u8 = b'a';
pub const LAST_INPUT_LETTER: u8 = b'z';

/// Syntax used when a table is rendered as a sum of products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnfStyle {
    pub and: &'static str,
    pub or: &'static str,
    pub not: &'static str,
    // rendered when the function is never true
    pub falsity: &'static str,
    // rendered when a term covers every row
    pub truth: &'static str,
}

impl DnfStyle {
    pub const MATH: DnfStyle = DnfStyle {
        and: " ^ ",
        or: " v ",
        not: NOT_SYM,
        falsity: "0",
        truth: "1",
    };

    pub const C_LIKE: DnfStyle = DnfStyle {
        and: " && ",
        or: " || ",
        not: "!",
        falsity: "false",
        truth: "true",
    };
}

impl Default for DnfStyle {
    fn default() -> Self {
        DnfStyle::MATH
    }
}
