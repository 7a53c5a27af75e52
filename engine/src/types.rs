use std::fmt;

// evaluates a gate from the outputs of its live inputs, in edge order
pub type BinaryLogicReducer = fn(&[bool]) -> bool;

/// A cell on the placement grid. Gates are keyed by it and refer to each
/// other only through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GateKind {
    Input,
    Output,
    #[default]
    And,
    Or,
    Xor,
    Not,
}

impl GateKind {
    pub const ALL: [GateKind; 6] = [
        GateKind::Input,
        GateKind::Output,
        GateKind::And,
        GateKind::Or,
        GateKind::Xor,
        GateKind::Not,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Input => "INPUT",
            GateKind::Output => "OUTPUT",
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Not => "NOT",
        }
    }

    /// Gates that keep a single input slot. A new connection replaces
    /// the slot instead of appending to it.
    pub fn is_single_input(&self) -> bool {
        matches!(self, GateKind::Not | GateKind::Output)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
