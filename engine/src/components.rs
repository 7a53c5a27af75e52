use crate::{
    consts::{AND_SYM, NOT_SYM, OR_SYM, XOR_SYM},
    error::{CircuitError, Result},
    names::NameAllocator,
    types::{BinaryLogicReducer, GateKind, Position},
};

/// A node of the circuit. Upstream gates are referenced by position only;
/// an edge whose position holds no gate is stale and ignored on read.
///
/// Edits never mutate a gate in place. They return the updated value,
/// which the circuit installs over the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Input { name: String, state: bool },
    Output { name: String, input: Option<Position> },
    And(Vec<Position>),
    Or(Vec<Position>),
    Xor(Vec<Position>),
    Not(Option<Position>),
}

impl Gate {
    pub fn from_kind(kind: GateKind, names: &mut NameAllocator) -> Gate {
        match kind {
            GateKind::Input => Gate::make_input(&names.next_input_name(), false),
            GateKind::Output => Gate::Output {
                name: names.next_output_name(),
                input: None,
            },
            GateKind::And => Gate::And(Vec::new()),
            GateKind::Or => Gate::Or(Vec::new()),
            GateKind::Xor => Gate::Xor(Vec::new()),
            GateKind::Not => Gate::Not(None),
        }
    }

    pub fn make_input(lab: &str, init: bool) -> Gate {
        Gate::Input {
            name: lab.to_owned(),
            state: init,
        }
    }

    pub fn kind(&self) -> GateKind {
        match self {
            Gate::Input { .. } => GateKind::Input,
            Gate::Output { .. } => GateKind::Output,
            Gate::And(_) => GateKind::And,
            Gate::Or(_) => GateKind::Or,
            Gate::Xor(_) => GateKind::Xor,
            Gate::Not(_) => GateKind::Not,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Gate::Input { name, .. } | Gate::Output { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn state(&self) -> Option<bool> {
        match self {
            Gate::Input { state, .. } => Some(*state),
            _ => None,
        }
    }

    // connection order, stale edges included
    pub fn edges(&self) -> &[Position] {
        match self {
            Gate::Input { .. } => &[],
            Gate::Output { input, .. } | Gate::Not(input) => input.as_slice(),
            Gate::And(v) | Gate::Or(v) | Gate::Xor(v) => v,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::And(_) => AND_SYM,
            Gate::Or(_) => OR_SYM,
            Gate::Xor(_) => XOR_SYM,
            Gate::Not(_) => NOT_SYM,
            Gate::Input { .. } | Gate::Output { .. } => "",
        }
    }

    /// Combines the outputs of the live inputs. Inputs have no reducer,
    /// their output is the stored state.
    pub fn reducer(&self) -> Option<BinaryLogicReducer> {
        let r: BinaryLogicReducer = match self {
            Gate::Input { .. } => return None,
            Gate::Output { .. } => pass_through,
            Gate::And(_) => all_high,
            Gate::Or(_) => any_high,
            Gate::Xor(_) => exactly_one_high,
            Gate::Not(_) => invert,
        };
        Some(r)
    }

    pub fn toggled(&self) -> Result<Gate> {
        match self {
            Gate::Input { name, state } => Ok(Gate::make_input(name, !state)),
            _ => Err(CircuitError::UnsupportedOperation {
                op: "toggle the output",
                kind: self.kind(),
            }),
        }
    }

    pub fn with_state(&self, val: bool) -> Result<Gate> {
        match self {
            Gate::Input { name, .. } => Ok(Gate::make_input(name, val)),
            _ => Err(CircuitError::UnsupportedOperation {
                op: "set the state",
                kind: self.kind(),
            }),
        }
    }

    /// Single-slot gates replace their input, multi-input gates append.
    pub fn with_input(&self, pos: Position) -> Result<Gate> {
        let g = match self {
            Gate::Input { .. } => {
                return Err(CircuitError::UnsupportedOperation {
                    op: "add an input",
                    kind: GateKind::Input,
                })
            }
            Gate::Output { name, .. } => Gate::Output {
                name: name.clone(),
                input: Some(pos),
            },
            Gate::Not(_) => Gate::Not(Some(pos)),
            Gate::And(v) => Gate::And(appended(v, pos)),
            Gate::Or(v) => Gate::Or(appended(v, pos)),
            Gate::Xor(v) => Gate::Xor(appended(v, pos)),
        };
        Ok(g)
    }

    pub fn without_input(&self, pos: Position) -> Gate {
        let keep = |v: &Vec<Position>| -> Vec<Position> {
            v.iter().copied().filter(|p| *p != pos).collect()
        };
        match self {
            Gate::Output { name, input } => Gate::Output {
                name: name.clone(),
                input: input.filter(|p| *p != pos),
            },
            Gate::Not(input) => Gate::Not(input.filter(|p| *p != pos)),
            Gate::And(v) => Gate::And(keep(v)),
            Gate::Or(v) => Gate::Or(keep(v)),
            Gate::Xor(v) => Gate::Xor(keep(v)),
            Gate::Input { .. } => self.clone(),
        }
    }
}

fn appended(v: &[Position], pos: Position) -> Vec<Position> {
    let mut v = v.to_vec();
    v.push(pos);
    v
}

fn pass_through(v: &[bool]) -> bool {
    v.first().copied().unwrap_or(false)
}

fn all_high(v: &[bool]) -> bool {
    !v.is_empty() && v.iter().all(|b| *b)
}

fn any_high(v: &[bool]) -> bool {
    v.iter().any(|b| *b)
}

fn exactly_one_high(v: &[bool]) -> bool {
    v.iter().filter(|b| **b).count() == 1
}

// an unconnected not gate reads as inverted false
fn invert(v: &[bool]) -> bool {
    !pass_through(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn reduce(kind: GateKind, v: &[bool]) -> bool {
        let mut names = NameAllocator::new();
        (Gate::from_kind(kind, &mut names).reducer().unwrap())(v)
    }

    #[test]
    fn and_table() {
        assert!(!reduce(GateKind::And, &[]));
        assert!(!reduce(GateKind::And, &[false]));
        assert!(reduce(GateKind::And, &[true]));
        assert!(!reduce(GateKind::And, &[true, false]));
        assert!(reduce(GateKind::And, &[true, true]));
    }

    #[test]
    fn or_table() {
        assert!(!reduce(GateKind::Or, &[]));
        assert!(reduce(GateKind::Or, &[true]));
        assert!(!reduce(GateKind::Or, &[false, false]));
        assert!(reduce(GateKind::Or, &[false, true]));
        assert!(reduce(GateKind::Or, &[true, true]));
    }

    #[test]
    fn xor_table() {
        assert!(!reduce(GateKind::Xor, &[]));
        assert!(reduce(GateKind::Xor, &[true]));
        assert!(!reduce(GateKind::Xor, &[false, false]));
        assert!(reduce(GateKind::Xor, &[true, false]));
        assert!(!reduce(GateKind::Xor, &[true, true]));
        assert!(!reduce(GateKind::Xor, &[true, true, true]));
    }

    #[test]
    fn not_and_output_table() {
        assert!(reduce(GateKind::Not, &[]));
        assert!(!reduce(GateKind::Not, &[true]));
        assert!(reduce(GateKind::Not, &[false]));
        assert!(!reduce(GateKind::Output, &[]));
        assert!(reduce(GateKind::Output, &[true]));
    }

    #[test]
    fn inputs_have_no_reducer() {
        assert!(Gate::make_input("a", true).reducer().is_none());
    }

    #[test]
    fn single_slot_is_replaced() {
        let g = Gate::Not(None).with_input(p(0, 0)).unwrap();
        let g = g.with_input(p(0, 1)).unwrap();
        assert_eq!(g.edges(), &[p(0, 1)]);

        let mut names = NameAllocator::new();
        let out = Gate::from_kind(GateKind::Output, &mut names)
            .with_input(p(2, 2))
            .unwrap()
            .with_input(p(3, 3))
            .unwrap();
        assert_eq!(out.edges(), &[p(3, 3)]);
        assert_eq!(out.name(), Some("f1"));
    }

    #[test]
    fn multi_slot_appends_in_order() {
        let g = Gate::Xor(Vec::new())
            .with_input(p(0, 0))
            .unwrap()
            .with_input(p(0, 1))
            .unwrap()
            .with_input(p(0, 0))
            .unwrap();
        assert_eq!(g.edges(), &[p(0, 0), p(0, 1), p(0, 0)]);
    }

    #[test]
    fn toggling_is_input_only() {
        let a = Gate::make_input("a", false);
        assert_eq!(a.toggled().unwrap().state(), Some(true));
        assert_eq!(
            Gate::And(Vec::new()).toggled(),
            Err(CircuitError::UnsupportedOperation {
                op: "toggle the output",
                kind: GateKind::And
            })
        );
    }

    #[test]
    fn inputs_take_no_edges() {
        let err = Gate::make_input("a", false).with_input(p(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            CircuitError::UnsupportedOperation {
                kind: GateKind::Input,
                ..
            }
        ));
    }

    #[test]
    fn without_input_drops_every_match() {
        let g = Gate::Or(vec![p(0, 0), p(1, 1), p(0, 0)]).without_input(p(0, 0));
        assert_eq!(g.edges(), &[p(1, 1)]);
        assert!(Gate::Not(Some(p(0, 0))).without_input(p(0, 0)).edges().is_empty());
    }
}
