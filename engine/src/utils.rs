use crate::{consts::NOT_SYM, types::GateKind};

pub fn form_expr(inex: &[String], sym: &str) -> String {
    // not is the only prefix operator, the rest are infix over any arity
    if sym == NOT_SYM {
        return inex
            .first()
            .map(|e| format!("{}{}", sym, e))
            .unwrap_or_default();
    }
    inex.join(format!(" {} ", sym).as_str())
}

// inputs are bare names, anything else is a compound expression
pub fn operand_expr(kind: GateKind, expr: String) -> String {
    if kind == GateKind::Input {
        expr
    } else {
        format!("({})", expr)
    }
}
