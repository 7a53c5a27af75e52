use crate::{
    components::Gate,
    consts::{ASSIGN_SEP, FUNCTION_SEP},
    error::{CircuitError, Result},
    names::NameAllocator,
    table::{bitwise_counter, TableOfValues},
    types::{GateKind, Position},
    utils::{form_expr, operand_expr},
};
use log::{debug, trace, warn};
use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt,
};

/// A combinational circuit laid out on a grid. Outputs and expressions are
/// recomputed on every read; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct GridCircuit {
    gates: HashMap<Position, Gate>,
    selected_tool: GateKind,
    // source of the next connection
    selected: Option<Position>,
    names: NameAllocator,
}

impl GridCircuit {
    pub fn new() -> GridCircuit {
        GridCircuit::default()
    }

    /// Places a gate of the selected tool's kind. Returns false, leaving
    /// the circuit untouched, when `pos` is already occupied.
    pub fn add_gate(&mut self, pos: Position) -> bool {
        if self.gates.contains_key(&pos) {
            debug!("{} is occupied, not placing a {} gate", pos, self.selected_tool);
            return false;
        }
        // the only eager edge rewrite; everywhere else stale edges are filtered on read
        self.scrub_edges_to(pos);
        let gate = Gate::from_kind(self.selected_tool, &mut self.names);
        debug!(
            "placed {} gate {} at {}",
            gate.kind(),
            gate.name().unwrap_or("-"),
            pos
        );
        self.gates.insert(pos, gate);
        true
    }

    pub fn add_gates(&mut self, positions: impl IntoIterator<Item = Position>) -> &mut Self {
        for pos in positions {
            self.add_gate(pos);
        }
        self
    }

    pub fn gate_at(&self, pos: Position) -> Option<GateRef<'_>> {
        self.gates.get(&pos).map(|gate| GateRef {
            circuit: self,
            pos,
            gate,
        })
    }

    pub fn gate_positions(&self) -> HashSet<Position> {
        self.gates.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn set_selected_tool(&mut self, kind: GateKind) -> &mut Self {
        self.selected_tool = kind;
        self
    }

    pub fn selected_tool(&self) -> GateKind {
        self.selected_tool
    }

    /// Selects the gate at `pos`, or clears the selection if it is the
    /// one already selected.
    pub fn toggle_selection(&mut self, pos: Position) -> Result<&mut Self> {
        if !self.gates.contains_key(&pos) {
            return Err(CircuitError::InvalidArgument(pos));
        }
        if self.selected == Some(pos) {
            self.selected = None;
        } else {
            self.selected = Some(pos);
        }
        Ok(self)
    }

    pub fn is_selected(&self, pos: Position) -> bool {
        self.selected == Some(pos)
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Toggles an input gate, or connects the selected gate into the gate
    /// at `pos`. Returns whether anything changed.
    pub fn interact_with(&mut self, pos: Position) -> bool {
        let Some(gate) = self.gates.get(&pos) else {
            debug!("nothing to interact with at {}", pos);
            return false;
        };
        let updated = if gate.kind() == GateKind::Input {
            gate.toggled()
        } else {
            match self.connectable_source(pos) {
                Some(src) => gate.with_input(src),
                None => return false,
            }
        };
        match updated {
            Ok(g) => {
                debug!("updated {} gate at {}: {:?}", g.kind(), pos, g.edges());
                self.replace_gate_at(pos, g);
                true
            }
            Err(e) => {
                warn!("{} at {}", e, pos);
                false
            }
        }
    }

    // edges pointing at the removed gate go stale, they are not cascaded
    pub fn remove_selected_gate(&mut self) {
        let Some(pos) = self.selected.take() else {
            return;
        };
        if let Some(g) = self.gates.remove(&pos) {
            debug!("removed {} gate at {}", g.kind(), pos);
        }
    }

    /// Every output's function, ordered by output name and separated by
    /// `"; "`. None when the circuit has no outputs.
    pub fn boolean_functions(&self) -> Option<String> {
        let mut outs = self
            .gates
            .values()
            .filter(|g| g.kind() == GateKind::Output)
            .collect::<Vec<&Gate>>();
        if outs.is_empty() {
            return None;
        }
        outs.sort_by(|a, b| a.name().cmp(&b.name()));
        Some(
            outs.iter()
                .map(|g| self.render(g))
                .collect::<Vec<String>>()
                .join(FUNCTION_SEP),
        )
    }

    /// Tabulates the selected gate over every assignment of the inputs.
    /// Input states are put back afterwards. None when nothing is selected.
    pub fn table_of_values(&mut self) -> Option<TableOfValues> {
        let target = self.selected?;
        let target_expr = self.boolean_function(target)?;

        let mut inps = self
            .gates
            .iter()
            .filter_map(|(pos, g)| match g {
                Gate::Input { name, state } => Some((name.clone(), *pos, *state)),
                _ => None,
            })
            .collect::<Vec<(String, Position, bool)>>();
        inps.sort();

        let mut cols = inps
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect::<Vec<String>>();
        cols.push(target_expr);

        let mut rows = Vec::new();
        for ct in bitwise_counter(inps.len()) {
            for ((_, pos, _), val) in inps.iter().zip(&ct) {
                self.set_input_state(*pos, *val);
            }
            let res = self.output(target).unwrap_or(false);
            trace!("{:?} -> {}", ct, res);
            let mut row = ct;
            row.push(res);
            rows.push(row);
        }

        for (_, pos, state) in &inps {
            self.set_input_state(*pos, *state);
        }
        let t = TableOfValues::from_rows(cols, rows);
        debug!("tabulated {} rows for {}", t.rows().len(), target);
        Some(t)
    }

    pub(crate) fn replace_gate_at(&mut self, pos: Position, gate: Gate) -> Option<Gate> {
        self.gates.insert(pos, gate)
    }

    // edges that still lead to a gate
    pub fn live_inputs(&self, pos: Position) -> Vec<Position> {
        self.gates
            .get(&pos)
            .map(|g| self.live_edges(g))
            .unwrap_or_default()
    }

    pub fn output(&self, pos: Position) -> Option<bool> {
        self.gates.get(&pos).map(|g| self.eval(g))
    }

    pub fn boolean_function(&self, pos: Position) -> Option<String> {
        self.gates.get(&pos).map(|g| self.render(g))
    }

    fn live_edges(&self, gate: &Gate) -> Vec<Position> {
        gate.edges()
            .iter()
            .copied()
            .filter(|p| self.gates.contains_key(p))
            .collect()
    }

    fn live_gates<'a>(&'a self, gate: &'a Gate) -> impl Iterator<Item = &'a Gate> + 'a {
        gate.edges().iter().filter_map(move |p| self.gates.get(p))
    }

    fn eval(&self, gate: &Gate) -> bool {
        let Some(reduce) = gate.reducer() else {
            return gate.state().unwrap_or(false);
        };
        let in_pins = self
            .live_gates(gate)
            .map(|g| self.eval(g))
            .collect::<Vec<bool>>();
        reduce(&in_pins)
    }

    fn render(&self, gate: &Gate) -> String {
        match gate {
            Gate::Input { name, .. } => name.clone(),
            Gate::Output { name, .. } => {
                let rhs = self
                    .live_gates(gate)
                    .next()
                    .map(|g| self.render(g))
                    .unwrap_or_default();
                format!("{}{}{}", name, ASSIGN_SEP, rhs)
            }
            _ => {
                let in_exprs = self
                    .live_gates(gate)
                    .map(|g| operand_expr(g.kind(), self.render(g)))
                    .collect::<Vec<String>>();
                form_expr(&in_exprs, gate.symbol())
            }
        }
    }

    // the selected gate, if it may feed the gate at `pos`
    fn connectable_source(&self, pos: Position) -> Option<Position> {
        let src = self.selected?;
        let src_gate = self.gates.get(&src)?;
        if src_gate.kind() == GateKind::Output {
            debug!("outputs can't feed other gates ({} -> {})", src, pos);
            return None;
        }
        if self.reaches(src, pos) {
            debug!("connecting {} into {} would close a loop", src, pos);
            return None;
        }
        Some(src)
    }

    // walks input edges breadth first from `from`, skipping stale ones
    fn reaches(&self, from: Position, target: Position) -> bool {
        let mut seen = HashSet::new();
        let mut exec_q = VecDeque::from([from]);
        while let Some(pos) = exec_q.pop_front() {
            if pos == target {
                return true;
            }
            if !seen.insert(pos) {
                continue;
            }
            if let Some(g) = self.gates.get(&pos) {
                exec_q.extend(self.live_edges(g));
            }
        }
        false
    }

    fn set_input_state(&mut self, pos: Position, val: bool) {
        let updated = self.gates.get(&pos).and_then(|g| g.with_state(val).ok());
        if let Some(g) = updated {
            self.replace_gate_at(pos, g);
        }
    }

    fn scrub_edges_to(&mut self, pos: Position) {
        let holders = self
            .gates
            .iter()
            .filter(|(_, g)| g.edges().contains(&pos))
            .map(|(p, _)| *p)
            .collect::<Vec<Position>>();
        for holder in holders {
            if let Some(g) = self.gates.get(&holder).map(|g| g.without_input(pos)) {
                trace!("dropped stale edge {} from {}", pos, holder);
                self.replace_gate_at(holder, g);
            }
        }
    }
}

impl fmt::Display for GridCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut positions = self.gates.keys().copied().collect::<Vec<Position>>();
        positions.sort();
        for pos in positions {
            if let Some(g) = self.gate_at(pos) {
                writeln!(f, "{}: {} {}", pos, g.kind(), g)?;
            }
        }
        Ok(())
    }
}

/// A gate together with the circuit it lives in, which is what its output
/// and expression are computed against.
#[derive(Clone, Copy)]
pub struct GateRef<'a> {
    circuit: &'a GridCircuit,
    pos: Position,
    gate: &'a Gate,
}

impl<'a> GateRef<'a> {
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn gate(&self) -> &'a Gate {
        self.gate
    }

    pub fn kind(&self) -> GateKind {
        self.gate.kind()
    }

    pub fn name(&self) -> Option<&'a str> {
        self.gate.name()
    }

    pub fn output(&self) -> bool {
        self.circuit.eval(self.gate)
    }

    pub fn inputs(&self) -> Vec<Position> {
        self.circuit.live_edges(self.gate)
    }

    pub fn boolean_function(&self) -> String {
        self.circuit.render(self.gate)
    }
}

impl fmt::Display for GateRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [Output: {}]", self.boolean_function(), self.output())?;
        let label = match self.kind() {
            GateKind::Input => return Ok(()),
            k if k.is_single_input() => "Input",
            _ => "Inputs",
        };
        let ins = self
            .inputs()
            .iter()
            .map(Position::to_string)
            .collect::<Vec<String>>();
        write!(f, " [{}: [{}]]", label, ins.join(", "))
    }
}
