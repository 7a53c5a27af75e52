use gsim_engine::{GateKind, GridCircuit, Position};
use proptest::prelude::*;

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn arb_kind() -> impl Strategy<Value = GateKind> {
    prop::sample::select(GateKind::ALL.to_vec())
}

fn expected_input_name(i: usize) -> String {
    let letter = (b'a' + (i % 26) as u8) as char;
    match i / 26 {
        0 => letter.to_string(),
        round => format!("{}{}", letter, round),
    }
}

// inputs on column 0 feeding a single gate of `kind` at (1, 0)
fn fan_in(kind: GateKind, states: &[bool]) -> GridCircuit {
    let mut c = GridCircuit::new();
    c.set_selected_tool(GateKind::Input);
    for (y, on) in states.iter().enumerate() {
        let pos = p(0, y as i32);
        c.add_gate(pos);
        if *on {
            c.interact_with(pos);
        }
    }
    c.set_selected_tool(kind).add_gate(p(1, 0));
    for y in 0..states.len() {
        let src = p(0, y as i32);
        c.toggle_selection(src).unwrap();
        c.interact_with(p(1, 0));
    }
    c
}

proptest! {
    #[test]
    fn placing_twice_fails(x in -50..50i32, y in -50..50i32, first in arb_kind(), second in arb_kind()) {
        let mut c = GridCircuit::new();
        prop_assert!(c.set_selected_tool(first).add_gate(p(x, y)));
        prop_assert!(!c.set_selected_tool(second).add_gate(p(x, y)));
        prop_assert_eq!(c.len(), 1);
        prop_assert_eq!(c.gate_at(p(x, y)).unwrap().kind(), first);
    }

    #[test]
    fn input_names_follow_alphabet(n in 1..90usize) {
        let mut c = GridCircuit::new();
        c.set_selected_tool(GateKind::Input);
        for i in 0..n {
            c.add_gate(p(i as i32, 0));
        }
        for i in 0..n {
            let name = c.gate_at(p(i as i32, 0)).unwrap().name().map(str::to_owned);
            prop_assert_eq!(name, Some(expected_input_name(i)));
        }
    }

    #[test]
    fn output_names_ignore_other_kinds(kinds in prop::collection::vec(arb_kind(), 1..40)) {
        let mut c = GridCircuit::new();
        let mut outputs = 0;
        for (x, kind) in kinds.iter().enumerate() {
            c.set_selected_tool(*kind).add_gate(p(x as i32, 0));
            if *kind == GateKind::Output {
                outputs += 1;
                let name = c.gate_at(p(x as i32, 0)).unwrap().name().map(str::to_owned);
                prop_assert_eq!(name, Some(format!("f{}", outputs)));
            }
        }
    }

    #[test]
    fn chains_never_close(len in 1..12usize, back in 0..12usize, kind in prop::sample::select(vec![GateKind::And, GateKind::Or, GateKind::Xor, GateKind::Not])) {
        let mut c = GridCircuit::new();
        c.set_selected_tool(kind);
        for x in 0..len {
            c.add_gate(p(x as i32, 0));
        }
        for x in 1..len {
            c.toggle_selection(p(x as i32 - 1, 0)).unwrap();
            prop_assert!(c.interact_with(p(x as i32, 0)));
        }
        // feed the end of the chain back into some gate on it
        let last = p(len as i32 - 1, 0);
        let target = p((back % len) as i32, 0);
        if !c.is_selected(last) {
            c.toggle_selection(last).unwrap();
        }
        let before = c.gate_at(target).unwrap().inputs();
        prop_assert!(!c.interact_with(target));
        prop_assert_eq!(c.gate_at(target).unwrap().inputs(), before);
    }

    #[test]
    fn table_enumerates_and_restores(
        states in prop::collection::vec(any::<bool>(), 0..7),
        kind in prop::sample::select(vec![GateKind::And, GateKind::Or, GateKind::Xor]),
    ) {
        let mut c = fan_in(kind, &states);
        if !c.is_selected(p(1, 0)) {
            c.toggle_selection(p(1, 0)).unwrap();
        }
        let t = c.table_of_values().unwrap();
        prop_assert_eq!(t.rows().len(), 1usize << states.len());

        for (i, row) in t.rows().iter().enumerate() {
            let ins = &row[..states.len()];
            // row i spells i in binary, first input most significant
            let n = ins.iter().fold(0usize, |acc, b| acc << 1 | *b as usize);
            prop_assert_eq!(n, i);
            let ones = ins.iter().filter(|b| **b).count();
            let expected = match kind {
                GateKind::And => !ins.is_empty() && ones == ins.len(),
                GateKind::Or => ones > 0,
                _ => ones == 1,
            };
            prop_assert_eq!(row[states.len()], expected);
        }

        for (y, on) in states.iter().enumerate() {
            prop_assert_eq!(c.gate_at(p(0, y as i32)).unwrap().output(), *on);
        }
    }

    #[test]
    fn dnf_reproduces_the_table(states in prop::collection::vec(any::<bool>(), 1..5)) {
        let mut c = fan_in(GateKind::Xor, &states);
        if !c.is_selected(p(1, 0)) {
            c.toggle_selection(p(1, 0)).unwrap();
        }
        let t = c.table_of_values().unwrap();
        let dnf = t.disjunctive_normal_form();
        let true_rows = t
            .rows()
            .iter()
            .filter(|row| row[states.len()])
            .collect::<Vec<_>>();
        let terms = dnf.split(" v ").collect::<Vec<&str>>();
        prop_assert_eq!(terms.len(), true_rows.len());

        // each term spells out one true row, literal by literal
        for (term, row) in terms.iter().zip(true_rows) {
            let literals = term
                .trim_start_matches('(')
                .trim_end_matches(')')
                .split(" ^ ")
                .collect::<Vec<&str>>();
            prop_assert_eq!(literals.len(), states.len());
            for ((lit, name), val) in literals.iter().zip(t.input_names()).zip(row) {
                match lit.strip_prefix('!') {
                    Some(bare) => {
                        prop_assert_eq!(bare, name.as_str());
                        prop_assert!(!*val);
                    }
                    None => {
                        prop_assert_eq!(*lit, name.as_str());
                        prop_assert!(*val);
                    }
                }
            }
        }
    }
}
