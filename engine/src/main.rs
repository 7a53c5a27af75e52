use gsim_engine::{CircuitError, DnfStyle, GateKind, GridCircuit, Position};
use log::info;

fn connect(c: &mut GridCircuit, from: (i32, i32), to: (i32, i32)) -> Result<(), CircuitError> {
    let from = Position::from(from);
    if !c.is_selected(from) {
        c.toggle_selection(from)?;
    }
    if !c.interact_with(Position::from(to)) {
        info!("could not connect {} into {:?}", from, to);
    }
    Ok(())
}

// f1 = a xor b built from and/or/not, f2 = a and b
fn half_adder() -> Result<GridCircuit, CircuitError> {
    let mut c = GridCircuit::new();
    c.set_selected_tool(GateKind::Input)
        .add_gates([Position::new(0, 0), Position::new(0, 1)]);

    c.set_selected_tool(GateKind::Not)
        .add_gates([Position::new(1, 0), Position::new(1, 1)]);
    connect(&mut c, (0, 0), (1, 0))?;
    connect(&mut c, (0, 1), (1, 1))?;
    c.set_selected_tool(GateKind::And)
        .add_gates([Position::new(2, 0), Position::new(2, 1)]);
    connect(&mut c, (0, 0), (2, 0))?;
    connect(&mut c, (1, 1), (2, 0))?;
    connect(&mut c, (0, 1), (2, 1))?;
    connect(&mut c, (1, 0), (2, 1))?;
    c.set_selected_tool(GateKind::Or).add_gate(Position::new(3, 0));
    connect(&mut c, (2, 0), (3, 0))?;
    connect(&mut c, (2, 1), (3, 0))?;
    c.set_selected_tool(GateKind::Output).add_gate(Position::new(4, 0));
    connect(&mut c, (3, 0), (4, 0))?;

    c.set_selected_tool(GateKind::And).add_gate(Position::new(1, 2));
    connect(&mut c, (0, 0), (1, 2))?;
    connect(&mut c, (0, 1), (1, 2))?;
    c.set_selected_tool(GateKind::Output).add_gate(Position::new(2, 2));
    connect(&mut c, (1, 2), (2, 2))?;
    Ok(c)
}

fn main() -> Result<(), CircuitError> {
    env_logger::init();

    let mut c = half_adder()?;
    info!("built half adder with {} gates", c.len());
    print!("{}", c);
    println!();
    if let Some(functions) = c.boolean_functions() {
        println!("{}", functions);
    }

    // tabulate the sum output
    let sum = Position::new(4, 0);
    if !c.is_selected(sum) {
        c.toggle_selection(sum)?;
    }
    if let Some(t) = c.table_of_values() {
        println!("-------");
        print!("{}", t);
        println!("dnf        : {}", t.disjunctive_normal_form());
        println!("dnf (c)    : {}", t.dnf_with(&DnfStyle::C_LIKE));
        println!("simplified : {}", t.simplified_form());
    }
    Ok(())
}
