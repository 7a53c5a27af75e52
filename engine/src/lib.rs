//! Combinational logic circuits on a grid.
//!
//! Gates sit on grid positions and take their inputs from other positions.
//! A [`GridCircuit`] places and wires gates, evaluates them on demand,
//! renders each output as a boolean expression and tabulates any gate over
//! all of its input assignments.
//!
//! ```
//! use gsim_engine::{GateKind, GridCircuit, Position};
//!
//! let (a, b, and, out) = (
//!     Position::new(0, 0),
//!     Position::new(0, 1),
//!     Position::new(1, 0),
//!     Position::new(2, 0),
//! );
//! let mut c = GridCircuit::new();
//! c.set_selected_tool(GateKind::Input).add_gates([a, b]);
//! c.set_selected_tool(GateKind::And).add_gate(and);
//! c.set_selected_tool(GateKind::Output).add_gate(out);
//!
//! c.toggle_selection(a).unwrap().interact_with(and);
//! c.toggle_selection(b).unwrap().interact_with(and);
//! c.toggle_selection(and).unwrap().interact_with(out);
//! assert_eq!(c.boolean_functions().unwrap(), "f1 = a ^ b");
//!
//! let table = c.table_of_values().unwrap();
//! assert_eq!(table.disjunctive_normal_form(), "(a ^ b)");
//! ```

pub mod circuit;
pub mod components;
pub mod consts;
pub mod error;
pub mod names;
pub mod quine_mccluskey;
pub mod table;
pub mod types;
pub mod utils;

pub use circuit::{GateRef, GridCircuit};
pub use components::Gate;
pub use consts::DnfStyle;
pub use error::CircuitError;
pub use names::NameAllocator;
pub use table::TableOfValues;
pub use types::{GateKind, Position};
