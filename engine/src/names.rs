use crate::consts::{FIRST_INPUT_LETTER, LAST_INPUT_LETTER, OUTPUT_PREFIX};

/// Hands out display names for input and output gates. Names are never
/// reused, even after the gate that held one is removed.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    input_letter: u8,
    // number of completed passes over the alphabet
    input_round: u32,
    next_output: u32,
}

impl NameAllocator {
    pub fn new() -> NameAllocator {
        NameAllocator {
            input_letter: FIRST_INPUT_LETTER,
            input_round: 0,
            next_output: 1,
        }
    }

    /// a, b, ..., z, a1, b1, ..., z1, a2, ...
    pub fn next_input_name(&mut self) -> String {
        let mut name = (self.input_letter as char).to_string();
        if self.input_round > 0 {
            name.push_str(&self.input_round.to_string());
        }
        if self.input_letter == LAST_INPUT_LETTER {
            self.input_letter = FIRST_INPUT_LETTER;
            self.input_round += 1;
        } else {
            self.input_letter += 1;
        }
        name
    }

    /// f1, f2, f3, ...
    pub fn next_output_name(&mut self) -> String {
        let name = format!("{}{}", OUTPUT_PREFIX, self.next_output);
        self.next_output += 1;
        name
    }
}

impl Default for NameAllocator {
    fn default() -> Self {
        NameAllocator::new()
    }
}
