use std::{collections::HashMap, fmt};

use crate::consts::DnfStyle;

/// Truth table of one gate: a column per input, sorted by name, followed by
/// a result column named after the gate's expression. Rows keep the order
/// they were enumerated in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfValues {
    cols: Vec<String>,
    col_idx: HashMap<String, usize>,
    rows: Vec<Vec<bool>>,
}

impl TableOfValues {
    pub fn new(cols: Vec<String>) -> TableOfValues {
        let mut col_idx = HashMap::new();
        // a result column can repeat an input name, lookups resolve to the input
        for (i, c) in cols.iter().enumerate() {
            col_idx.entry(c.clone()).or_insert(i);
        }
        TableOfValues {
            cols,
            col_idx,
            rows: Vec::new(),
        }
    }

    pub(crate) fn from_rows(cols: Vec<String>, rows: Vec<Vec<bool>>) -> TableOfValues {
        let mut t = TableOfValues::new(cols);
        for row in rows {
            t.push_row(row);
        }
        t
    }

    // rows are built by the circuit's enumeration, always one cell per column
    fn push_row(&mut self, row: Vec<bool>) -> usize {
        debug_assert_eq!(row.len(), self.cols.len(), "row width must match columns");
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn names(&self) -> &[String] {
        &self.cols
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn input_names(&self) -> &[String] {
        self.cols.split_last().map(|(_, ins)| ins).unwrap_or(&[])
    }

    pub fn result_name(&self) -> Option<&str> {
        self.cols.last().map(String::as_str)
    }

    pub fn get_val_at(&self, i: usize, col: &str) -> Option<bool> {
        let j = *self.col_idx.get(col)?;
        self.rows.get(i)?.get(j).copied()
    }

    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().filter_map(|row| row.last().copied())
    }

    pub fn is_never_true(&self) -> bool {
        !self.results().any(|r| r)
    }

    /// Canonical sum of minterms over every row where the result is true,
    /// e.g. `(!a ^ b) v (a ^ !b)`. A function that is never true is `0`.
    pub fn disjunctive_normal_form(&self) -> String {
        self.dnf_with(&DnfStyle::MATH)
    }

    pub fn dnf_with(&self, style: &DnfStyle) -> String {
        let terms: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| {
                let (res, ins) = row.split_last()?;
                if !*res {
                    return None;
                }
                Some(format!("({})", self.minterm(ins, style)))
            })
            .collect();
        if terms.is_empty() {
            return style.falsity.to_string();
        }
        terms.join(style.or)
    }

    fn minterm(&self, ins: &[bool], style: &DnfStyle) -> String {
        if ins.is_empty() {
            return style.truth.to_string();
        }
        ins.iter()
            .zip(&self.cols)
            .map(|(v, name)| {
                if *v {
                    name.clone()
                } else {
                    format!("{}{}", style.not, name)
                }
            })
            .collect::<Vec<String>>()
            .join(style.and)
    }
}

impl fmt::Display for TableOfValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cols.join(" | "))?;
        let width = self.cols.iter().map(String::len).sum::<usize>()
            + 3 * self.cols.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(width))?;
        for row in &self.rows {
            let cells = row
                .iter()
                .map(|v| if *v { "1" } else { "0" })
                .collect::<Vec<&str>>();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Every assignment of `bits` booleans in binary counting order. Index 0 is
/// the most significant bit, so the first half of the sequence holds it low.
/// Widths past 63 bits cannot be counted and yield nothing.
pub fn bitwise_counter(bits: usize) -> impl Iterator<Item = Vec<bool>> {
    let total_combs = u32::try_from(bits)
        .ok()
        .filter(|b| *b < u64::BITS)
        .map_or(0, |b| 1u64 << b);
    (0..total_combs).map(move |n| {
        (0..bits)
            .map(|i| (1 << i & n) > 0)
            .rev()
            .collect::<Vec<bool>>()
    })
}
