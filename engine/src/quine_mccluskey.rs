use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{consts::DnfStyle, table::TableOfValues};

/// One literal slot per input column; `None` where the variable has been
/// eliminated by merging.
pub type Cube = Vec<Option<bool>>;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    // rows of the table this implicant covers, ascending
    pub minterms: Vec<usize>,
    pub cube: Cube,
}

impl TableOfValues {
    /// Sum of the prime implicants of the result column. Not guaranteed
    /// minimal: every prime is kept, essential or not.
    pub fn simplified_form(&self) -> String {
        self.simplified_with(&DnfStyle::MATH)
    }

    pub fn simplified_with(&self, style: &DnfStyle) -> String {
        let primes = prime_implicants(self);
        if primes.is_empty() {
            return style.falsity.to_string();
        }
        let names = self.input_names();
        primes
            .iter()
            .map(|p| {
                let lits = p
                    .cube
                    .iter()
                    .zip(names)
                    .filter_map(|(v, name)| {
                        v.map(|v| {
                            if v {
                                name.clone()
                            } else {
                                format!("{}{}", style.not, name)
                            }
                        })
                    })
                    .collect::<Vec<String>>();
                if lits.is_empty() {
                    style.truth.to_string()
                } else if lits.len() > 1 && primes.len() > 1 {
                    format!("({})", lits.join(style.and))
                } else {
                    lits.join(style.and)
                }
            })
            .collect::<Vec<String>>()
            .join(style.or)
    }
}

/// Prime implicants of the result column, ordered by the rows they cover.
pub fn prime_implicants(t: &TableOfValues) -> Vec<Implicant> {
    let minterms = t.rows().iter().enumerate().filter_map(|(i, row)| {
        let (res, ins) = row.split_last()?;
        if !*res {
            return None;
        }
        Some(Implicant {
            minterms: vec![i],
            cube: ins.iter().map(|v| Some(*v)).collect(),
        })
    });
    let mut grp = grp_by_ones(minterms);
    let mut primes = BTreeSet::new();

    loop {
        let mut paired = HashSet::<(usize, usize)>::new();
        let mut merged = BTreeSet::new();

        // only neighbouring groups can differ in exactly one literal
        for (curr_grp_no, curr_rows) in &grp {
            let Some(nxt_rows) = grp.get(&(curr_grp_no + 1)) else {
                continue;
            };
            for (i, a) in curr_rows.iter().enumerate() {
                for (j, b) in nxt_rows.iter().enumerate() {
                    if let Some(c) = combine(a, b) {
                        merged.insert(c);
                        paired.insert((*curr_grp_no, i));
                        paired.insert((curr_grp_no + 1, j));
                    }
                }
            }
        }

        for (g_no, rows) in &grp {
            for (i, imp) in rows.iter().enumerate() {
                if !paired.contains(&(*g_no, i)) {
                    primes.insert(imp.clone());
                }
            }
        }

        if merged.is_empty() {
            break;
        }
        log::trace!("merged {} implicants into the next round", merged.len());
        grp = grp_by_ones(merged);
    }

    let mut primes = primes.into_iter().collect::<Vec<Implicant>>();
    primes.sort_by(|a, b| a.minterms.cmp(&b.minterms));
    primes
}

// two cubes merge when they differ in exactly one fixed literal
fn combine(a: &Implicant, b: &Implicant) -> Option<Implicant> {
    if a.cube.len() != b.cube.len() {
        return None;
    }
    let mut diff = None;
    for (k, (x, y)) in a.cube.iter().zip(&b.cube).enumerate() {
        if x == y {
            continue;
        }
        if diff.is_some() || x.is_none() || y.is_none() {
            return None;
        }
        diff = Some(k);
    }
    let k = diff?;
    let mut cube = a.cube.clone();
    cube[k] = None;
    let mut minterms = a
        .minterms
        .iter()
        .chain(b.minterms.iter())
        .copied()
        .collect::<Vec<usize>>();
    minterms.sort();
    minterms.dedup();
    Some(Implicant { minterms, cube })
}

fn grp_by_ones(imps: impl IntoIterator<Item = Implicant>) -> BTreeMap<usize, Vec<Implicant>> {
    let mut grps = BTreeMap::<usize, Vec<Implicant>>::new();
    for imp in imps {
        let num_ones = imp.cube.iter().filter(|v| **v == Some(true)).count();
        grps.entry(num_ones).or_default().push(imp);
    }
    grps
}
