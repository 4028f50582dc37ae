use std::{collections::BTreeSet, error::Error, fmt};

use crate::parser::{full_compile, CompileConfig, Predicate};
use crate::records::{Divergence, TableEntry};
use crate::utils::{bind, bits_to_dec, dec_to_bits};

/// Exhaustive comparison is refused above this many combined variables.
pub const MAX_DIVERGENCE_VARIABLES: usize = 20;

#[derive(Debug)]
pub struct ScaleError {
    pub count: usize,
    pub limit: usize,
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScaleError: comparing {} variables is not implemented (limit is {})",
            self.count, self.limit
        )
    }
}

impl Error for ScaleError {}

/// Lazily enumerates every assignment of `vnames`, first name as the most
/// significant bit.
fn entries<'a>(
    vnames: &'a [char],
    predicate: &'a Predicate,
) -> impl Iterator<Item = Result<TableEntry, Box<dyn Error>>> + 'a {
    let n = vnames.len();
    (0..(1u64 << n)).map(move |d| -> Result<TableEntry, Box<dyn Error>> {
        let inputs = dec_to_bits(d, n)?;
        let value = predicate.call(&bind(vnames, &inputs))?;
        Ok(TableEntry::new(inputs, value))
    })
}

pub fn truth_table(vnames: &[char], predicate: &Predicate) -> Result<Vec<TableEntry>, Box<dyn Error>> {
    entries(vnames, predicate).collect()
}

pub fn generate_truth_table(expr: &str, config: &CompileConfig) -> Result<Vec<TableEntry>, Box<dyn Error>> {
    let (vnames, predicate) = full_compile(expr, config)?;
    if vnames.len() > MAX_DIVERGENCE_VARIABLES {
        warn!(
            "enumerating {} rows for {} variables",
            1u64 << vnames.len(),
            vnames.len()
        );
    }

    truth_table(&vnames, &predicate)
}

pub fn find_divergence(
    expr1: &str,
    expr2: &str,
    config: &CompileConfig,
) -> Result<Option<Divergence>, Box<dyn Error>> {
    let (vnames_1, predicate_1) = full_compile(expr1, config)?;
    let (vnames_2, predicate_2) = full_compile(expr2, config)?;

    let vnames: Vec<char> = vnames_1
        .into_iter()
        .chain(vnames_2)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect();

    if vnames.len() > MAX_DIVERGENCE_VARIABLES {
        return Err(Box::new(ScaleError {
            count: vnames.len(),
            limit: MAX_DIVERGENCE_VARIABLES,
        }));
    }
    debug!("comparing over {:?}", vnames);

    // both sides enumerate the same sorted names, so rows line up
    let rows = entries(&vnames, &predicate_1).zip(entries(&vnames, &predicate_2));
    for (e1, e2) in rows {
        let (e1, e2) = (e1?, e2?);
        if e1.value != e2.value {
            debug!("first divergence at row {}", bits_to_dec(&e1.inputs)?);
            return Ok(Some(Divergence {
                inputs: e1.inputs,
                value_1: e1.value,
                value_2: e2.value,
            }));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod test_verify {
    use super::*;

    fn table(expr: &str) -> Vec<TableEntry> {
        generate_truth_table(expr, &CompileConfig::default()).unwrap()
    }

    fn diff(expr1: &str, expr2: &str) -> Option<Divergence> {
        find_divergence(expr1, expr2, &CompileConfig::default()).unwrap()
    }

    #[test]
    fn table_order() {
        let values: Vec<(Vec<bool>, bool)> = table("b + a'")
            .into_iter()
            .map(|e| (e.inputs, e.value))
            .collect();
        assert_eq!(
            values,
            vec![
                (vec![false, false], true),
                (vec![false, true], true),
                (vec![true, false], false),
                (vec![true, true], true),
            ]
        );
    }

    #[test]
    fn table_size_and_distinct_rows() {
        let entries = table("ab + c'd xor e");
        assert_eq!(entries.len(), 32);

        let rows: BTreeSet<Vec<bool>> = entries.into_iter().map(|e| e.inputs).collect();
        assert_eq!(rows.len(), 32);
    }

    #[test]
    fn xor_vs_or() {
        assert_eq!(
            diff("a xor b", "a + b"),
            Some(Divergence {
                inputs: vec![true, true],
                value_1: false,
                value_2: true,
            })
        );
    }

    #[test]
    fn reflexive() {
        for expr in ["a", "a'b + (cd)' ^ e", "(a + b)(c xnor d)'", "w(x + yz)"] {
            assert_eq!(diff(expr, expr), None);
        }
    }

    #[test]
    fn equivalent_forms() {
        assert_eq!(diff("(ab)'", "a' + b'"), None);
        assert_eq!(diff("x'y' + x'z' + xyz", "x xnor yz"), None);
        assert_eq!(diff("a xnor b", "(a ^ b)'"), None);
    }

    #[test]
    fn disjoint_variables() {
        // a is false first, so "a" diverges from "b'" at [0, 0]
        assert_eq!(
            diff("a", "b'"),
            Some(Divergence {
                inputs: vec![false, false],
                value_1: false,
                value_2: true,
            })
        );
    }

    #[test]
    fn scale_guard() {
        let err = find_divergence(
            "abcdefghij",
            "klmnopqrstu",
            &CompileConfig::default(),
        )
        .unwrap_err();
        let scale = err.downcast_ref::<ScaleError>().unwrap();
        assert_eq!(scale.count, 21);
        assert_eq!(scale.limit, MAX_DIVERGENCE_VARIABLES);
    }

    #[test]
    fn twenty_variables_allowed() {
        let mut inputs = vec![false; 10];
        inputs.extend(vec![true; 10]);
        assert_eq!(
            diff("abcdefghij", "klmnopqrst"),
            Some(Divergence {
                inputs,
                value_1: false,
                value_2: true,
            })
        );
    }

    #[test]
    fn syntax_error_propagates() {
        assert!(find_divergence("a", "a +", &CompileConfig::default()).is_err());
    }
}
