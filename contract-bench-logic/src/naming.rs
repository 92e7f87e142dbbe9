//! Pairing of same-intent functions across contract variants.
//!
//! Names are paired heuristically: `addLiquidity` and `add_liquidity` are the
//! same function once lower-cased with underscores removed. The pairing is not
//! guaranteed to be unique; when several candidates match, the first one wins.

use crate::types::benchmarks::FunctionBenchmark;
use std::collections::HashSet;

pub fn normalize_function_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn same_function(a: &str, b: &str) -> bool {
    normalize_function_name(a) == normalize_function_name(b)
}

/// First row in `candidates` naming the same function as `name`.
pub fn find_counterpart<'a>(
    name: &str,
    candidates: &'a [FunctionBenchmark],
) -> Option<&'a FunctionBenchmark> {
    let normalized = normalize_function_name(name);
    candidates
        .iter()
        .find(|candidate| normalize_function_name(&candidate.name) == normalized)
}

/// Normalized names present in both sets.
pub fn common_names<'a, 'b>(
    left: impl IntoIterator<Item = &'a str>,
    right: impl IntoIterator<Item = &'b str>,
) -> Vec<String> {
    let right: HashSet<_> = right.into_iter().map(normalize_function_name).collect();
    let mut seen = HashSet::new();
    left.into_iter()
        .map(normalize_function_name)
        .filter(|name| right.contains(name) && seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("addLiquidity", "addliquidity")]
    #[case("add_liquidity", "addliquidity")]
    #[case("__get_reserve_a__", "getreservea")]
    #[case("SWAP", "swap")]
    #[case("", "")]
    fn normalizes(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize_function_name(name), expected);
    }

    #[test]
    fn normalization_is_symmetric() {
        assert!(same_function("addLiquidity", "add_liquidity"));
        assert!(same_function("add_liquidity", "addLiquidity"));
        assert!(!same_function("swap", "swap_exact"));
    }

    #[test]
    fn first_counterpart_wins() {
        let candidates = vec![
            FunctionBenchmark::new("transfer", "1", "1ms", "2024-01-15"),
            FunctionBenchmark::new("add_liquidity", "48,000", "11ms", "2024-01-15"),
            FunctionBenchmark::new("addliquidity", "50,000", "12ms", "2024-01-16"),
        ];
        let found = find_counterpart("addLiquidity", &candidates).expect("counterpart exists");
        assert_eq!(found.gas_used, "48,000");
        assert!(find_counterpart("removeLiquidity", &candidates).is_none());
        assert!(find_counterpart("swap", &[]).is_none());
    }

    #[test]
    fn common_names_are_deduplicated() {
        let common = common_names(
            ["swap", "addLiquidity", "add_liquidity", "owner"],
            ["swap", "add_liquidity", "transfer"],
        );
        assert_eq!(common, vec!["swap".to_string(), "addliquidity".to_string()]);
        assert!(common_names(["a"], ["b"]).is_empty());
    }
}
