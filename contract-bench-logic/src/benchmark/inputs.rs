use crate::types::{
    benchmarks::{BenchmarkKey, FunctionBenchmark},
    contracts::{ContractDetail, Variant},
};
use std::collections::HashMap;

/// Free-text parameters typed next to each function row, keyed per variant so
/// that same-named Solidity and ink! functions never share a value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkInputs {
    staged: HashMap<BenchmarkKey, String>,
}

/// A function row together with the input staged for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkBinding<'a> {
    pub key: BenchmarkKey,
    pub row: &'a FunctionBenchmark,
    pub input: &'a str,
}

impl BenchmarkInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, key: BenchmarkKey, input: impl Into<String>) {
        self.staged.insert(key, input.into());
    }

    pub fn get(&self, key: &BenchmarkKey) -> &str {
        self.staged.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn clear(&mut self, key: &BenchmarkKey) -> Option<String> {
        self.staged.remove(key)
    }

    /// Pairs every function row of the contract with its staged input.
    /// Solidity rows come first, each variant in row order.
    pub fn bind<'a>(&'a self, detail: &'a ContractDetail) -> Vec<BenchmarkBinding<'a>> {
        [Variant::Solidity, Variant::Ink]
            .into_iter()
            .flat_map(move |variant| {
                detail
                    .functions(variant)
                    .unwrap_or_default()
                    .iter()
                    .map(move |row| {
                        let key = BenchmarkKey::new(variant, row.name.clone());
                        let input = self.get(&key);
                        BenchmarkBinding { key, row, input }
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_name_in_both_variants_does_not_collide() {
        let mut inputs = BenchmarkInputs::new();
        inputs.stage(BenchmarkKey::new(Variant::Solidity, "swap"), "100");
        inputs.stage(BenchmarkKey::new(Variant::Ink, "swap"), "200");

        assert_eq!(inputs.get(&BenchmarkKey::new(Variant::Solidity, "swap")), "100");
        assert_eq!(inputs.get(&BenchmarkKey::new(Variant::Ink, "swap")), "200");
        assert_eq!(inputs.get(&BenchmarkKey::new(Variant::Ink, "transfer")), "");

        assert_eq!(
            inputs.clear(&BenchmarkKey::new(Variant::Ink, "swap")),
            Some("200".into())
        );
        assert_eq!(inputs.get(&BenchmarkKey::new(Variant::Ink, "swap")), "");
        assert_eq!(inputs.get(&BenchmarkKey::new(Variant::Solidity, "swap")), "100");
    }

    #[test]
    fn binds_every_row_of_both_variants() {
        let detail = fixtures::defi_swap_detail();
        let mut inputs = BenchmarkInputs::new();
        inputs.stage(BenchmarkKey::new(Variant::Ink, "add_liquidity"), "5, 10");

        let bindings = inputs.bind(&detail);
        let bound: Vec<_> = bindings
            .iter()
            .map(|binding| (binding.key.to_string(), binding.input))
            .collect();
        assert_eq!(
            bound,
            vec![
                ("solidity/swap".to_string(), ""),
                ("solidity/addLiquidity".to_string(), ""),
                ("ink/swap".to_string(), ""),
                ("ink/add_liquidity".to_string(), "5, 10"),
            ]
        );
        assert_eq!(bindings[3].row.gas_used, "48,000");
    }

    #[test]
    fn contract_without_variant_details_binds_nothing() {
        let detail = ContractDetail::from_summary(fixtures::sample_summaries().remove(1));
        assert!(BenchmarkInputs::new().bind(&detail).is_empty());
    }
}
