//! Sample records the dashboard is seeded with.

use crate::types::{
    abi::{AbiParam, InkAbi, InkArg, InkMessage, InkSpec, InkTypeRef, SolidityAbi, SolidityAbiEntry},
    benchmarks::FunctionBenchmark,
    contracts::{ContractDetail, ContractSummary, ContractType, Network, VariantDetail},
};

fn summary(
    id: &str,
    name: &str,
    solidity: Option<(&str, &str)>,
    ink: Option<(&str, &str)>,
    contract_type: ContractType,
) -> ContractSummary {
    ContractSummary {
        id: id.into(),
        name: name.into(),
        solidity_address: solidity.map(|(address, _)| address.into()),
        solidity_deployed_time: solidity.map(|(_, time)| time.into()),
        ink_address: ink.map(|(address, _)| address.into()),
        ink_deployed_time: ink.map(|(_, time)| time.into()),
        network: Network::Passethub,
        contract_type,
    }
}

pub fn sample_summaries() -> Vec<ContractSummary> {
    vec![
        summary(
            "1",
            "DeFi Swap Contract",
            Some(("0x1234...5678", "2024-01-15 14:30:22")),
            Some((
                "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
                "2024-01-15 14:35:18",
            )),
            ContractType::Both,
        ),
        summary(
            "2",
            "NFT Marketplace",
            Some(("0xabcd...efgh", "2024-01-14 09:15:45")),
            None,
            ContractType::Solidity,
        ),
        summary(
            "3",
            "Governance Token",
            None,
            Some((
                "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty",
                "2024-01-13 16:45:12",
            )),
            ContractType::Ink,
        ),
        summary(
            "4",
            "Staking Pool",
            Some(("0xdef0...1234", "2024-01-12 11:20:33")),
            Some((
                "5DAAnrj7VHTznn2AWBemMuyBwZWs6FNFjdyVXUeYum3PTXFy",
                "2024-01-12 11:25:45",
            )),
            ContractType::Both,
        ),
    ]
}

fn param(name: &str, kind: &str) -> AbiParam {
    AbiParam {
        name: name.into(),
        kind: kind.into(),
    }
}

fn ink_type(display_name: &str, type_id: u32) -> InkTypeRef {
    InkTypeRef {
        display_name: vec![display_name.into()],
        type_id,
    }
}

/// Detail of the first sample contract, the only one with build and
/// benchmark data.
pub fn defi_swap_detail() -> ContractDetail {
    let mut summaries = sample_summaries();
    let mut detail = ContractDetail::from_summary(summaries.swap_remove(0));
    detail.solidity = Some(VariantDetail {
        gas_consumption: Some("2,450,000".into()),
        bytecode: Some("0x608060405234801561001057600080fd5b50...".into()),
        bytecode_size: Some("12.5 KB".into()),
        abi: Some(SolidityAbi(vec![SolidityAbiEntry {
            kind: Some("function".into()),
            name: Some("swap".into()),
            inputs: vec![param("amount", "uint256")],
            outputs: vec![param("", "bool")],
        }])),
        functions: vec![
            FunctionBenchmark::new("swap", "45,000", "12ms", "2024-01-15"),
            FunctionBenchmark::new("addLiquidity", "65,000", "18ms", "2024-01-15"),
        ],
    });
    detail.ink = Some(VariantDetail {
        gas_consumption: Some("1,850,000".into()),
        bytecode: Some("0x0061736d0100000001...".into()),
        bytecode_size: Some("8.2 KB".into()),
        abi: Some(InkAbi {
            spec: InkSpec {
                constructors: vec![],
                messages: vec![InkMessage {
                    name: "swap".into(),
                    args: vec![InkArg {
                        name: "amount".into(),
                        type_ref: ink_type("u128", 0),
                    }],
                    return_type: Some(ink_type("bool", 1)),
                }],
            },
        }),
        functions: vec![
            FunctionBenchmark::new("swap", "32,000", "8ms", "2024-01-15"),
            FunctionBenchmark::new("add_liquidity", "48,000", "11ms", "2024-01-15"),
        ],
    });
    detail
}

/// All sample contracts in directory order. Contracts other than the first
/// carry no build or benchmark data yet.
pub fn sample_details() -> Vec<ContractDetail> {
    std::iter::once(defi_swap_detail())
        .chain(
            sample_summaries()
                .into_iter()
                .skip(1)
                .map(ContractDetail::from_summary),
        )
        .collect()
}
