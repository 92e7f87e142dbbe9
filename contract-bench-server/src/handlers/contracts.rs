use super::ApiError;
use actix_web::web::{self, Json};
use contract_bench_logic::{
    directory::{
        ContractFilter, ContractListView, ContractQuery, Selection, SortField, SortOrder, SortSpec,
    },
    ContractOverview, ContractType, DashboardService, Network,
};
use serde::Deserialize;

/// Query string of the contract directory.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListContractsParams {
    pub search: String,
    pub network: Selection<Network>,
    pub contract_type: Selection<ContractType>,
    pub sort_field: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl From<ListContractsParams> for ContractQuery {
    fn from(params: ListContractsParams) -> Self {
        let default = SortSpec::default();
        let sort = match (params.sort_field, params.sort_order) {
            (None, None) => default,
            (Some(field), order) => SortSpec::new(field, order.unwrap_or(SortOrder::Asc)),
            (None, Some(order)) => SortSpec::new(default.field, order),
        };
        ContractQuery::new(
            ContractFilter {
                search: params.search,
                network: params.network,
                contract_type: params.contract_type,
            },
            sort,
        )
    }
}

pub async fn list(
    service: web::Data<DashboardService>,
    params: web::Query<ListContractsParams>,
) -> Result<Json<ContractListView>, ApiError> {
    let query = ContractQuery::from(params.into_inner());
    let view = service.list_contracts(&query).await?;
    Ok(Json(view))
}

pub async fn get(
    service: web::Data<DashboardService>,
    id: web::Path<String>,
) -> Result<Json<ContractOverview>, ApiError> {
    let overview = service.get_contract_detail(&id).await?;
    Ok(Json(overview))
}
