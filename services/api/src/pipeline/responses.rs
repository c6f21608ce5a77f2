use serde::Serialize;

use prospect_scoring::{
    ActionGroup, PipelineStats, ProductGroups, ScoredLead, TierGroups, TopByProduct,
};

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub data: Vec<ScoredLead>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct PipelineReportResponse {
    pub ranked: Vec<ScoredLead>,
    pub by_product: ProductGroups,
    pub by_tier: TierGroups,
    pub action_items: Vec<ActionGroup>,
    pub top_by_product: TopByProduct,
    pub stats: PipelineStats,
    pub count: usize,
}
