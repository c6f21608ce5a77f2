pub mod aggregator;
pub mod classifier;
pub mod scorer;
pub mod taxonomy;

pub use aggregator::{
    action_items, group_by_product, group_by_tier, pipeline_stats, rank, top_by_product,
    ActionGroup, ActionUrgency, PipelineStats, ProductGroups, ScoredLead, TierGroups,
    TopByProduct,
};
pub use classifier::{classify, Confidence, ProductFitResult};
pub use scorer::{recalculated_priority, score, LeadScoreResult, Tier};
pub use taxonomy::{Product, SectorConfig, SubSector, SubSectorMatch, Taxonomy};
