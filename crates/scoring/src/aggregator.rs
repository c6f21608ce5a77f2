//! Pure, stateless reporting functions over a batch of scored leads.

use serde::{Deserialize, Serialize};

use prospect_common::types::LeadInput;

use crate::scorer::{score, LeadScoreResult, Tier};
use crate::taxonomy::{Product, Taxonomy};

/// A lead paired with its score result for one ranking/reporting pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLead {
    pub lead: LeadInput,
    pub score: LeadScoreResult,
}

impl ScoredLead {
    pub fn build(taxonomy: &Taxonomy, lead: LeadInput) -> Self {
        let score = score(taxonomy, &lead);
        Self { lead, score }
    }

    fn product(&self) -> Product {
        self.score.product_fit.primary
    }
}

/// Sort descending by total score. The sort is stable by contract: leads
/// with equal totals keep their input order.
pub fn rank(mut leads: Vec<ScoredLead>) -> Vec<ScoredLead> {
    leads.sort_by(|a, b| b.score.total.cmp(&a.score.total));
    leads
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductGroups {
    pub federal: Vec<ScoredLead>,
    pub enterprise: Vec<ScoredLead>,
    pub growth: Vec<ScoredLead>,
}

impl ProductGroups {
    pub fn get(&self, product: Product) -> &[ScoredLead] {
        match product {
            Product::Federal => &self.federal,
            Product::Enterprise => &self.enterprise,
            Product::Growth => &self.growth,
        }
    }

    pub fn len(&self) -> usize {
        self.federal.len() + self.enterprise.len() + self.growth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition by primary product; every input lead lands in exactly one
/// bucket, each bucket sorted by total descending.
pub fn group_by_product(leads: &[ScoredLead]) -> ProductGroups {
    let mut groups = ProductGroups {
        federal: Vec::new(),
        enterprise: Vec::new(),
        growth: Vec::new(),
    };
    for lead in leads {
        match lead.product() {
            Product::Federal => groups.federal.push(lead.clone()),
            Product::Enterprise => groups.enterprise.push(lead.clone()),
            Product::Growth => groups.growth.push(lead.clone()),
        }
    }
    groups.federal = rank(groups.federal);
    groups.enterprise = rank(groups.enterprise);
    groups.growth = rank(groups.growth);
    groups
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierGroups {
    pub hot: Vec<ScoredLead>,
    pub warm: Vec<ScoredLead>,
    pub medium: Vec<ScoredLead>,
    pub low: Vec<ScoredLead>,
}

impl TierGroups {
    pub fn len(&self) -> usize {
        self.hot.len() + self.warm.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition by tier; same completeness guarantee as product grouping.
pub fn group_by_tier(leads: &[ScoredLead]) -> TierGroups {
    let mut groups = TierGroups {
        hot: Vec::new(),
        warm: Vec::new(),
        medium: Vec::new(),
        low: Vec::new(),
    };
    for lead in leads {
        match lead.score.tier {
            Tier::Hot => groups.hot.push(lead.clone()),
            Tier::Warm => groups.warm.push(lead.clone()),
            Tier::Medium => groups.medium.push(lead.clone()),
            Tier::Low => groups.low.push(lead.clone()),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionUrgency {
    High,
    Medium,
    Low,
}

impl ActionUrgency {
    fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Known next-action strings mapped to urgency buckets; anything
/// unrecognized defaults to low.
const ACTION_URGENCY: &[(&str, ActionUrgency)] = &[
    ("Enrich now", ActionUrgency::High),
    ("Ready for outreach", ActionUrgency::High),
    ("Queue for enrichment", ActionUrgency::Medium),
    ("Nurture", ActionUrgency::Medium),
    ("Research needed", ActionUrgency::Low),
    ("Review", ActionUrgency::Low),
];

fn urgency_for_action(action: &str) -> ActionUrgency {
    ACTION_URGENCY
        .iter()
        .find(|(known, _)| *known == action)
        .map(|(_, urgency)| *urgency)
        .unwrap_or(ActionUrgency::Low)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionGroup {
    pub action: String,
    pub urgency: ActionUrgency,
    pub leads: Vec<ScoredLead>,
}

/// Group leads by next-action string (encounter order), then order groups
/// high-to-low urgency; equal urgencies keep encounter order.
pub fn action_items(leads: &[ScoredLead]) -> Vec<ActionGroup> {
    let mut groups: Vec<ActionGroup> = Vec::new();
    for lead in leads {
        let action = &lead.score.next_action;
        match groups.iter_mut().find(|g| g.action == *action) {
            Some(group) => group.leads.push(lead.clone()),
            None => groups.push(ActionGroup {
                action: action.clone(),
                urgency: urgency_for_action(action),
                leads: vec![lead.clone()],
            }),
        }
    }
    groups.sort_by_key(|g| g.urgency.rank());
    groups
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopByProduct {
    pub federal: Option<ScoredLead>,
    pub enterprise: Option<ScoredLead>,
    pub growth: Option<ScoredLead>,
}

/// The single highest-scoring lead per product, if any.
pub fn top_by_product(leads: &[ScoredLead]) -> TopByProduct {
    let groups = group_by_product(leads);
    TopByProduct {
        federal: groups.federal.first().cloned(),
        enterprise: groups.enterprise.first().cloned(),
        growth: groups.growth.first().cloned(),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStats {
    pub total: usize,
    pub hot: usize,
    pub warm: usize,
    pub medium: usize,
    pub low: usize,
    pub federal: usize,
    pub enterprise: usize,
    pub growth: usize,
    pub enriched: usize,
    pub pending: usize,
    pub avg_score: f64,
}

/// Tier/product/enrichment counts plus the mean total score.
pub fn pipeline_stats(leads: &[ScoredLead]) -> PipelineStats {
    let mut stats = PipelineStats {
        total: leads.len(),
        hot: 0,
        warm: 0,
        medium: 0,
        low: 0,
        federal: 0,
        enterprise: 0,
        growth: 0,
        enriched: 0,
        pending: 0,
        avg_score: 0.0,
    };

    let mut score_sum = 0u64;
    for lead in leads {
        match lead.score.tier {
            Tier::Hot => stats.hot += 1,
            Tier::Warm => stats.warm += 1,
            Tier::Medium => stats.medium += 1,
            Tier::Low => stats.low += 1,
        }
        match lead.product() {
            Product::Federal => stats.federal += 1,
            Product::Enterprise => stats.enterprise += 1,
            Product::Growth => stats.growth += 1,
        }
        if lead.lead.is_enriched() {
            stats.enriched += 1;
        } else {
            stats.pending += 1;
        }
        score_sum += u64::from(lead.score.total);
    }

    if !leads.is_empty() {
        stats.avg_score = score_sum as f64 / leads.len() as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use prospect_common::types::Priority;
    use uuid::Uuid;

    fn make_lead(company: &str, sector: &str) -> LeadInput {
        LeadInput {
            id: Uuid::new_v4(),
            company: company.to_string(),
            sector: sector.to_string(),
            sub_sector: None,
            use_case: None,
            revenue_b: None,
            employees: None,
            source: None,
            priority: Priority::Medium,
            enriched_at: None,
        }
    }

    fn sample_batch() -> Vec<ScoredLead> {
        let taxonomy = Taxonomy::builtin();
        let mut leads = Vec::new();

        let mut prime = make_lead("Lockheed Martin", "Defense");
        prime.source = Some("Defense Prime".to_string());
        prime.revenue_b = Some(60.0);
        prime.employees = Some(110_000);
        prime.priority = Priority::Critical;
        leads.push(ScoredLead::build(&taxonomy, prime));

        let mut pharma = make_lead("Genentech", "Healthcare");
        pharma.use_case = Some("clinical trial modeling for oncology drugs".to_string());
        pharma.revenue_b = Some(0.05);
        pharma.employees = Some(80);
        leads.push(ScoredLead::build(&taxonomy, pharma));

        let mut saas = make_lead("Nimbus Startup Labs", "Technology");
        saas.use_case = Some("high growth venture analytics".to_string());
        saas.employees = Some(40);
        leads.push(ScoredLead::build(&taxonomy, saas));

        let mut enriched = make_lead("First National", "Financial");
        enriched.enriched_at = Some(Utc::now());
        enriched.revenue_b = Some(2.0);
        leads.push(ScoredLead::build(&taxonomy, enriched));

        let blank = make_lead("Blank Co", "Nothing Known");
        leads.push(ScoredLead::build(&taxonomy, blank));

        leads
    }

    #[test]
    fn rank_orders_by_total_descending() {
        let ranked = rank(sample_batch());
        for pair in ranked.windows(2) {
            assert!(pair[0].score.total >= pair[1].score.total);
        }
    }

    #[test]
    fn rank_is_stable_for_equal_scores() {
        let taxonomy = Taxonomy::builtin();
        // Two leads with identical inputs apart from the company name score
        // identically; the first submitted must stay first.
        let mut first = make_lead("Alpha Metals", "Nothing Known");
        first.employees = Some(40);
        let mut second = make_lead("Beta Metals", "Nothing Known");
        second.employees = Some(40);

        let batch = vec![
            ScoredLead::build(&taxonomy, first),
            ScoredLead::build(&taxonomy, second),
        ];
        assert_eq!(batch[0].score.total, batch[1].score.total);

        let ranked = rank(batch);
        assert_eq!(ranked[0].lead.company, "Alpha Metals");
        assert_eq!(ranked[1].lead.company, "Beta Metals");
    }

    #[test]
    fn rank_twice_yields_identical_order() {
        let once = rank(sample_batch());
        let twice = rank(once.clone());
        let ids_once: Vec<Uuid> = once.iter().map(|l| l.lead.id).collect();
        let ids_twice: Vec<Uuid> = twice.iter().map(|l| l.lead.id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn product_groups_partition_exactly() {
        let batch = sample_batch();
        let groups = group_by_product(&batch);
        assert_eq!(groups.len(), batch.len());

        let mut seen: Vec<Uuid> = Vec::new();
        for bucket in [&groups.federal, &groups.enterprise, &groups.growth] {
            for lead in bucket.iter() {
                assert!(!seen.contains(&lead.lead.id), "lead appears twice");
                seen.push(lead.lead.id);
            }
        }
        assert_eq!(seen.len(), batch.len());
    }

    #[test]
    fn product_group_buckets_are_sorted() {
        let groups = group_by_product(&sample_batch());
        for bucket in [&groups.federal, &groups.enterprise, &groups.growth] {
            for pair in bucket.windows(2) {
                assert!(pair[0].score.total >= pair[1].score.total);
            }
        }
    }

    #[test]
    fn tier_groups_partition_exactly() {
        let batch = sample_batch();
        let groups = group_by_tier(&batch);
        assert_eq!(groups.len(), batch.len());
        for lead in &groups.hot {
            assert_eq!(lead.score.tier, Tier::Hot);
        }
        for lead in &groups.low {
            assert_eq!(lead.score.tier, Tier::Low);
        }
    }

    #[test]
    fn action_items_sort_high_to_low() {
        let items = action_items(&sample_batch());
        for pair in items.windows(2) {
            assert!(pair[0].urgency.rank() <= pair[1].urgency.rank());
        }
        // Every lead lands in exactly one action group.
        let grouped: usize = items.iter().map(|g| g.leads.len()).sum();
        assert_eq!(grouped, sample_batch().len());
    }

    #[test]
    fn unknown_action_defaults_to_low() {
        assert_eq!(urgency_for_action("Call the CEO"), ActionUrgency::Low);
        assert_eq!(urgency_for_action("Enrich now"), ActionUrgency::High);
    }

    #[test]
    fn top_by_product_picks_bucket_leaders() {
        let batch = sample_batch();
        let top = top_by_product(&batch);
        let groups = group_by_product(&batch);

        if let Some(leader) = &top.federal {
            for lead in &groups.federal {
                assert!(leader.score.total >= lead.score.total);
            }
        }
        assert_eq!(top.federal.is_some(), !groups.federal.is_empty());
        assert_eq!(top.enterprise.is_some(), !groups.enterprise.is_empty());
        assert_eq!(top.growth.is_some(), !groups.growth.is_empty());
    }

    #[test]
    fn pipeline_stats_counts_add_up() {
        let batch = sample_batch();
        let stats = pipeline_stats(&batch);
        assert_eq!(stats.total, batch.len());
        assert_eq!(stats.hot + stats.warm + stats.medium + stats.low, stats.total);
        assert_eq!(
            stats.federal + stats.enterprise + stats.growth,
            stats.total
        );
        assert_eq!(stats.enriched + stats.pending, stats.total);
        assert_eq!(stats.enriched, 1);

        let expected_avg = batch.iter().map(|l| l.score.total as f64).sum::<f64>()
            / batch.len() as f64;
        assert!((stats.avg_score - expected_avg).abs() < f64::EPSILON);
    }

    #[test]
    fn pipeline_stats_empty_input() {
        let stats = pipeline_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_score, 0.0);
        assert_eq!(stats.enriched, 0);
    }
}
