//! Composite lead scoring on top of product-fit classification.
//!
//! Four independently capped sub-scores (fit 0-40, size 0-25, urgency 0-20,
//! accessibility 0-15) sum to a 0-100 total, which drives tier, recalculated
//! priority, and the recommended next action.

use serde::{Deserialize, Serialize};

use prospect_common::types::{LeadInput, Priority};

use crate::classifier::{classify, match_source_category, ProductFitResult};
use crate::taxonomy::Taxonomy;

/// Triage bucket derived from the total score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hot,
    Warm,
    Medium,
    Low,
}

impl Tier {
    /// Boundaries are inclusive on the lower bound of each band.
    pub fn for_total(total: u32) -> Self {
        if total >= 65 {
            Self::Hot
        } else if total >= 45 {
            Self::Warm
        } else if total >= 25 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadScoreResult {
    pub fit: u32,
    pub size: u32,
    pub urgency: u32,
    pub accessibility: u32,
    pub total: u32,
    pub tier: Tier,
    /// Recomputed from the total; independent of the stated input priority.
    pub priority: Priority,
    pub next_action: String,
    /// Up to six reasons from the fit, size, and urgency computations.
    pub reasons: Vec<String>,
    pub product_fit: ProductFitResult,
}

/// Revenue bands in billions, largest threshold first; the final entry is
/// the catch-all for any positive revenue.
const REVENUE_BANDS: &[(f64, u32, &str)] = &[
    (10.0, 25, "enterprise"),
    (1.0, 20, "large"),
    (0.1, 15, "mid-market"),
    (0.01, 10, "growth"),
    (0.0, 5, "startup"),
];

/// Employee-count bands, same shape as the revenue table.
const EMPLOYEE_BANDS: &[(u32, u32, &str)] = &[
    (10_000, 25, "enterprise"),
    (1_000, 20, "large"),
    (200, 15, "mid-market"),
    (50, 10, "growth"),
    (1, 5, "startup"),
];

fn revenue_band(revenue_b: f64) -> Option<(u32, &'static str)> {
    if revenue_b <= 0.0 {
        return None;
    }
    REVENUE_BANDS
        .iter()
        .find(|(min, _, _)| revenue_b >= *min)
        .map(|(_, points, name)| (*points, *name))
}

fn employee_band(employees: u32) -> Option<(u32, &'static str)> {
    if employees == 0 {
        return None;
    }
    EMPLOYEE_BANDS
        .iter()
        .find(|(min, _, _)| employees >= *min)
        .map(|(_, points, name)| (*points, *name))
}

fn priority_points(priority: Priority) -> u32 {
    match priority {
        Priority::Critical => 15,
        Priority::High => 10,
        Priority::Medium => 5,
        Priority::Low => 0,
    }
}

/// Recalculated priority as a step function of the total score.
pub fn recalculated_priority(total: u32) -> Priority {
    if total >= 75 {
        Priority::Critical
    } else if total >= 55 {
        Priority::High
    } else if total >= 35 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn next_action(tier: Tier, enriched: bool) -> &'static str {
    match (tier, enriched) {
        (Tier::Hot, false) => "Enrich now",
        (Tier::Hot, true) => "Ready for outreach",
        (Tier::Warm, false) => "Queue for enrichment",
        (Tier::Warm, true) => "Nurture",
        (Tier::Medium, _) => "Research needed",
        _ => "Review",
    }
}

/// Score a lead. Total over any well-formed lead; missing optional fields
/// contribute zero rather than erroring.
pub fn score(taxonomy: &Taxonomy, lead: &LeadInput) -> LeadScoreResult {
    let product_fit = classify(taxonomy, lead);
    let mut reasons: Vec<String> = Vec::new();

    // fit: 40% of the 0-100 product-fit score.
    let fit = (product_fit.score as f64 * 0.4).floor() as u32;
    reasons.push(format!(
        "Product fit: {} ({})",
        product_fit.primary.as_str(),
        product_fit.score
    ));

    // size: best of the revenue and headcount bands.
    let rev = lead.revenue_b.and_then(revenue_band);
    let emp = lead.employees.and_then(employee_band);
    if let Some((_, band)) = rev {
        reasons.push(format!("Revenue band: {band}"));
    }
    if let Some((_, band)) = emp {
        reasons.push(format!("Headcount band: {band}"));
    }
    let size = rev
        .map(|(points, _)| points)
        .unwrap_or(0)
        .max(emp.map(|(points, _)| points).unwrap_or(0));

    // urgency: stated priority plus a capped source contribution.
    let stated = priority_points(lead.priority);
    if stated > 0 {
        reasons.push(format!("Stated priority: {}", lead.priority.as_str()));
    }
    let source_pts = match match_source_category(lead.source.as_deref()) {
        Some(category) => {
            reasons.push(format!("Source urgency: {}", category.label));
            (category.weight / 4).min(5)
        }
        None => 0,
    };
    let urgency = (stated + source_pts).min(20);

    // accessibility: base 5, +10 when enriched, +5 for a substantive
    // use-case description, capped at 15.
    let mut accessibility = 5u32;
    if lead.is_enriched() {
        accessibility += 10;
    }
    if lead.use_case.as_deref().map_or(0, str::len) > 20 {
        accessibility += 5;
    }
    let accessibility = accessibility.min(15);

    // Per-component caps already bound the sum to 0-100; no reclamp.
    let total = fit + size + urgency + accessibility;
    let tier = Tier::for_total(total);
    let priority = recalculated_priority(total);
    let action = next_action(tier, lead.is_enriched());

    reasons.truncate(6);

    tracing::debug!(
        company = %lead.company,
        total,
        tier = tier.as_str(),
        action,
        "scored lead"
    );

    LeadScoreResult {
        fit,
        size,
        urgency,
        accessibility,
        total,
        tier,
        priority,
        next_action: action.to_string(),
        reasons,
        product_fit,
    }
}
