//! Product-fit classification: additive per-product tallies over sector,
//! sub-sector, keyword, source, and size signals.

use serde::{Deserialize, Serialize};

use prospect_common::types::LeadInput;

use crate::taxonomy::{Product, Taxonomy};

/// Self-reported certainty in the primary-product pick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductFitResult {
    pub primary: Product,
    /// Runner-up product, present only when its raw tally exceeds 20.
    pub secondary: Option<Product>,
    /// Primary tally clamped to 0-100.
    pub score: u32,
    pub confidence: Confidence,
    /// Up to five reasons, in the order contributions landed.
    pub reasons: Vec<String>,
    pub sub_sector: Option<String>,
    pub use_case_match: Option<String>,
}

/// Per-product keyword lists; every hit contributes 10 to that product.
const PRODUCT_KEYWORDS: &[(Product, &[&str])] = &[
    (
        Product::Federal,
        &[
            "defense",
            "military",
            "government",
            "federal",
            "classified",
            "clearance",
            "itar",
            "national security",
        ],
    ),
    (
        Product::Enterprise,
        &[
            "enterprise",
            "fortune 500",
            "global operations",
            "compliance",
            "risk management",
            "digital transformation",
        ],
    ),
    (
        Product::Growth,
        &[
            "startup",
            "series a",
            "series b",
            "venture",
            "saas",
            "scale-up",
            "high growth",
        ],
    ),
];

pub(crate) struct SourceCategory {
    pub keywords: &'static [&'static str],
    pub product: Product,
    pub weight: u32,
    pub label: &'static str,
}

/// Ordered source-category table; only the first matching group applies.
/// The scorer reuses the same table for its urgency contribution.
pub(crate) const SOURCE_CATEGORIES: &[SourceCategory] = &[
    SourceCategory {
        keywords: &["defense", "federal", "intelligence"],
        product: Product::Federal,
        weight: 15,
        label: "defense & federal ecosystem",
    },
    SourceCategory {
        keywords: &["fortune", "sp500", "financial"],
        product: Product::Enterprise,
        weight: 10,
        label: "large-cap list",
    },
    SourceCategory {
        keywords: &["venture", "unicorn", "yc"],
        product: Product::Growth,
        weight: 10,
        label: "venture ecosystem",
    },
];

pub(crate) fn match_source_category(source: Option<&str>) -> Option<&'static SourceCategory> {
    let src = source?.to_lowercase();
    SOURCE_CATEGORIES
        .iter()
        .find(|cat| cat.keywords.iter().any(|k| src.contains(k)))
}

/// Per-product use-case decision trees; the first branch whose key appears
/// in the combined text supplies the label.
const USE_CASE_TREES: &[(Product, &[(&str, &str)])] = &[
    (
        Product::Federal,
        &[
            ("classified", "Classified mission support"),
            ("intelligence", "Intelligence analysis"),
            ("logistics", "Defense logistics"),
            ("simulation", "Mission simulation & training"),
        ],
    ),
    (
        Product::Enterprise,
        &[
            ("clinical", "Clinical research & trials"),
            ("fraud", "Fraud & risk analytics"),
            ("compliance", "Regulatory compliance"),
            ("forecast", "Enterprise forecasting"),
        ],
    ),
    (
        Product::Growth,
        &[
            ("api", "Embedded API integration"),
            ("analytics", "Product analytics"),
            ("automation", "Workflow automation"),
        ],
    ),
];

fn use_case_label(primary: Product, combined: &str) -> Option<String> {
    USE_CASE_TREES
        .iter()
        .find(|(product, _)| *product == primary)
        .and_then(|(_, branches)| {
            branches
                .iter()
                .find(|(key, _)| combined.contains(key))
                .map(|(_, label)| (*label).to_string())
        })
}

/// Classify a lead against the taxonomy.
///
/// Total and deterministic: any well-formed lead yields a result, unknown
/// sectors simply fall back to keyword-only scoring. The raw primary tally
/// (which may exceed 100) drives the secondary-product threshold; only the
/// returned score is clamped.
pub fn classify(taxonomy: &Taxonomy, lead: &LeadInput) -> ProductFitResult {
    let mut tally = [0u32; 3];
    let mut reasons: Vec<String> = Vec::new();

    let use_case = lead.use_case.as_deref().unwrap_or("");
    let detection_text = format!("{} {} {}", lead.company, lead.sector, use_case).to_lowercase();
    let combined = match lead.source.as_deref() {
        Some(source) => format!("{detection_text} {}", source.to_lowercase()),
        None => detection_text.clone(),
    };

    // Sector match: 40 to the primary, 20 to each other associated product.
    if let Some(sector) = taxonomy.find_sector(&lead.sector) {
        tally[sector.primary.idx()] += 40;
        for product in sector.products {
            if *product != sector.primary {
                tally[product.idx()] += 20;
            }
        }
        reasons.push(format!("Sector match: {}", sector.name));
    }

    // Sub-sector detection feeds the owning sector's primary product.
    let sub_hit = taxonomy.detect_sub_sector(&detection_text);
    if let Some(hit) = sub_hit {
        let bump = (hit.sub_sector.weight as f64 * 0.3).floor() as u32;
        tally[hit.sector.primary.idx()] += bump;
        reasons.push(format!("Sub-sector: {}", hit.sub_sector.name));
    }

    // Keyword hits are independent and cumulative, 10 apiece.
    for (product, keywords) in PRODUCT_KEYWORDS {
        for keyword in *keywords {
            if combined.contains(keyword) {
                tally[product.idx()] += 10;
                reasons.push(format!("Keyword: {keyword}"));
            }
        }
    }

    // Source category: first matching group in table order only.
    if let Some(category) = match_source_category(lead.source.as_deref()) {
        tally[category.product.idx()] += category.weight;
        reasons.push(format!("Source: {}", category.label));
    }

    // Size adjustment: three mutually exclusive bands, largest first.
    let revenue = lead.revenue_b.unwrap_or(0.0);
    let employees = lead.employees.unwrap_or(0);
    if revenue >= 10.0 || employees >= 10_000 {
        tally[Product::Enterprise.idx()] += 15;
        tally[Product::Federal.idx()] += 5;
        reasons.push("Size: enterprise scale".to_string());
    } else if revenue >= 1.0 || employees >= 1_000 {
        tally[Product::Enterprise.idx()] += 10;
        reasons.push("Size: mid-market scale".to_string());
    } else if revenue > 0.0 || employees > 0 {
        tally[Product::Growth.idx()] += 10;
        reasons.push("Size: growth stage".to_string());
    }

    // Primary is the highest raw tally; ties fall to declaration order.
    let mut primary = Product::Federal;
    for product in Product::ALL {
        if tally[product.idx()] > tally[primary.idx()] {
            primary = product;
        }
    }
    let mut runner_up: Option<Product> = None;
    for product in Product::ALL {
        if product == primary {
            continue;
        }
        match runner_up {
            Some(current) if tally[product.idx()] <= tally[current.idx()] => {}
            _ => runner_up = Some(product),
        }
    }
    let raw_primary = tally[primary.idx()];
    let secondary = runner_up.filter(|p| tally[p.idx()] > 20);

    let score = raw_primary.min(100);

    // Confidence counts reasons as recorded, before the five-reason cap.
    let recorded = reasons.len();
    let confidence = if score >= 60 && recorded >= 3 {
        Confidence::High
    } else if score >= 40 && recorded >= 2 {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    let use_case_match = use_case_label(primary, &combined);

    reasons.truncate(5);

    tracing::debug!(
        company = %lead.company,
        primary = primary.as_str(),
        score,
        confidence = confidence.as_str(),
        "classified lead"
    );

    ProductFitResult {
        primary,
        secondary,
        score,
        confidence,
        reasons,
        sub_sector: sub_hit.map(|hit| hit.sub_sector.name.to_string()),
        use_case_match,
    }
}
