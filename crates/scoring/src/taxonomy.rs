//! Static sector/sub-sector reference data and lookups.
//!
//! All catalog containers are ordered slices, never maps: sub-sector
//! detection is first-match over declaration order, so iteration order is
//! part of the observable contract.

use serde::{Deserialize, Serialize};

/// The three product lines a lead can be classified toward.
///
/// Declaration order doubles as the deterministic tie-break when two
/// products carry the same tally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    Federal,
    Enterprise,
    Growth,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Federal, Product::Enterprise, Product::Growth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Federal => "federal",
            Self::Enterprise => "enterprise",
            Self::Growth => "growth",
        }
    }

    pub(crate) fn idx(self) -> usize {
        match self {
            Self::Federal => 0,
            Self::Enterprise => 1,
            Self::Growth => 2,
        }
    }
}

/// A sub-sector entry: keyword list scanned in order, plus a signal weight.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubSector {
    pub key: &'static str,
    pub name: &'static str,
    /// Scanned in declaration order; first substring hit wins.
    pub keywords: &'static [&'static str],
    /// Classification strength, 0-100.
    pub weight: u32,
    /// Event-signal tags surfaced to the UI; not consumed by scoring.
    pub signals: &'static [&'static str],
}

/// One sector of the catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectorConfig {
    pub key: &'static str,
    pub name: &'static str,
    /// Associated product lines, strongest first.
    pub products: &'static [Product],
    pub primary: Product,
    pub sub_sectors: &'static [SubSector],
    /// Sector-wide keywords; informational for the import layer.
    pub keywords: &'static [&'static str],
}

/// A sub-sector detection hit, carrying the owning sector and the keyword
/// that matched.
#[derive(Debug, Clone, Copy)]
pub struct SubSectorMatch {
    pub sector: &'static SectorConfig,
    pub sub_sector: &'static SubSector,
    pub keyword: &'static str,
}

static SECTORS: &[SectorConfig] = &[
    SectorConfig {
        key: "defense",
        name: "Defense & Aerospace",
        products: &[Product::Federal, Product::Enterprise],
        primary: Product::Federal,
        sub_sectors: &[
            SubSector {
                key: "primes",
                name: "Defense Primes",
                keywords: &[
                    "lockheed",
                    "raytheon",
                    "northrop",
                    "general dynamics",
                    "bae systems",
                ],
                weight: 100,
                signals: &["contract-award", "program-of-record"],
            },
            SubSector {
                key: "c4isr",
                name: "Intelligence & C4ISR",
                keywords: &["intelligence", "c4isr", "signals collection", "geospatial"],
                weight: 90,
                signals: &["classified-program"],
            },
            SubSector {
                key: "space",
                name: "Space Systems",
                keywords: &["satellite", "orbital", "launch vehicle", "space systems"],
                weight: 80,
                signals: &["launch-contract"],
            },
            SubSector {
                key: "defense-tech",
                name: "Defense Tech",
                keywords: &["counter-uas", "autonomy", "hypersonic", "drone"],
                weight: 75,
                signals: &["sbir-award", "dod-pilot"],
            },
        ],
        keywords: &["defense", "aerospace", "military", "munitions"],
    },
    SectorConfig {
        key: "government",
        name: "Public Sector",
        products: &[Product::Federal],
        primary: Product::Federal,
        sub_sectors: &[
            SubSector {
                key: "federal-civilian",
                name: "Federal Civilian",
                keywords: &["civilian agency", "fedramp", "gsa schedule"],
                weight: 85,
                signals: &["rfp-posted"],
            },
            SubSector {
                key: "state-local",
                name: "State & Local",
                keywords: &["state government", "county", "city of"],
                weight: 60,
                signals: &["budget-cycle"],
            },
        ],
        keywords: &["government", "public sector", "agency", "municipal"],
    },
    SectorConfig {
        key: "financial",
        name: "Financial Services",
        products: &[Product::Enterprise, Product::Growth],
        primary: Product::Enterprise,
        sub_sectors: &[
            SubSector {
                key: "banking",
                name: "Banking",
                keywords: &["retail bank", "commercial bank", "lending", "deposits"],
                weight: 85,
                signals: &["earnings-report"],
            },
            SubSector {
                key: "insurance",
                name: "Insurance",
                keywords: &["insurance", "underwriting", "actuarial", "claims"],
                weight: 80,
                signals: &["rate-filing"],
            },
            SubSector {
                key: "capital-markets",
                name: "Capital Markets",
                keywords: &["hedge fund", "asset management", "brokerage", "trading desk"],
                weight: 75,
                signals: &["aum-milestone"],
            },
            SubSector {
                key: "fintech",
                name: "Fintech",
                keywords: &["payments", "neobank", "fintech"],
                weight: 65,
                signals: &["funding-round"],
            },
        ],
        keywords: &["bank", "financial", "finance", "capital"],
    },
    SectorConfig {
        key: "healthcare",
        name: "Healthcare & Life Sciences",
        products: &[Product::Enterprise, Product::Growth],
        primary: Product::Enterprise,
        sub_sectors: &[
            SubSector {
                key: "pharma",
                name: "Pharma & Biotech",
                keywords: &[
                    "clinical trial",
                    "clinical",
                    "oncology",
                    "biotech",
                    "drug discovery",
                ],
                weight: 90,
                signals: &["fda-approval", "trial-phase"],
            },
            SubSector {
                key: "providers",
                name: "Providers & Payers",
                keywords: &["hospital", "health system", "payer", "ehr"],
                weight: 75,
                signals: &["system-merger"],
            },
            SubSector {
                key: "medtech",
                name: "Medical Devices",
                keywords: &["medical device", "diagnostics", "imaging"],
                weight: 70,
                signals: &["510k-clearance"],
            },
        ],
        keywords: &["health", "medical", "patient", "pharma"],
    },
    SectorConfig {
        key: "technology",
        name: "Software & Technology",
        products: &[Product::Growth, Product::Enterprise],
        primary: Product::Growth,
        sub_sectors: &[
            SubSector {
                key: "ai-ml",
                name: "AI & Machine Learning",
                keywords: &[
                    "machine learning",
                    "artificial intelligence",
                    "foundation model",
                    "llm",
                ],
                weight: 85,
                signals: &["model-launch", "gpu-buildout"],
            },
            SubSector {
                key: "cybersecurity",
                name: "Cybersecurity",
                keywords: &["cybersecurity", "threat detection", "zero trust"],
                weight: 80,
                signals: &["breach-disclosure"],
            },
            SubSector {
                key: "saas",
                name: "SaaS Platforms",
                keywords: &["saas", "subscription software", "b2b platform"],
                weight: 70,
                signals: &["arr-milestone"],
            },
            SubSector {
                key: "devtools",
                name: "Developer Tools",
                keywords: &["developer tools", "devops", "observability", "api platform"],
                weight: 65,
                signals: &["oss-traction"],
            },
        ],
        keywords: &["software", "technology", "cloud", "data"],
    },
    SectorConfig {
        key: "manufacturing",
        name: "Industrial & Manufacturing",
        products: &[Product::Enterprise],
        primary: Product::Enterprise,
        sub_sectors: &[
            SubSector {
                key: "electronics",
                name: "Electronics & Semiconductors",
                keywords: &["semiconductor", "foundry", "chipmaker", "electronics"],
                weight: 80,
                signals: &["capacity-expansion"],
            },
            SubSector {
                key: "automotive",
                name: "Automotive",
                keywords: &["automotive", "electric vehicle", "tier 1 supplier"],
                weight: 75,
                signals: &["plant-opening"],
            },
            SubSector {
                key: "heavy-industry",
                name: "Heavy Industry",
                keywords: &["steel", "mining", "construction equipment"],
                weight: 60,
                signals: &["commodity-cycle"],
            },
        ],
        keywords: &["manufacturing", "industrial", "factory", "supply chain"],
    },
    SectorConfig {
        key: "energy",
        name: "Energy & Utilities",
        products: &[Product::Enterprise, Product::Federal],
        primary: Product::Enterprise,
        sub_sectors: &[
            SubSector {
                key: "oil-gas",
                name: "Oil & Gas",
                keywords: &["oil & gas", "oilfield", "upstream", "refinery", "lng"],
                weight: 75,
                signals: &["rig-count"],
            },
            SubSector {
                key: "renewables",
                name: "Renewables",
                keywords: &["solar", "wind farm", "renewable", "battery storage"],
                weight: 70,
                signals: &["ppa-signed"],
            },
            SubSector {
                key: "utilities",
                name: "Utilities",
                keywords: &["electric utility", "transmission", "distribution grid"],
                weight: 65,
                signals: &["rate-case"],
            },
        ],
        keywords: &["energy", "power", "grid", "utility"],
    },
    SectorConfig {
        key: "retail",
        name: "Retail & Consumer",
        products: &[Product::Enterprise, Product::Growth],
        primary: Product::Enterprise,
        sub_sectors: &[
            SubSector {
                key: "ecommerce",
                name: "E-commerce",
                keywords: &["ecommerce", "e-commerce", "marketplace", "online retail"],
                weight: 70,
                signals: &["gmv-milestone"],
            },
            SubSector {
                key: "cpg",
                name: "Consumer Packaged Goods",
                keywords: &["packaged goods", "beverage", "food brand"],
                weight: 60,
                signals: &["shelf-expansion"],
            },
        ],
        keywords: &["retail", "consumer", "brand", "commerce"],
    },
];

/// The immutable sector catalog. Construct once (cheap, it only borrows
/// static tables) and pass by reference into the classifier and scorer.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    sectors: &'static [SectorConfig],
}

impl Taxonomy {
    pub fn builtin() -> Self {
        Self { sectors: SECTORS }
    }

    pub fn sectors(&self) -> &'static [SectorConfig] {
        self.sectors
    }

    /// Case-insensitive exact match against a sector key, its display name,
    /// or any of its sub-sector keys. Unknown names yield None, never an
    /// error.
    pub fn find_sector(&self, name: &str) -> Option<&'static SectorConfig> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.sectors.iter().find(|s| {
            s.key == needle
                || s.name.to_lowercase() == needle
                || s.sub_sectors.iter().any(|sub| sub.key == needle)
        })
    }

    pub fn sub_sectors_of(&self, sector_key: &str) -> Option<&'static [SubSector]> {
        self.find_sector(sector_key).map(|s| s.sub_sectors)
    }

    /// First-match sub-sector detection over free text.
    ///
    /// Sectors, their sub-sectors, and each keyword list are scanned in
    /// declaration order; the first keyword appearing as a substring of the
    /// lowercased text wins. An earlier low-weight match beats a later
    /// high-weight one.
    pub fn detect_sub_sector(&self, text: &str) -> Option<SubSectorMatch> {
        let haystack = text.to_lowercase();
        if haystack.is_empty() {
            return None;
        }
        for sector in self.sectors {
            for sub in sector.sub_sectors {
                for keyword in sub.keywords.iter().copied() {
                    if haystack.contains(keyword) {
                        return Some(SubSectorMatch {
                            sector,
                            sub_sector: sub,
                            keyword,
                        });
                    }
                }
            }
        }
        None
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_weights_within_range() {
        for sector in Taxonomy::builtin().sectors() {
            for sub in sector.sub_sectors {
                assert!(
                    sub.weight <= 100,
                    "{}/{} weight {} out of range",
                    sector.key,
                    sub.key,
                    sub.weight
                );
            }
        }
    }

    #[test]
    fn sector_keys_are_unique_and_lowercase() {
        let taxonomy = Taxonomy::builtin();
        let keys: Vec<&str> = taxonomy.sectors().iter().map(|s| s.key).collect();
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(*key, key.to_lowercase());
            assert!(
                !keys[i + 1..].contains(key),
                "duplicate sector key: {key}"
            );
        }
    }

    #[test]
    fn sub_sector_keys_unique_within_catalog() {
        let mut seen = Vec::new();
        for sector in Taxonomy::builtin().sectors() {
            for sub in sector.sub_sectors {
                assert!(!seen.contains(&sub.key), "duplicate sub-sector key: {}", sub.key);
                seen.push(sub.key);
            }
        }
    }

    #[test]
    fn every_sub_sector_has_keywords() {
        for sector in Taxonomy::builtin().sectors() {
            for sub in sector.sub_sectors {
                assert!(
                    !sub.keywords.is_empty(),
                    "{}/{} has no keywords",
                    sector.key,
                    sub.key
                );
            }
        }
    }

    #[test]
    fn primary_product_is_listed_in_products() {
        for sector in Taxonomy::builtin().sectors() {
            assert!(
                sector.products.contains(&sector.primary),
                "{} primary not in its product list",
                sector.key
            );
        }
    }

    #[test]
    fn find_sector_matches_key_case_insensitively() {
        let taxonomy = Taxonomy::builtin();
        let sector = taxonomy.find_sector("Defense").expect("sector");
        assert_eq!(sector.key, "defense");
        assert_eq!(sector.primary, Product::Federal);
    }

    #[test]
    fn find_sector_matches_display_name() {
        let taxonomy = Taxonomy::builtin();
        let sector = taxonomy.find_sector("Healthcare & Life Sciences").expect("sector");
        assert_eq!(sector.key, "healthcare");
        assert_eq!(sector.primary, Product::Enterprise);
    }

    #[test]
    fn find_sector_matches_sub_sector_key() {
        let taxonomy = Taxonomy::builtin();
        let sector = taxonomy.find_sector("fintech").expect("sector");
        assert_eq!(sector.key, "financial");
    }

    #[test]
    fn find_sector_unknown_returns_none() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.find_sector("basket weaving").is_none());
        assert!(taxonomy.find_sector("").is_none());
        assert!(taxonomy.find_sector("   ").is_none());
    }

    #[test]
    fn detect_sub_sector_first_match_wins_across_sectors() {
        let taxonomy = Taxonomy::builtin();
        // "satellite" (defense/space, declared earlier) must win over
        // "machine learning" (technology/ai-ml, higher in its own sector but
        // declared later in the catalog).
        let hit = taxonomy
            .detect_sub_sector("machine learning for satellite imagery")
            .expect("match");
        assert_eq!(hit.sector.key, "defense");
        assert_eq!(hit.sub_sector.key, "space");
        assert_eq!(hit.keyword, "satellite");
    }

    #[test]
    fn detect_sub_sector_is_case_insensitive() {
        let taxonomy = Taxonomy::builtin();
        let hit = taxonomy
            .detect_sub_sector("Lockheed Martin Defense")
            .expect("match");
        assert_eq!(hit.sub_sector.key, "primes");
        assert_eq!(hit.sub_sector.weight, 100);
    }

    #[test]
    fn detect_sub_sector_no_match_returns_none() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.detect_sub_sector("totally unrelated text").is_none());
        assert!(taxonomy.detect_sub_sector("").is_none());
    }

    #[test]
    fn sub_sectors_of_returns_declared_order() {
        let taxonomy = Taxonomy::builtin();
        let subs = taxonomy.sub_sectors_of("defense").expect("subs");
        let keys: Vec<&str> = subs.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["primes", "c4isr", "space", "defense-tech"]);
    }
}
