use serde::Serialize;

use prospect_scoring::{SectorConfig, SubSector};

#[derive(Debug, Serialize)]
pub struct ListSectorsResponse {
    pub data: &'static [SectorConfig],
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ListSubSectorsResponse {
    pub sector: &'static str,
    pub data: &'static [SubSector],
    pub count: usize,
}
