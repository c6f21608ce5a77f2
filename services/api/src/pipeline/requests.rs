use serde::Deserialize;

use prospect_common::types::LeadInput;

#[derive(Debug, Deserialize)]
pub struct PipelineRequest {
    pub leads: Vec<LeadInput>,
}
