use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartSpec};

use super::{Dashboard, DashboardSnapshot};

pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_SPEC_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DashboardSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpecJsonContractV1 {
    pub schema_version: u32,
    pub chart: ChartSpec,
}

impl DashboardSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DashboardSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DashboardSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl ChartSpec {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSpecJsonContractV1 {
            schema_version: CHART_SPEC_JSON_SCHEMA_V1,
            chart: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart spec contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(spec) = serde_json::from_str::<ChartSpec>(input) {
            return Ok(spec);
        }
        let payload: ChartSpecJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart spec json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SPEC_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart spec schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.chart)
    }
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
