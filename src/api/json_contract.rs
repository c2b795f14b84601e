use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::BinningConfig;

pub const BINNING_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinningConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: BinningConfig,
}

impl BinningConfig {
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize binning config json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(self) -> ChartResult<String> {
        let payload = BinningConfigJsonContractV1 {
            schema_version: BINNING_CONFIG_JSON_SCHEMA_V1,
            config: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize binning config contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare config object or a versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse binning config json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("invalid binning config: {e}"))
            });
        }

        let payload: BinningConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse binning config payload: {e}"))
        })?;
        if payload.schema_version != BINNING_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported binning config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
