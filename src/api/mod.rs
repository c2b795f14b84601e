mod bin_controller;
mod brush_sync;
mod chart;
mod collaborators;
mod config;
mod events;
mod json_contract;

pub use brush_sync::BrushSyncOutcome;
pub use chart::{BinState, BinningChart};
pub use collaborators::{
    AxisDomainProvider, BinParamsProvider, BinningHost, BrushProvider, FilterCollaborator,
    RenderCollaborator,
};
pub use config::BinningConfig;
pub use events::{BIN_EVENT, BinChartContext, BinEvent, EventRegistry, ListenerId};
pub use json_contract::{BINNING_CONFIG_JSON_SCHEMA_V1, BinningConfigJsonContractV1};
