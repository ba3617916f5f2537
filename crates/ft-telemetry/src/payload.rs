//! The telemetry record emitted once per tick.

use ft_agent::DeviceState;
use ft_core::{DeviceId, DeviceKind, Mode, Position, round_to};
use serde::{Deserialize, Serialize};

/// Decimal places kept on the resource level in a payload.
pub const RESOURCE_DECIMALS: i32 = 1;

/// One JSON object per device per tick.
///
/// Exactly one of `gas` / `battery` is set, depending on the device kind:
///
/// ```json
/// {"deviceId":"car-1","timestamp":1700000000,"status":"driving",
///  "location":[-1.29,36.82,0.0],"gas":99.8}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub device_id: DeviceId,
    pub timestamp: i64,
    pub status:    Mode,
    pub location:  Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas:       Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery:   Option<f64>,
}

impl Payload {
    /// Capture `state` at `now_unix` seconds.
    pub fn snapshot(state: &DeviceState, now_unix: i64) -> Self {
        let level = round_to(state.resource, RESOURCE_DECIMALS);
        let (gas, battery) = match state.kind {
            DeviceKind::Car                      => (Some(level), None),
            DeviceKind::Drone | DeviceKind::Phone => (None, Some(level)),
        };
        Self {
            device_id: state.id.clone(),
            timestamp: now_unix,
            status:    state.mode,
            location:  state.position.rounded(),
            gas,
            battery,
        }
    }

    /// The resource level regardless of which key carries it.
    pub fn resource_level(&self) -> Option<f64> {
        self.gas.or(self.battery)
    }

    /// `"gas"` or `"battery"`, whichever field is set.
    pub fn resource_key(&self) -> &'static str {
        self.status.kind().resource_key()
    }

    /// Partition key for the ingestion stream.
    pub fn partition_key(&self) -> &str {
        self.device_id.as_str()
    }
}
