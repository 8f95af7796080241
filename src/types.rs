use crate::lanes::LaneLine;
use serde::Serialize;

/// Lane lines found in one frame. Either side may be missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneDetection {
    pub left: Option<LaneLine>,
    pub right: Option<LaneLine>,
    pub latency_ms: f64,
}

impl LaneDetection {
    pub fn found(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
