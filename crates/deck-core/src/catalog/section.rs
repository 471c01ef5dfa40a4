use serde::{Deserialize, Serialize};

/// One unit of narrative content plus its associated visual identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique, stable identifier
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Ordered highlight rows shown under the description
    pub highlights: Vec<String>,
    /// Which stage visual this section pairs with
    pub visual: SceneKind,
    /// Where the copy panel sits relative to the stage
    pub layout: LayoutHint,
}

/// Visual identifier for a section's background scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    ProblemWaste,
    SolarInstall,
    SolarIntel,
    OrbitCore,
    EnergyMatrix,
    Prediction,
    SystemLogs,
    StudentMonitor,
    CctvScan,
    AiThink,
    HygieneAi,
    AlertPulse,
    Resolution,
    Unified,
}

/// Layout hint for the copy panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutHint {
    Center,
    Left,
    Right,
    BottomLeft,
    BottomRight,
    BottomCenter,
}

impl LayoutHint {
    /// Whether the stage should use the full viewport width
    pub fn is_centered(&self) -> bool {
        matches!(self, LayoutHint::Center | LayoutHint::BottomCenter)
    }
}
