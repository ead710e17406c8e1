use serde::{Deserialize, Serialize};

/// The ten question categories a quiz covers exactly once each.
///
/// Declaration order is the canonical order: when the catalog has no
/// entry for a category, synthesized fallback questions are appended
/// in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuestionCategory {
    #[serde(rename = "Concept Application")]
    ConceptApplication,
    #[serde(rename = "Debugging / Error Identification")]
    Debugging,
    #[serde(rename = "Performance Optimization")]
    PerformanceOptimization,
    #[serde(rename = "Real-World Decision Making")]
    DecisionMaking,
    #[serde(rename = "Best Practices Selection")]
    BestPractices,
    #[serde(rename = "Edge Case Handling")]
    EdgeCases,
    #[serde(rename = "Security / Risk Awareness")]
    Security,
    #[serde(rename = "Data Interpretation / Output Prediction")]
    OutputPrediction,
    #[serde(rename = "Tool / Feature Selection")]
    ToolSelection,
    #[serde(rename = "Scenario-Based Trade-off Analysis")]
    TradeOffAnalysis,
}

impl QuestionCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 10] = [
        Self::ConceptApplication,
        Self::Debugging,
        Self::PerformanceOptimization,
        Self::DecisionMaking,
        Self::BestPractices,
        Self::EdgeCases,
        Self::Security,
        Self::OutputPrediction,
        Self::ToolSelection,
        Self::TradeOffAnalysis,
    ];

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ConceptApplication => "Concept Application",
            Self::Debugging => "Debugging / Error Identification",
            Self::PerformanceOptimization => "Performance Optimization",
            Self::DecisionMaking => "Real-World Decision Making",
            Self::BestPractices => "Best Practices Selection",
            Self::EdgeCases => "Edge Case Handling",
            Self::Security => "Security / Risk Awareness",
            Self::OutputPrediction => "Data Interpretation / Output Prediction",
            Self::ToolSelection => "Tool / Feature Selection",
            Self::TradeOffAnalysis => "Scenario-Based Trade-off Analysis",
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
