//! Model artifact locations

/// Where the two classifiers are loaded from when no CLI override is given.
pub struct ModelPaths {
    pub risk_model_path: &'static str,
    pub reward_model_path: &'static str,
}

pub const MODELS: ModelPaths = ModelPaths {
    risk_model_path: "models/risk_model.json",
    reward_model_path: "models/reward_model.json",
};

/// File extension that selects the JSON artifact encoding.
/// Any other extension is decoded with bincode.
pub const JSON_ARTIFACT_EXTENSION: &str = "json";
