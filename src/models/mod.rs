// The model store: the two pre-trained classifiers and the seam they sit behind.
// Loaded once at start-up and read-only afterwards.

pub mod artifact;
pub mod classifier;
pub mod model_store;

// Re-export key types for convenience
pub use artifact::{Estimator, ModelArtifact};
pub use classifier::Classifier;
pub use model_store::ModelStore;
