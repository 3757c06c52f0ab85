//! Power signal models for curve synthesis.

/// Optimizer-off curve models.
pub mod baseline;
/// Optimizer-on curve model.
pub mod optimized;
pub mod types;

// Re-export the main types for convenience
pub use baseline::BaselineModel;
pub use optimized::OptimizedPower;
pub use types::NoiseSeed;
pub use types::PowerModel;
