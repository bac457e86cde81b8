// Domain layer - lattice, rules and the sparse step
pub mod domain;

// Application layer - simulation state, camera and gesture handling
pub mod application;
pub mod config;

// Infrastructure layer - rendering and input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, SparseGrid, Pattern, presets, step};
pub use application::{GameState, Camera, Intent, Session, FrameSnapshot};
pub use config::{Config, ConfigError};
