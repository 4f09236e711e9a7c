pub mod coordinator;

pub use coordinator::{SynthesisCoordinator, asset_filename};
