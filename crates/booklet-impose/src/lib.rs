pub mod imposition;

mod batch;
mod chunk;
mod constants;
mod options;
mod stats;
mod types;

pub use batch::{get_batch_configs, get_batch_configs_with_target};
pub use chunk::chunk_imposition_map;
pub use constants::*;
pub use imposition::{ImpositionMap, generate_imposition_map};
pub use options::*;
pub use stats::{calculate_statistics, recommend_signature_size};
pub use types::*;
