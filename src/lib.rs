pub mod config;
pub mod cost_matrix;
pub mod distance;
pub mod error;
pub mod nearest_neighbor;
pub mod position;
pub mod scenario;

pub use config::AssociationConfig;
pub use cost_matrix::{build_cost_matrix, CostMatrix, Padding, DEFAULT_MAX_COST};
pub use distance::distance_table;
pub use error::{AssocError, Result};
pub use nearest_neighbor::{associate, Association};
pub use position::Position;
pub use scenario::{Scenario, ScenarioConfig};
