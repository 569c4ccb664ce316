pub mod config;
pub mod overlap;
pub mod search;
pub mod solver;

pub use config::*;
pub use overlap::*;
pub use search::*;
pub use solver::*;
