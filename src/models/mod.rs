pub mod analysis;
pub mod resume;

pub use analysis::*;
pub use resume::*;
