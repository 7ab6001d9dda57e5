pub mod assessment;
pub mod candidate;
pub mod report;
pub mod state;
pub mod step;

pub use assessment::*;
pub use candidate::*;
pub use report::*;
pub use state::*;
pub use step::*;
