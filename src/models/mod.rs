pub mod system;
pub mod wish;

pub use system::*;
pub use wish::*;
