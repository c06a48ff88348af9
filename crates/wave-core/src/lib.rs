pub mod constants;
pub mod engine;
pub mod field;
pub mod params;
pub mod sampler;
pub mod sink;
pub mod system;

pub use engine::*;
pub use field::*;
pub use params::*;
pub use sink::*;
pub use system::*;
