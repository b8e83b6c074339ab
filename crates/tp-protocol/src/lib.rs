pub mod engagement;
pub mod resources;
pub mod tools;

pub use engagement::*;
pub use resources::*;
pub use tools::*;
