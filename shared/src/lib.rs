pub mod board;
pub mod leader;
pub mod project;

pub use board::*;
pub use leader::*;
pub use project::*;
