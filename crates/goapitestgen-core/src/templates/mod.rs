pub mod dir;
pub mod helpers;
pub mod manager;

pub use dir::*;
pub use helpers::*;
pub use manager::*;
