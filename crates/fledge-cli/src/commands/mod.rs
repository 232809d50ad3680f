pub mod clean;
pub mod clone;
pub mod completion;
pub mod launch;
