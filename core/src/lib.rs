pub mod emit;
pub mod solver;
pub mod towers;
