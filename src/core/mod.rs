pub mod benchmark;
pub mod light;
pub mod pass;
pub mod selector;
