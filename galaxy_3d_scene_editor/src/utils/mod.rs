//! Small shared utilities

mod id_generator;

pub use id_generator::IdGenerator;
