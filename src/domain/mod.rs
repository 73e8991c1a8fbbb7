//! Domain entities and the value objects they are built from.

pub mod teacher;
pub mod types;
