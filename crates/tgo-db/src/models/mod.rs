//! Database models - row types for the metadata tables

mod object;

pub use object::{MetaModel, ObjectModel};
