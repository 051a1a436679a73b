pub mod container;
pub mod error;
pub mod model;
pub mod writer;
