pub mod catalog;

pub use catalog::{Fetched, MovieCatalog};
