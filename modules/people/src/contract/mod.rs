pub mod model;

pub use model::{Person, PersonInput, PersonPage};
