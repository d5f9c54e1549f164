pub mod errors;
pub mod repository;
pub mod todo;

pub use errors::*;
pub use repository::*;
pub use todo::*;
