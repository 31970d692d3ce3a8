//! Import and delete flows over the provider seam

pub mod delete;
pub mod import;

pub use delete::delete_key_pair;
pub use import::import_key_pair;
