pub mod directory;

pub use directory::{shared, ActivityDirectory, SharedDirectory};
