//! Configuration and path constants.

mod settings;

pub use settings::default_db_path;
