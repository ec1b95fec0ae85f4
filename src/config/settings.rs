//! Database location.

use std::path::PathBuf;


/// Default path of the readings database.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sugarlog")
        .join("readings.db")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_ends_with_db_file() {
        let path = default_db_path();
        assert!(path.ends_with("sugarlog/readings.db"));
    }
}
