// src/config.rs

use std::path::PathBuf;

/// Where the stock file lives when nothing else is configured.
pub const DEFAULT_CSV_PATH: &str = "./data/raw/stocks/BEP.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File scanned by [`crate::run`].
    pub csv_path: PathBuf,
}

impl Config {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bep() {
        assert_eq!(
            Config::default().csv_path,
            PathBuf::from("./data/raw/stocks/BEP.csv")
        );
    }

    #[test]
    fn new_accepts_any_path() {
        let cfg = Config::new("/tmp/other.csv");
        assert_eq!(cfg.csv_path, PathBuf::from("/tmp/other.csv"));
        assert_ne!(cfg, Config::default());
    }
}
