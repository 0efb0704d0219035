use std::fs;
use std::path::Path;
use std::time::Duration;

use pathviz_core::GridSize;
use pathviz_paths::Algorithm;
use pathviz_session::{DEFAULT_DENSITY, Pacing};
use serde::{Deserialize, Serialize};

use crate::args::Args;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rows: i32,
    pub cols: i32,
    pub algorithm: Algorithm,
    pub traverse_ms: u64,
    pub path_ms: u64,
    pub speed: f64,
    pub wall_density: f64,
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: GridSize::COMPACT.rows,
            cols: GridSize::COMPACT.cols,
            algorithm: Algorithm::Bfs,
            traverse_ms: Pacing::DEFAULT_TRAVERSE.as_millis() as u64,
            path_ms: Pacing::DEFAULT_PATH.as_millis() as u64,
            speed: 1.0,
            wall_density: DEFAULT_DENSITY,
            seed: None,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "pathviz".to_string(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write as TOML, in a form [`Config::load`] reads back.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Defaults, then the `--config` file if given, then the other flags.
    pub fn resolve(args: &Args) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(rows) = args.rows {
            self.rows = rows;
        }
        if let Some(cols) = args.cols {
            self.cols = cols;
        }
        if let Some(algorithm) = args.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(delay) = args.delay {
            self.traverse_ms = delay;
        }
        if let Some(speed) = args.speed {
            self.speed = speed;
        }
        if let Some(density) = args.density {
            self.wall_density = density;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn size(&self) -> GridSize {
        GridSize::new(self.rows, self.cols)
    }

    /// Unscaled delays.
    pub fn base_pacing(&self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.traverse_ms),
            Duration::from_millis(self.path_ms),
        )
    }

    /// Delays with the speed multiplier applied.
    pub fn pacing(&self) -> Pacing {
        self.base_pacing().scaled(self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_compact_layout() {
        let config = Config::default();
        assert_eq!(config.size(), GridSize::COMPACT);
        assert_eq!(config.pacing(), Pacing::default());
        assert_eq!(config.wall_density, 0.3);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rows = 21\ncols = 58\nalgorithm = \"bibfs\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.size(), GridSize::WIDE);
        assert_eq!(config.algorithm, Algorithm::Bidirectional);
        assert_eq!(config.traverse_ms, 200);
    }

    #[test]
    fn save_then_load() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            seed: Some(9),
            algorithm: Algorithm::AStar,
            ..Config::default()
        };
        config.save(file.path()).unwrap();
        assert_eq!(Config::load(file.path()).unwrap(), config);
    }

    #[test]
    fn resolved_flags_survive_a_save() {
        let file = NamedTempFile::new().unwrap();
        let args = Args {
            cols: Some(30),
            density: Some(0.1),
            save_config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let config = Config::resolve(&args).unwrap();
        config.save(file.path()).unwrap();
        let back = Config::load(file.path()).unwrap();
        assert_eq!(back.cols, 30);
        assert_eq!(back.wall_density, 0.1);
        assert_eq!(back, config);
    }

    #[test]
    fn flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "rows = 5\ntraverse_ms = 10").unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            rows: Some(7),
            speed: Some(2.0),
            ..Args::default()
        };
        let config = Config::resolve(&args).unwrap();
        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 48);
        assert_eq!(config.pacing().traverse, Duration::from_millis(20));
    }

    #[test]
    fn missing_file_is_an_error() {
        let args = Args {
            config: Some("/nonexistent/pathviz.toml".into()),
            ..Args::default()
        };
        assert!(Config::resolve(&args).is_err());
    }
}
