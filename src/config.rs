use crate::team::{Team, TeamId};
use log::LevelFilter;
use std::{
	env::var_os,
	path::{Path, PathBuf},
};

pub const LOG_DIR_VAR: &str = "DOTA_BOT_LOG_DIR";
pub const LOG_LEVEL_VAR: &str = "DOTA_BOT_LOG_LEVEL";

/// Plugin settings, read once per `Init` from the environment of the game process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub log_dir: PathBuf,
	pub log_level: LevelFilter,
}
impl Config {
	pub fn from_env() -> Self {
		let mut config = Self::default();
		if let Some(dir) = var_os(LOG_DIR_VAR) {
			config.log_dir = PathBuf::from(dir);
		}
		if let Some(level) = var_os(LOG_LEVEL_VAR) {
			config.log_level = parse_level(level.to_str().unwrap_or_default()).unwrap_or(config.log_level);
		}
		config
	}
	pub fn log_path(&self, team_id: TeamId) -> PathBuf {
		log_path(&self.log_dir, team_id)
	}
}
impl Default for Config {
	fn default() -> Self {
		Self {
			log_dir: PathBuf::from("."),
			log_level: LevelFilter::Info,
		}
	}
}

fn parse_level(level: &str) -> Option<LevelFilter> {
	level.trim().parse().ok()
}

fn log_path(dir: &Path, team_id: TeamId) -> PathBuf {
	match Team::from_id(team_id) {
		Some(team @ (Team::Radiant | Team::Dire)) => dir.join(format!("bot_{}.log", team)),
		_ => dir.join(format!("bot_team{}.log", team_id)),
	}
}
