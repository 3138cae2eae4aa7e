//! Process-wide log sink.
//!
//! A [`WriteLogger`] is registered with the `log` facade on the first `Init`.
//! It writes into a [`TeamSink`] holding one file per team that called `Init`;
//! callbacks [`select`] their team before logging so records land in that
//! team's file. `Shutdown` closes every file. When another logger already owns
//! the facade (the host or a test harness) records go there and no file is
//! opened.

use crate::{config::Config, error::BotResult, team::TeamId};
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::{
	collections::HashMap,
	fs::{self, File, OpenOptions},
	io::{self, LineWriter, Write},
	path::Path,
	sync::Arc,
};

static SINK: Lazy<TeamSink> = Lazy::new(TeamSink::default);
static OWNS_LOGGER: OnceCell<bool> = OnceCell::new();

#[derive(Debug, Default)]
struct Files {
	/// Team whose file receives the next writes; `None` writes to all open files.
	current: Option<TeamId>,
	open: HashMap<TeamId, LineWriter<File>>,
}

/// Per-team log files shared between the registered logger and the callbacks.
#[derive(Debug, Default, Clone)]
pub struct TeamSink {
	files: Arc<Mutex<Files>>,
}
impl TeamSink {
	/// Opens `path` for appending as the file of `team_id` and selects it.
	pub fn open(&self, team_id: TeamId, path: &Path) -> BotResult<()> {
		if let Some(dir) = path.parent() {
			fs::create_dir_all(dir)?;
		}
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		let mut files = self.files.lock();
		if let Some(mut old) = files.open.insert(team_id, LineWriter::new(file)) {
			old.flush()?;
		}
		files.current = Some(team_id);
		Ok(())
	}
	pub fn select(&self, team_id: Option<TeamId>) {
		self.files.lock().current = team_id;
	}
	/// Flushes and closes every team's file.
	pub fn close(&self) -> BotResult<()> {
		let mut files = self.files.lock();
		files.current = None;
		for (_, mut file) in files.open.drain() {
			file.flush()?;
		}
		Ok(())
	}
	pub fn is_open(&self, team_id: TeamId) -> bool {
		self.files.lock().open.contains_key(&team_id)
	}
}
/// Writes go to the selected team's file, to all files when none is selected,
/// and nowhere while no file is open.
impl Write for TeamSink {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut files = self.files.lock();
		let current = files.current;
		match current {
			Some(team_id) => {
				if let Some(file) = files.open.get_mut(&team_id) {
					file.write_all(buf)?;
				}
			}
			None => {
				for file in files.open.values_mut() {
					file.write_all(buf)?;
				}
			}
		}
		Ok(buf.len())
	}
	fn flush(&mut self) -> io::Result<()> {
		for file in self.files.lock().open.values_mut() {
			file.flush()?;
		}
		Ok(())
	}
}

fn logger_config() -> simplelog::Config {
	ConfigBuilder::new()
		.set_thread_level(LevelFilter::Off)
		.set_target_level(LevelFilter::Off)
		.set_time_format_rfc3339()
		.build()
}

/// Sets up logging for `team_id`. Safe to call once per `Init`.
pub fn install(config: &Config, team_id: TeamId) -> BotResult<()> {
	let owned = *OWNS_LOGGER.get_or_init(|| {
		WriteLogger::init(config.log_level, logger_config(), SINK.clone()).is_ok()
	});
	if owned {
		log::set_max_level(config.log_level);
		SINK.open(team_id, &config.log_path(team_id))?;
	}
	Ok(())
}

/// Routes the following records to the file of `team_id`.
pub fn select(team_id: TeamId) {
	SINK.select(Some(team_id));
}

/// Routes the following records to every open team file.
pub fn select_all() {
	SINK.select(None);
}

/// Flushes and closes all team log files this plugin opened.
pub fn close() -> BotResult<()> {
	SINK.close()
}
