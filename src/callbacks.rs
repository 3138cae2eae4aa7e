//! What each game callback does, on already decoded messages.
//!
//! The exported C functions in [`ffi`](crate::ffi) decode the host buffers and
//! call into here.

use crate::{
	config::Config,
	dump::Dump,
	logging,
	proto::CMsgBotWorldState,
	team::{Team, TeamId},
	world_state::WorldState,
	FromProto,
};

/// Sets up the team's log sink and logs `Init (team:N)`.
pub fn init(team_id: TeamId) {
	let config = Config::from_env();
	if let Err(e) = logging::install(&config, team_id) {
		eprintln!("Can't open bot log {}: {}", config.log_path(team_id).display(), e);
	}
	info!("Init (team:{})", team_id);
}

/// Logs one line per unit in the snapshot.
pub fn observe(team_id: TeamId, msg: &CMsgBotWorldState) {
	logging::select(team_id);
	info!("Observe (team:{})", team_id);

	let ws = WorldState::from_proto(msg);
	debug!(
		"dota_time={} game_time={} units={} team={}",
		ws.dota_time,
		ws.game_time,
		ws.units.len(),
		Team::from_id(ws.team_id).map_or_else(|| ws.team_id.to_string(), |t| t.to_string()),
	);
	for unit in &ws.units {
		info!("{}", unit);
	}
}

/// Logs the message in text form. Never produces an action.
pub fn act(team_id: TeamId, msg: &CMsgBotWorldState) -> Dump {
	logging::select(team_id);
	info!("Act (team:{})", team_id);

	let dump = Dump::of(msg);
	if dump.is_full() {
		info!("{}", dump);
	} else {
		warn!("{}", dump);
	}
	dump
}

/// Logs `Shutdown` into every team's file, then closes them all.
pub fn shutdown() {
	logging::select_all();
	info!("Shutdown");
	if let Err(e) = logging::close() {
		eprintln!("Can't flush bot log: {}", e);
	}
}
