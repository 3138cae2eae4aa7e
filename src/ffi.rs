//! Entry points the game looks up by name after loading the library.
//!
//! Every export catches panics: unwinding into the game is undefined behavior.
#![allow(non_snake_case)]

use crate::{
	callbacks,
	error::BotResult,
	logging,
	proto::CMsgBotWorldState,
	team::TeamId,
	world_state::{decode, snapshot_bytes},
};
use std::{
	any::Any,
	os::raw::{c_int, c_void},
	panic::{catch_unwind, AssertUnwindSafe},
	ptr,
};

fn guard<F: FnOnce()>(callback: &str, f: F) {
	if let Err(payload) = catch_unwind(AssertUnwindSafe(f)) {
		let message = panic_message(&*payload);
		// The logger itself may be what panicked.
		if catch_unwind(|| error!("{} panicked: {}", callback, message)).is_err() {
			eprintln!("{} panicked: {}", callback, message);
		}
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
	if let Some(s) = payload.downcast_ref::<&str>() {
		s
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s
	} else {
		"unknown panic"
	}
}

/// # Safety
///
/// See [`snapshot_bytes`].
unsafe fn with_snapshot<F>(callback: &str, team_id: TeamId, data: *const u8, len: usize, f: F)
where
	F: FnOnce(&CMsgBotWorldState),
{
	logging::select(team_id);
	let msg: BotResult<CMsgBotWorldState> = snapshot_bytes(data, len).and_then(decode);
	match msg {
		Ok(msg) => f(&msg),
		Err(e) => error!("{} (team:{}): {}", callback, team_id, e),
	}
}

/// Called once per team when the game loads the bot script.
#[no_mangle]
pub extern "C" fn Init(team_id: c_int, _: *mut c_void, _: *mut c_void) {
	guard("Init", || callbacks::init(team_id));
}

/// Called every tick with the serialized world state of the team.
///
/// # Safety
///
/// Unless `data` is null, it must point to `len` bytes that stay valid for the call.
#[no_mangle]
pub unsafe extern "C" fn Observe(team_id: c_int, data: *const u8, len: usize) {
	guard("Observe", || {
		with_snapshot("Observe", team_id, data, len, |msg| callbacks::observe(team_id, msg))
	});
}

/// Called every tick for the team's actions. Always returns null.
///
/// # Safety
///
/// Same as [`Observe`].
#[no_mangle]
pub unsafe extern "C" fn Act(team_id: c_int, data: *const u8, len: usize) -> *mut c_void {
	guard("Act", || {
		with_snapshot("Act", team_id, data, len, |msg| {
			callbacks::act(team_id, msg);
		})
	});
	ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn Shutdown() {
	guard("Shutdown", callbacks::shutdown);
}
