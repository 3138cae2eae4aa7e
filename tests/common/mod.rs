#![allow(dead_code)]

use dota_botscript::proto::{CMsgBotWorldState, CMsgBotWorldState_Unit, CMsgBotWorldState_Vector};
use log::{LevelFilter, Log, Metadata, Record};
use std::{cell::RefCell, sync::Once};

thread_local! {
	static LINES: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

/// Collects log lines per test thread; callbacks run on the calling thread.
struct Capture;
impl Log for Capture {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}
	fn log(&self, record: &Record) {
		LINES.with(|lines| lines.borrow_mut().push(record.args().to_string()));
	}
	fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Runs `f` and returns the info-and-above lines it logged.
pub fn capture<F: FnOnce()>(f: F) -> Vec<String> {
	INSTALL.call_once(|| {
		log::set_logger(&CAPTURE).unwrap();
		log::set_max_level(LevelFilter::Info);
	});
	LINES.with(|lines| lines.borrow_mut().clear());
	f();
	LINES.with(|lines| lines.borrow_mut().drain(..).collect())
}

pub fn vector(x: f32, y: f32, z: f32) -> CMsgBotWorldState_Vector {
	let mut v = CMsgBotWorldState_Vector::new();
	v.set_x(x);
	v.set_y(y);
	v.set_z(z);
	v
}

pub fn unit(player_id: i32, x: f32, y: f32) -> CMsgBotWorldState_Unit {
	let mut u = CMsgBotWorldState_Unit::new();
	u.set_player_id(player_id);
	u.set_location(vector(x, y, 128.0));
	u.set_is_alive(true);
	u
}

pub fn world(team_id: u32, units: Vec<CMsgBotWorldState_Unit>) -> CMsgBotWorldState {
	let mut ws = CMsgBotWorldState::new();
	ws.set_team_id(team_id);
	ws.set_dota_time(-90.0);
	for u in units {
		ws.mut_units().push(u);
	}
	ws
}

/// `units { player_id: 3 location { x: 1.0 } }`, missing the required `y` and `z`.
pub const PARTIAL_SNAPSHOT: [u8; 11] = [0x5a, 0x09, 0x40, 0x03, 0x32, 0x05, 0x0d, 0x00, 0x00, 0x80, 0x3f];
