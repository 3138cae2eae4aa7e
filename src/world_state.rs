//! Decoding of the snapshot the game hands to `Observe` and `Act`.

use crate::{
	error::{BotError, BotResult},
	proto::CMsgBotWorldState,
	team::TeamId,
	unit::Unit,
	FromProto,
};
use protobuf::Message;
use std::slice;

/// Decodes a serialized snapshot.
///
/// Required fields are not checked here, so a partial message still decodes
/// and can be dumped in its abbreviated form.
pub fn decode(bytes: &[u8]) -> BotResult<CMsgBotWorldState> {
	let mut msg = CMsgBotWorldState::new();
	msg.merge_from_bytes(bytes)?;
	Ok(msg)
}

/// Borrows the snapshot buffer the game passed in.
///
/// # Safety
///
/// Unless `data` is null, it must point to `len` initialized bytes that stay
/// valid and unmodified for `'a`.
pub unsafe fn snapshot_bytes<'a>(data: *const u8, len: usize) -> BotResult<&'a [u8]> {
	if len == 0 {
		Ok(&[])
	} else if data.is_null() {
		Err(BotError::NullSnapshot { len })
	} else {
		Ok(slice::from_raw_parts(data, len))
	}
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorldState {
	pub team_id: TeamId,
	pub game_time: f32,
	pub dota_time: f32,
	pub units: Vec<Unit>,
}
impl FromProto<&CMsgBotWorldState> for WorldState {
	fn from_proto(ws: &CMsgBotWorldState) -> Self {
		Self {
			team_id: ws.get_team_id() as TeamId,
			game_time: ws.get_game_time(),
			dota_time: ws.get_dota_time(),
			units: ws.get_units().iter().map(Unit::from_proto).collect(),
		}
	}
}
