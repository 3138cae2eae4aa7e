//! Dota 2 bot script plugin.
//!
//! Built as a `cdylib`, the library exports the four callbacks the game
//! invokes over a bot script's lifetime: `Init`, `Observe`, `Act` and
//! `Shutdown` (see [`ffi`]). They log team ids, unit positions and a text
//! dump of the world state; no decisions are made.
//!
//! The same code is available as a Rust library: [`callbacks`] holds the
//! behavior on decoded [`CMsgBotWorldState`](proto::CMsgBotWorldState)
//! messages, the remaining modules are read-only views and plumbing.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate log;

/// The most frequent used items.
/// Prefered usage: `use dota_botscript::prelude::*;`.
pub mod prelude {
	pub use crate::{
		callbacks::{act, init, observe, shutdown},
		dump::Dump,
		error::{BotError, BotResult},
		geometry::{Point2, Point3},
		proto::CMsgBotWorldState,
		team::{Team, TeamId, TEAM_DIRE, TEAM_RADIANT},
		unit::{Unit, UnitType},
		world_state::{decode, WorldState},
		FromProto,
	};
}

pub mod callbacks;
pub mod config;
pub mod dump;
pub mod error;
pub mod ffi;
pub mod geometry;
pub mod logging;
pub mod proto;
pub mod team;
pub mod unit;
pub mod world_state;

/// Conversion of protobuf messages into the crate's view types.
pub trait FromProto<T>
where
	Self: Sized,
{
	fn from_proto(p: T) -> Self;
}
