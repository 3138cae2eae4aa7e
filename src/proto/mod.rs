//! Protobuf types of the bot script interface, generated by `build.rs`.
#![allow(missing_docs)]

#[rustfmt::skip]
#[allow(
	unknown_lints,
	clippy::all,
	dead_code,
	non_camel_case_types,
	non_snake_case,
	non_upper_case_globals,
	trivial_casts,
	unused_imports,
	unused_results,
	unused_mut
)]
pub mod dota_gcmessages_common_bot_script {
	include!(concat!(env!("OUT_DIR"), "/dota_gcmessages_common_bot_script.rs"));
}

pub use dota_gcmessages_common_bot_script::{
	CMsgBotWorldState, CMsgBotWorldState_Unit, CMsgBotWorldState_UnitType, CMsgBotWorldState_Vector,
};
