//! Read-only view of the units in a world state snapshot.

use crate::{
	geometry::Point3,
	proto::{CMsgBotWorldState_Unit, CMsgBotWorldState_UnitType as ProtoUnitType},
	team::TeamId,
	FromProto,
};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitType {
	Invalid,
	Hero,
	CreepHero,
	LaneCreep,
	JungleCreep,
	Roshan,
	Tower,
	Barracks,
	Shrine,
	Fort,
	Building,
	Courier,
	Ward,
}
impl FromProto<ProtoUnitType> for UnitType {
	fn from_proto(unit_type: ProtoUnitType) -> Self {
		match unit_type {
			ProtoUnitType::INVALID => UnitType::Invalid,
			ProtoUnitType::HERO => UnitType::Hero,
			ProtoUnitType::CREEP_HERO => UnitType::CreepHero,
			ProtoUnitType::LANE_CREEP => UnitType::LaneCreep,
			ProtoUnitType::JUNGLE_CREEP => UnitType::JungleCreep,
			ProtoUnitType::ROSHAN => UnitType::Roshan,
			ProtoUnitType::TOWER => UnitType::Tower,
			ProtoUnitType::BARRACKS => UnitType::Barracks,
			ProtoUnitType::SHRINE => UnitType::Shrine,
			ProtoUnitType::FORT => UnitType::Fort,
			ProtoUnitType::BUILDING => UnitType::Building,
			ProtoUnitType::COURIER => UnitType::Courier,
			ProtoUnitType::WARD => UnitType::Ward,
		}
	}
}

/// Snapshot of a single unit, copied out of the message so it can outlive the borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
	pub handle: u32,
	pub name: String,
	pub unit_type: UnitType,
	pub team_id: TeamId,
	/// `-1` for units not controlled by a player.
	pub player_id: i32,
	pub location: Point3,
	pub is_alive: bool,
}
impl FromProto<&CMsgBotWorldState_Unit> for Unit {
	fn from_proto(u: &CMsgBotWorldState_Unit) -> Self {
		Self {
			handle: u.get_handle(),
			name: u.get_name().to_string(),
			unit_type: UnitType::from_proto(u.get_unit_type()),
			team_id: u.get_team_id() as TeamId,
			player_id: if u.has_player_id() { u.get_player_id() } else { -1 },
			location: Point3::from_proto(u.get_location()),
			is_alive: u.get_is_alive(),
		}
	}
}

/// One log line per unit: player id and map coordinates.
impl fmt::Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "PlayerID: {} loc: {}", self.player_id, self.location.to2())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{proto::CMsgBotWorldState_Vector, team::Team};

	fn proto_unit() -> CMsgBotWorldState_Unit {
		let mut location = CMsgBotWorldState_Vector::new();
		location.set_x(-6016.0);
		location.set_y(-6784.0);
		location.set_z(256.0);

		let mut u = CMsgBotWorldState_Unit::new();
		u.set_handle(421);
		u.set_unit_type(ProtoUnitType::HERO);
		u.set_name("npc_dota_hero_lina".to_string());
		u.set_team_id(2);
		u.set_player_id(3);
		u.set_location(location);
		u.set_is_alive(true);
		u
	}

	#[test]
	fn converts_proto_unit() {
		let unit = Unit::from_proto(&proto_unit());
		assert_eq!(unit.handle, 421);
		assert_eq!(unit.unit_type, UnitType::Hero);
		assert_eq!(unit.name, "npc_dota_hero_lina");
		assert_eq!(Team::from_id(unit.team_id), Some(Team::Radiant));
		assert_eq!(unit.player_id, 3);
		assert_eq!(unit.location, Point3::new(-6016.0, -6784.0, 256.0));
		assert!(unit.is_alive);
	}

	#[test]
	fn missing_player_id() {
		let mut u = proto_unit();
		u.clear_player_id();
		u.set_unit_type(ProtoUnitType::LANE_CREEP);
		let unit = Unit::from_proto(&u);
		assert_eq!(unit.player_id, -1);
		assert_eq!(unit.unit_type, UnitType::LaneCreep);
	}

	#[test]
	fn log_line() {
		let unit = Unit::from_proto(&proto_unit());
		assert_eq!(unit.to_string(), "PlayerID: 3 loc: x=-6016 y=-6784");
	}
}
