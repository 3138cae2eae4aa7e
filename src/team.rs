use num_traits::FromPrimitive;
use std::fmt;

/// Raw team identifier, as passed by the game to every callback.
pub type TeamId = i32;

pub const TEAM_RADIANT: TeamId = 2;
pub const TEAM_DIRE: TeamId = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive)]
pub enum Team {
	Radiant = 2,
	Dire = 3,
	Neutrals = 4,
	NoTeam = 5,
}
impl Team {
	pub fn from_id(id: TeamId) -> Option<Self> {
		Self::from_i32(id)
	}
	pub fn name(self) -> &'static str {
		match self {
			Team::Radiant => "radiant",
			Team::Dire => "dire",
			Team::Neutrals => "neutrals",
			Team::NoTeam => "noteam",
		}
	}
}
impl fmt::Display for Team {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_ids() {
		assert_eq!(Team::from_id(TEAM_RADIANT), Some(Team::Radiant));
		assert_eq!(Team::from_id(TEAM_DIRE), Some(Team::Dire));
		assert_eq!(Team::from_id(5), Some(Team::NoTeam));
	}

	#[test]
	fn unknown_ids() {
		assert_eq!(Team::from_id(0), None);
		assert_eq!(Team::from_id(-1), None);
		assert_eq!(Team::from_id(42), None);
	}
}
