use crate::{proto::CMsgBotWorldState_Vector, FromProto};
use std::fmt;

/// Point on the map plane, in world units.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point2 {
	pub x: f32,
	pub y: f32,
}
impl Point2 {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}
impl fmt::Display for Point2 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "x={} y={}", self.x, self.y)
	}
}

/// Point with height, as sent by the game.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point3 {
	pub x: f32,
	pub y: f32,
	pub z: f32,
}
impl Point3 {
	pub fn new(x: f32, y: f32, z: f32) -> Self {
		Self { x, y, z }
	}
	pub fn to2(self) -> Point2 {
		Point2 { x: self.x, y: self.y }
	}
}
impl FromProto<&CMsgBotWorldState_Vector> for Point3 {
	fn from_proto(v: &CMsgBotWorldState_Vector) -> Self {
		Self {
			x: v.get_x(),
			y: v.get_y(),
			z: v.get_z(),
		}
	}
}
