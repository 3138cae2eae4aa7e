use crate::proto::CMsgBotWorldState;
use protobuf::Message;
use std::fmt;

/// Text rendering of a world state message for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dump {
	/// Multi-line protobuf text format of a complete message.
	Full(String),
	/// Single-line best-effort form of a message with missing required fields.
	Partial(String),
}
impl Dump {
	pub fn of(msg: &CMsgBotWorldState) -> Self {
		if msg.is_initialized() {
			Dump::Full(format!("{:#?}", msg))
		} else {
			Dump::Partial(format!("{:?}", msg))
		}
	}
	pub fn is_full(&self) -> bool {
		matches!(self, Dump::Full(_))
	}
}
impl fmt::Display for Dump {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Dump::Full(text) => write!(f, "Your message:\n{}", text),
			Dump::Partial(short) => write!(f, "Message not valid (partial content: {})", short),
		}
	}
}
