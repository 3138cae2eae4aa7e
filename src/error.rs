use protobuf::ProtobufError;
use std::io;
use thiserror::Error;

pub type BotResult<T> = Result<T, BotError>;

#[derive(Debug, Error)]
pub enum BotError {
	#[error("malformed world state: {0}")]
	Decode(#[from] ProtobufError),

	#[error("null world state pointer with length {len}")]
	NullSnapshot { len: usize },

	#[error("log file error: {0}")]
	Io(#[from] io::Error),
}
