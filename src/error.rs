/*!
# AccurateRip Core: Errors
*/

use std::{
	error::Error as StdError,
	fmt,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Error Type.
pub enum Error {
	/// # Invalid Audio Size.
	///
	/// Returned when an [`AudioSize`](crate::AudioSize) is constructed from a
	/// value that falls outside the Red Book maxima.
	InvalidAudioSize,

	/// # No Audio.
	///
	/// At least one track is required for a table of contents.
	NoAudio,

	/// # Track Count.
	///
	/// A table of contents supports a maximum of 99 tracks.
	TrackCount,

	/// # Sector Ordering.
	///
	/// Track offsets must be strictly ascending, with at least `300` frames
	/// between consecutive tracks.
	SectorOrder,

	/// # Sector Size.
	///
	/// An offset exceeds [`MAX_OFFSET`](crate::MAX_OFFSET).
	SectorSize,

	/// # Leadout Size.
	///
	/// The leadout must be at least `150` frames past the final track and
	/// may not exceed [`MAX_BLOCK_ADDRESS`](crate::MAX_BLOCK_ADDRESS).
	LeadoutSize,

	/// # Incomplete ToC.
	///
	/// Raised when an operation requires a leadout but the [`ToC`](crate::ToC)
	/// was built from lengths only and has not yet been merged with one.
	Incomplete,

	/// # Invalid AccurateRip ID String.
	ArIdDecode,

	/// # No Checksums.
	///
	/// An AccurateRip response blob was parsed but yielded no usable
	/// checksums.
	NoChecksums,

	/// # Stream Parse.
	///
	/// Raised by the dBAR parser on a truncated read. Carries the
	/// stream-absolute byte position, the 1-based block number, and the
	/// 1-based byte position within that block.
	StreamParse {
		/// # Absolute Byte Position.
		byte_pos: u64,
		/// # Block Number (1-based).
		block: u32,
		/// # Byte Position Within Block (1-based).
		block_byte_pos: u32,
	},

	/// # Domain Error.
	///
	/// A [`VerificationResult`](crate::VerificationResult) accessor was
	/// called with an out-of-range block or track index.
	Domain,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidAudioSize => f.write_str("Audio size is out of CDDA range."),
			Self::NoAudio => f.write_str("At least one track is required."),
			Self::TrackCount => f.write_str("The number of tracks must be between 1..=99."),
			Self::SectorOrder => f.write_str("Offsets must be strictly ascending with at least 300 frames between tracks."),
			Self::SectorSize => f.write_str("Offset exceeds the maximum legal CDDA address."),
			Self::LeadoutSize => f.write_str("Leadout must be at least 150 frames past the final track."),
			Self::Incomplete => f.write_str("This ToC has no leadout yet; merge one in first."),
			Self::ArIdDecode => f.write_str("Invalid AccurateRip ID string."),
			Self::NoChecksums => f.write_str("No checksums were present."),
			Self::StreamParse { byte_pos, block, block_byte_pos } => write!(
				f,
				"Truncated dBAR stream at byte {byte_pos} (block {block}, byte {block_byte_pos} of block).",
			),
			Self::Domain => f.write_str("Block or track index is out of range."),
		}
	}
}

impl StdError for Error {}
