/*!
# AccurateRip Core: Audio Size
*/

use crate::{
	BYTES_PER_FRAME,
	BYTES_PER_SAMPLE,
	Error,
	MAX_BLOCK_ADDRESS,
};



/// # Maximum Legal Byte Length.
const MAX_BYTES: u64 = (MAX_BLOCK_ADDRESS as u64) * (BYTES_PER_FRAME as u64);



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Unit.
///
/// The unit a raw value is expressed in when constructing an
/// [`AudioSize`].
pub enum AudioUnit {
	/// # CDDA Frames (1/75 s).
	Frames,
	/// # Packed Stereo Samples.
	Samples,
	/// # Bytes.
	Bytes,
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Audio Size.
///
/// A non-negative length, stored internally as a total byte count, with
/// accessors that convert to frames or samples on demand. Construction is
/// validated against the Red Book maxima; there's no way to end up holding
/// a length longer than a disc can legally be.
///
/// ## Examples
///
/// ```
/// use accurip_core::{AudioSize, AudioUnit};
///
/// let size = AudioSize::new(588, AudioUnit::Samples).unwrap();
/// assert_eq!(size.frames(), 1);
/// assert_eq!(size.bytes(), 2352);
///
/// assert!(AudioSize::new(u32::MAX, AudioUnit::Bytes).is_err());
/// ```
pub struct AudioSize(u32);

impl AudioSize {
	/// # New.
	///
	/// Construct an [`AudioSize`] from a raw value expressed in the given
	/// [`AudioUnit`].
	///
	/// ## Errors
	///
	/// Returns [`Error::InvalidAudioSize`] if the resulting byte length
	/// would exceed the maximum legal CDDA address, or if `value` does not
	/// convert to a whole number of bytes.
	pub fn new(value: u32, unit: AudioUnit) -> Result<Self, Error> {
		let bytes = match unit {
			AudioUnit::Frames => u64::from(value) * u64::from(BYTES_PER_FRAME),
			AudioUnit::Samples => u64::from(value) * u64::from(BYTES_PER_SAMPLE),
			AudioUnit::Bytes => u64::from(value),
		};

		if bytes > MAX_BYTES { Err(Error::InvalidAudioSize) }
		else {
			// Safe: bytes <= MAX_BYTES, and MAX_BYTES fits comfortably in a
			// u32 (just over one billion).
			#[expect(clippy::cast_possible_truncation, reason = "Bounds-checked above.")]
			Ok(Self(bytes as u32))
		}
	}

	#[must_use]
	/// # Zero.
	pub const fn zero() -> Self { Self(0) }

	#[must_use]
	/// # Total Bytes.
	pub const fn bytes(self) -> u32 { self.0 }

	#[must_use]
	/// # Total Samples.
	pub const fn samples(self) -> u32 { self.0 / BYTES_PER_SAMPLE }

	#[must_use]
	/// # Total Frames.
	///
	/// Note this truncates if the size isn't an exact number of frames;
	/// use [`AudioSize::is_frame_aligned`] to check first if that matters.
	pub const fn frames(self) -> u32 { self.0 / BYTES_PER_FRAME }

	#[must_use]
	/// # Is Frame-Aligned?
	pub const fn is_frame_aligned(self) -> bool { self.0 % BYTES_PER_FRAME == 0 }

	#[must_use]
	/// # Is Zero?
	pub const fn is_zero(self) -> bool { self.0 == 0 }
}
