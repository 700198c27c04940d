/*!
# AccurateRip Core: Table of Contents
*/

use crate::{
	BACK_SKIP_SAMPLES,
	Error,
	FRONT_SKIP_SAMPLES,
	MAX_BLOCK_ADDRESS,
	MAX_OFFSET,
	MAX_TRACK_COUNT,
	MIN_TRACK_DISTANCE,
	MIN_TRACK_LENGTH,
	SAMPLES_PER_FRAME,
};



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Table of Contents.
///
/// Holds a disc's per-track offsets (in CDDA frames), an optional leadout,
/// and, when the caller has them, the parsed track lengths and filenames a
/// cuesheet might carry.
///
/// Produced only via [`make_toc`] or [`make_toc_with_lengths`], both of
/// which reject CDDA-inconsistent input, so a [`ToC`] in hand is always
/// internally valid.
///
/// ## Examples
///
/// ```
/// use accurip_core::make_toc;
///
/// let toc = make_toc(2, vec![0, 29_042], 53_880).unwrap();
/// assert_eq!(toc.track_count(), 2);
/// assert!(toc.is_complete());
/// assert_eq!(toc.effective_length(1), Some(29_042));
/// assert_eq!(toc.effective_length(2), Some(53_880 - 29_042));
/// ```
pub struct ToC {
	/// # Track Offsets (Frames).
	offsets: Vec<u32>,

	/// # Leadout (Frames).
	leadout: Option<u32>,

	/// # Parsed Lengths (Frames), If Supplied.
	lengths: Option<Vec<u32>>,

	/// # Filenames, If Supplied.
	files: Option<Vec<String>>,
}

impl ToC {
	#[must_use]
	/// # Track Count.
	pub fn track_count(&self) -> u8 {
		// Safe: construction caps this at 99.
		#[expect(clippy::cast_possible_truncation, reason = "Bounds-checked at construction.")]
		{ self.offsets.len() as u8 }
	}

	#[must_use]
	/// # Track Offsets (Frames).
	pub fn offsets(&self) -> &[u32] { &self.offsets }

	#[must_use]
	/// # Leadout (Frames).
	pub const fn leadout(&self) -> Option<u32> { self.leadout }

	#[must_use]
	/// # Parsed Lengths (Frames).
	///
	/// These are retained for round-tripping only; checksum and partition
	/// logic always derive lengths from offsets and leadout. See
	/// [`ToC::effective_length`].
	pub fn lengths(&self) -> Option<&[u32]> { self.lengths.as_deref() }

	#[must_use]
	/// # Filenames.
	pub fn filenames(&self) -> Option<&[String]> { self.files.as_deref() }

	#[must_use]
	/// # Is Complete?
	///
	/// A [`ToC`] is complete once it has a leadout, either because it was
	/// built with one via [`make_toc`] or completed afterward via
	/// [`merge`].
	pub const fn is_complete(&self) -> bool { self.leadout.is_some() }

	#[must_use]
	/// # Effective Length of Track (Frames).
	///
	/// The effective length of track `i` is `offset[i+1] - offset[i]` for
	/// every track but the last, and `leadout - offset[n]` for the last.
	/// Returns `None` if `track` is out of range or the [`ToC`] has no
	/// leadout yet.
	///
	/// `track` is 1-based.
	pub fn effective_length(&self, track: u8) -> Option<u32> {
		let idx = usize::from(track.checked_sub(1)?);
		let offsets = &self.offsets;
		if idx >= offsets.len() { return None; }

		if idx + 1 < offsets.len() { Some(offsets[idx + 1] - offsets[idx]) }
		else { self.leadout.map(|l| l - offsets[idx]) }
	}

	#[must_use]
	/// # Total Samples.
	///
	/// Returns `None` if the [`ToC`] is incomplete.
	pub(crate) fn total_samples(&self) -> Option<u32> {
		self.leadout.map(|l| l * SAMPLES_PER_FRAME)
	}

	/// # Per-Track Sample Bounds, Skip-Clipped.
	///
	/// Returns one `(first, last)` pair per track, inclusive sample
	/// indices, with the front skip folded into track 1's first sample
	/// and the back skip folded into the last track's last sample. This is
	/// exactly the "legal range" the sample partitioner works against.
	///
	/// Returns `None` if the [`ToC`] is incomplete.
	pub(crate) fn track_bounds(&self) -> Option<Vec<(u32, u32)>> {
		let total = self.total_samples()?;
		Some(self.track_bounds_with(Some(total)))
	}

	/// # Per-Track Sample Bounds, Skip-Clipped (Leadout Optional).
	///
	/// Same as [`ToC::track_bounds`], but usable before the leadout is
	/// known: the last track's trailing bound is set to `u32::MAX` as a
	/// placeholder until a caller (namely [`crate::Calculation`], via
	/// `update_audiosize`) learns the real leadout and recomputes.
	pub(crate) fn track_bounds_open(&self) -> Vec<(u32, u32)> {
		self.track_bounds_with(self.total_samples())
	}

	/// # Shared Bounds Derivation.
	fn track_bounds_with(&self, total: Option<u32>) -> Vec<(u32, u32)> {
		let n = self.offsets.len();
		let mut out = Vec::with_capacity(n);

		for (idx, &offset) in self.offsets.iter().enumerate() {
			let first =
				if idx == 0 { offset * SAMPLES_PER_FRAME + FRONT_SKIP_SAMPLES }
				else { offset * SAMPLES_PER_FRAME };
			let last =
				if idx + 1 < n { self.offsets[idx + 1] * SAMPLES_PER_FRAME - 1 }
				else {
					match total {
						Some(t) => t - 1 - BACK_SKIP_SAMPLES,
						None => u32::MAX,
					}
				};
			out.push((first, last));
		}

		out
	}
}

/// # Validate Offsets.
///
/// Shared by both factories: track count in range, offsets non-empty,
/// strictly ascending with at least [`MIN_TRACK_DISTANCE`] between
/// consecutive tracks, and the final offset within [`MAX_OFFSET`].
fn validate_offsets(track_count: u8, offsets: &[u32]) -> Result<(), Error> {
	if offsets.is_empty() { return Err(Error::NoAudio); }
	if track_count == 0 || MAX_TRACK_COUNT < track_count || offsets.len() != usize::from(track_count) {
		return Err(Error::TrackCount);
	}

	if offsets.windows(2).any(|pair| pair[1] < pair[0] + MIN_TRACK_DISTANCE) {
		return Err(Error::SectorOrder);
	}

	// Safe: offsets is non-empty (checked above).
	if offsets[offsets.len() - 1] > MAX_OFFSET { return Err(Error::SectorSize); }

	Ok(())
}

#[must_use = "factories return a Result, which must be handled"]
/// # Make ToC (With Leadout).
///
/// Validate `offsets` and `leadout` per the rules in the crate's data
/// model and construct a complete [`ToC`].
///
/// ## Errors
///
/// Returns [`Error::NoAudio`] if `offsets` is empty, [`Error::TrackCount`]
/// if `track_count` is zero, exceeds 99, or disagrees with
/// `offsets.len()`, [`Error::SectorOrder`] if offsets aren't strictly
/// ascending with at least 300 frames between tracks,
/// [`Error::SectorSize`] if the final offset exceeds [`crate::MAX_OFFSET`],
/// or [`Error::LeadoutSize`] if `leadout` doesn't leave at least 150
/// frames after the final track or exceeds [`crate::MAX_BLOCK_ADDRESS`].
pub fn make_toc(track_count: u8, offsets: Vec<u32>, leadout: u32) -> Result<ToC, Error> {
	validate_offsets(track_count, &offsets)?;
	validate_leadout(&offsets, leadout)?;

	Ok(ToC { offsets, leadout: Some(leadout), lengths: None, files: None })
}

#[must_use = "factories return a Result, which must be handled"]
/// # Make ToC (From Lengths, No Leadout Yet).
///
/// Builds an incomplete [`ToC`] from parsed per-track lengths and
/// filenames (as a cuesheet might supply), deriving offsets by
/// accumulating the lengths from zero. The leadout is left unset; call
/// [`merge`] once it's known.
///
/// `lengths` and `files`, when both supplied, are retained verbatim for
/// round-tripping; they are never substituted into checksum or
/// partitioning computations, which always derive from offsets.
///
/// ## Errors
///
/// Same as [`make_toc`], applied to the derived offsets, plus
/// [`Error::NoAudio`] if `lengths` is empty.
pub fn make_toc_with_lengths(
	track_count: u8,
	lengths: Vec<u32>,
	files: Option<Vec<String>>,
) -> Result<ToC, Error> {
	if lengths.is_empty() { return Err(Error::NoAudio); }

	let mut offsets = Vec::with_capacity(lengths.len());
	let mut acc: u32 = 0;
	for &len in &lengths {
		offsets.push(acc);
		acc += len;
	}

	validate_offsets(track_count, &offsets)?;

	Ok(ToC { offsets, leadout: None, lengths: Some(lengths), files })
}

/// # Validate Leadout.
fn validate_leadout(offsets: &[u32], leadout: u32) -> Result<(), Error> {
	// Safe: callers only reach this after validate_offsets confirmed
	// offsets is non-empty.
	let last = offsets[offsets.len() - 1];
	if leadout < last + MIN_TRACK_LENGTH || leadout > MAX_BLOCK_ADDRESS { Err(Error::LeadoutSize) }
	else { Ok(()) }
}

#[must_use = "factories return a Result, which must be handled"]
/// # Merge Leadout Into ToC.
///
/// Completes a [`ToC`] previously built with [`make_toc_with_lengths`] by
/// supplying its leadout. Offsets are not re-validated (they already were,
/// at construction); only the new leadout is checked.
///
/// ## Errors
///
/// Returns [`Error::LeadoutSize`] under the same conditions as
/// [`make_toc`].
pub fn merge(toc: ToC, leadout: u32) -> Result<ToC, Error> {
	validate_leadout(&toc.offsets, leadout)?;
	Ok(ToC { leadout: Some(leadout), ..toc })
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_make_toc() {
		let toc = make_toc(2, vec![0, 29_042], 53_880).unwrap();
		assert_eq!(toc.track_count(), 2);
		assert_eq!(toc.offsets(), &[0, 29_042]);
		assert_eq!(toc.leadout(), Some(53_880));
		assert!(toc.is_complete());
	}

	#[test]
	fn t_effective_length() {
		let toc = make_toc(3, vec![0, 100_000, 200_000], 300_000).unwrap();
		assert_eq!(toc.effective_length(1), Some(100_000));
		assert_eq!(toc.effective_length(2), Some(100_000));
		assert_eq!(toc.effective_length(3), Some(100_000));
		assert_eq!(toc.effective_length(4), None);
	}

	#[test]
	fn t_bad_order() {
		assert!(make_toc(2, vec![0, 100], 53_880).is_err());
		assert!(make_toc(2, vec![100, 0], 53_880).is_err());
	}

	#[test]
	fn t_bad_track_count() {
		assert!(make_toc(3, vec![0, 29_042], 53_880).is_err());
		assert!(make_toc(0, vec![], 53_880).is_err());
		assert!(make_toc(100, (0..100).map(|i| i * 1000).collect(), 200_000).is_err());
	}

	#[test]
	fn t_bad_leadout() {
		assert!(make_toc(1, vec![0], 100).is_err());
		assert!(make_toc(1, vec![0], crate::MAX_BLOCK_ADDRESS + 1).is_err());
	}

	#[test]
	fn t_lengths_then_merge() {
		let toc = make_toc_with_lengths(2, vec![29_042, 24_838], None).unwrap();
		assert!(! toc.is_complete());
		assert_eq!(toc.offsets(), &[0, 29_042]);

		let toc = merge(toc, 53_880).unwrap();
		assert!(toc.is_complete());
		assert_eq!(toc.effective_length(2), Some(24_838));
	}

	#[test]
	fn t_track_bounds() {
		let toc = make_toc(2, vec![0, 29_042], 53_880).unwrap();
		let bounds = toc.track_bounds().unwrap();
		assert_eq!(bounds[0], (2939, 29_042 * 588 - 1));
		let total = 53_880 * 588;
		assert_eq!(bounds[1], (29_042 * 588, total - 1 - 2940));
	}
}
