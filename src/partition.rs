/*!
# AccurateRip Core: Sample Partitioner
*/

use crate::{
	Error,
	ToC,
};



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Partition.
///
/// A contiguous, track-aligned sub-range of one incoming sample block,
/// clipped to the front/back skip regions at the extremes of the disc.
/// `start`/`end` are stream-absolute sample indices, inclusive.
pub struct Partition {
	/// # Track Number (1-Based).
	track: u8,
	/// # First Sample (Inclusive).
	start: u32,
	/// # Last Sample (Inclusive).
	end: u32,
	/// # Starts At The Track's First Relevant Sample?
	starts_track: bool,
	/// # Ends At The Track's Last Sample?
	ends_track: bool,
}

impl Partition {
	#[must_use]
	/// # Track Number (1-Based).
	pub const fn track(&self) -> u8 { self.track }

	#[must_use]
	/// # First Sample (Inclusive).
	pub const fn start(&self) -> u32 { self.start }

	#[must_use]
	/// # Last Sample (Inclusive).
	pub const fn end(&self) -> u32 { self.end }

	#[must_use]
	/// # Sample Count.
	pub const fn len(&self) -> u32 { self.end - self.start + 1 }

	#[must_use]
	/// # Is Empty?
	///
	/// Always `false`; partitions are never constructed empty. Present for
	/// API symmetry with [`Partition::len`].
	pub const fn is_empty(&self) -> bool { false }

	#[must_use]
	/// # Starts Track?
	///
	/// True iff this partition's first sample is the track's first
	/// relevant sample (i.e. this partition opens the track).
	pub const fn starts_track(&self) -> bool { self.starts_track }

	#[must_use]
	/// # Ends Track?
	///
	/// True iff this partition's last sample is the track's last sample
	/// (i.e. this partition closes the track).
	pub const fn ends_track(&self) -> bool { self.ends_track }
}

#[must_use = "partitioning returns a Result, which must be handled"]
/// # Partition An Incoming Sample Block.
///
/// Given a complete `toc`, the stream-absolute sample offset at which the
/// new block begins, and its length in samples, emit zero or more
/// track-aligned [`Partition`]s covering the portion of the block that
/// falls within the legal (skip-clipped) sample range.
///
/// Returns an empty vector, not an error, when the block lies entirely
/// outside the legal range — that's an expected occurrence (it happens for
/// every block inside the front/back skip regions), not a failure.
///
/// ## Errors
///
/// Returns [`Error::Incomplete`] if `toc` has no leadout yet.
pub fn partition(toc: &ToC, block_offset: u32, block_len: u32) -> Result<Vec<Partition>, Error> {
	let bounds = toc.track_bounds().ok_or(Error::Incomplete)?;
	Ok(partition_bounds(&bounds, block_offset, block_len))
}

#[must_use]
/// # Partition Against Already-Known Bounds.
///
/// Same logic as [`partition`], but works directly off a precomputed
/// per-track bounds table instead of re-deriving one from a [`ToC`].
///
/// [`crate::Calculation`] uses this rather than [`partition`]: its bounds
/// may have been revised after construction via `update_audiosize` (the
/// leadout wasn't known yet when it was built), and re-deriving bounds from
/// the borrowed, unrevised [`ToC`] would silently ignore that revision.
pub(crate) fn partition_bounds(bounds: &[(u32, u32)], block_offset: u32, block_len: u32) -> Vec<Partition> {
	if block_len == 0 || bounds.is_empty() { return Vec::new(); }

	// Safe: bounds is non-empty (checked above).
	let first_relevant = bounds[0].0;
	let last_relevant = bounds[bounds.len() - 1].1;

	let block_start = block_offset;
	let block_end = block_offset + block_len - 1;

	if block_end < first_relevant || block_start > last_relevant { return Vec::new(); }

	let range_start = block_start.max(first_relevant);
	let range_end = block_end.min(last_relevant);

	let mut out = Vec::new();
	for (idx, &(track_first, track_last)) in bounds.iter().enumerate() {
		if track_last < range_start { continue; }
		if track_first > range_end { break; }

		let start = range_start.max(track_first);
		let end = range_end.min(track_last);

		// Safe: track_count is capped at 99 by ToC's factories.
		#[expect(clippy::cast_possible_truncation, reason = "Bounds-checked at ToC construction.")]
		out.push(Partition {
			track: (idx + 1) as u8,
			start,
			end,
			starts_track: start == track_first,
			ends_track: end == track_last,
		});
	}

	out
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::make_toc;

	fn two_track_toc() -> ToC {
		make_toc(2, vec![0, 100], 1000).unwrap()
	}

	#[test]
	fn t_single_block_covers_everything() {
		let toc = two_track_toc();
		let total = toc.track_bounds().unwrap();
		let (first, _) = total[0];
		let (_, last) = total[1];
		let parts = partition(&toc, first, last - first + 1).unwrap();
		assert_eq!(parts.len(), 2);
		assert!(parts[0].starts_track() && parts[0].ends_track());
		assert!(parts[1].starts_track() && parts[1].ends_track());
		assert_eq!(parts[0].track(), 1);
		assert_eq!(parts[1].track(), 2);
	}

	#[test]
	fn t_block_before_skip_is_empty() {
		let toc = two_track_toc();
		let parts = partition(&toc, 0, 100).unwrap();
		assert!(parts.is_empty());
	}

	#[test]
	fn t_block_crossing_track_boundary() {
		let toc = two_track_toc();
		let bounds = toc.track_bounds().unwrap();
		let track1_last = bounds[0].1;
		// A block straddling the boundary between tracks should split in two.
		let parts = partition(&toc, track1_last - 5, 20).unwrap();
		assert_eq!(parts.len(), 2);
		assert_eq!(parts[0].track(), 1);
		assert!(parts[0].ends_track());
		assert_eq!(parts[1].track(), 2);
		assert!(parts[1].starts_track());
	}

	#[test]
	fn t_sum_of_partitions_matches_whole() {
		let toc = two_track_toc();
		let bounds = toc.track_bounds().unwrap();
		let first = bounds[0].0;
		let last = bounds[1].1;

		// Split the legal range into uneven chunks and confirm the total
		// sample coverage matches partitioning it as one block.
		let whole = partition(&toc, first, last - first + 1).unwrap();
		let whole_total: u32 = whole.iter().map(Partition::len).sum();

		let mut chunked_total = 0;
		let mut off = first;
		let mut remaining = last - first + 1;
		while remaining > 0 {
			let take = remaining.min(37);
			chunked_total += partition(&toc, off, take).unwrap()
				.iter().map(Partition::len).sum::<u32>();
			off += take;
			remaining -= take;
		}

		assert_eq!(whole_total, chunked_total);
	}
}
