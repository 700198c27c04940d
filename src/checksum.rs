/*!
# AccurateRip Core: Checksum Engine
*/

use crate::{
	BACK_SKIP_SAMPLES,
	Error,
	SAMPLES_PER_FRAME,
	ToC,
	partition::partition_bounds,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Algorithm.
///
/// Which AccurateRip checksum variant(s) a [`Calculation`] should emit.
/// The per-sample inner loop is identical regardless of variant — it
/// always maintains both subtotals — this only controls which land in the
/// [`ChecksumSet`] handed back at each track boundary.
pub enum Algorithm {
	/// # ARCSv1 Only.
	V1,
	/// # ARCSv2 Only.
	V2,
	/// # Both ARCSv1 and ARCSv2.
	V1V2,
}

impl Algorithm {
	/// # Wants V1?
	const fn wants_v1(self) -> bool { matches!(self, Self::V1 | Self::V1V2) }

	/// # Wants V2?
	const fn wants_v2(self) -> bool { matches!(self, Self::V2 | Self::V1V2) }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Checksum Set.
///
/// One track's worth of AccurateRip checksums, plus its length in frames.
/// At most one value is present per requested [`Algorithm`] variant.
pub struct ChecksumSet {
	/// # ARCSv1.
	v1: Option<u32>,
	/// # ARCSv2.
	v2: Option<u32>,
	/// # Length (Frames).
	length: u32,
}

impl ChecksumSet {
	#[must_use]
	/// # ARCSv1.
	pub const fn v1(&self) -> Option<u32> { self.v1 }

	#[must_use]
	/// # ARCSv2.
	pub const fn v2(&self) -> Option<u32> { self.v2 }

	#[must_use]
	/// # Length (Frames).
	pub const fn length(&self) -> u32 { self.length }

	#[cfg(test)]
	/// # Build Directly (Test Fixtures Only).
	pub(crate) const fn test_only(v1: u32, v2: u32, length: u32) -> Self {
		Self { v1: Some(v1), v2: Some(v2), length }
	}
}

#[must_use]
/// # From Raw Parts.
///
/// Builds a [`ChecksumSet`] directly from already-known fields. Used by the
/// `serde` feature's deserializer, which has no [`Calculation`] to derive one
/// from.
pub(crate) const fn from_parts(v1: Option<u32>, v2: Option<u32>, length: u32) -> ChecksumSet {
	ChecksumSet { v1, v2, length }
}



/// # Checksums.
///
/// One [`ChecksumSet`] per track, in track order.
pub type Checksums = Vec<ChecksumSet>;



#[derive(Debug, Clone, Copy)]
/// # Per-Sample Running State.
struct Subtotals {
	/// # 1-Based Sample Multiplier.
	multiplier: u64,
	/// # ARCSv1 Subtotal.
	s1: u32,
	/// # ARCSv2 Subtotal.
	s2: u32,
}

impl Subtotals {
	/// # New, Starting At The Front Skip Boundary.
	const fn starting_track1() -> Self {
		Self { multiplier: (crate::FRONT_SKIP_SAMPLES + 1) as u64, s1: 0, s2: 0 }
	}

	/// # New, Starting At A Plain Track Boundary.
	const fn starting() -> Self {
		Self { multiplier: 1, s1: 0, s2: 0 }
	}

	/// # Update With One Sample.
	fn update(&mut self, sample: u32) {
		let u = self.multiplier.wrapping_mul(u64::from(sample));
		// Safe: truncation is the point; this takes the low 32 bits.
		#[expect(clippy::cast_possible_truncation, reason = "Intentional 32-bit wrap per the ARCS definition.")]
		{
			self.s1 = self.s1.wrapping_add(u as u32);
			self.s2 = self.s2.wrapping_add((u >> 32) as u32);
		}
		self.multiplier += 1;
	}

	/// # Finalize Into A `ChecksumSet`.
	fn finish(self, algorithm: Algorithm, length: u32) -> ChecksumSet {
		ChecksumSet {
			v1: algorithm.wants_v1().then_some(self.s1),
			v2: algorithm.wants_v2().then_some(self.s1.wrapping_add(self.s2)),
			length,
		}
	}
}



/// # Calculation.
///
/// A stateful, single-pass ARCSv1/v2 engine. Construct one per (ToC,
/// Algorithm) pair, feed it sample blocks via [`Calculation::update`] in
/// order, and once [`Calculation::complete`] is `true`, retrieve the
/// per-track checksums via [`Calculation::result`].
///
/// Feeding the same total sample stream split across any combination of
/// block sizes yields identical results — the running multiplier and
/// subtotals only depend on sample order, never on how it was chunked.
pub struct Calculation<'a> {
	/// # Table of Contents (Borrowed For The Calculation's Lifetime).
	toc: &'a ToC,
	/// # Requested Variant(s).
	algorithm: Algorithm,
	/// # Skip-Clipped Per-Track Sample Bounds.
	///
	/// Seeded from `toc` at construction, but revisable afterward via
	/// [`Calculation::update_audiosize`] — this, not `toc` itself, is the
	/// source of truth [`Calculation::update`] partitions against, so a
	/// revision actually takes effect.
	bounds: Vec<(u32, u32)>,
	/// # Leadout (Frames), If Known.
	///
	/// Mirrors `toc.leadout()` at construction and is updated in lockstep
	/// with `bounds` by `update_audiosize`. Used instead of `toc.leadout()`
	/// when computing the final track's effective length, for the same
	/// reason `bounds` shadows `toc`'s own per-track bounds.
	leadout: Option<u32>,
	/// # Running Subtotals For The Track In Progress.
	running: Subtotals,
	/// # Next Track Index (0-Based) Expected To Close.
	track_idx: usize,
	/// # Samples Consumed So Far, Within The Legal Range.
	processed: u32,
	/// # Total Samples In The Legal Range.
	total_relevant: u32,
	/// # Next Expected Stream-Absolute Sample Offset.
	next_offset: u32,
	/// # Completed Track Checksums.
	out: Checksums,
}

impl<'a> Calculation<'a> {
	#[must_use = "constructs a Result, which must be handled"]
	/// # New.
	///
	/// `toc` need not be complete yet — if its leadout is still unknown,
	/// the final track's trailing bound is left open until
	/// [`Calculation::update_audiosize`] supplies one. `toc` can also
	/// simply be complete as normal, in which case `update_audiosize` never
	/// needs to be called.
	///
	/// ## Errors
	///
	/// Infallible at present (kept as a `Result` for API stability).
	pub fn new(toc: &'a ToC, algorithm: Algorithm) -> Result<Self, Error> {
		let bounds = toc.track_bounds_open();
		// Safe: bounds is non-empty for any ToC (offsets can't be empty).
		// Wrapping avoids an overflow panic when the trailing placeholder
		// (u32::MAX, used while the leadout is still unknown) is present.
		let total_relevant = bounds[bounds.len() - 1].1.wrapping_sub(bounds[0].0).wrapping_add(1);

		Ok(Self {
			toc,
			algorithm,
			bounds,
			leadout: toc.leadout(),
			running: Subtotals::starting_track1(),
			track_idx: 0,
			processed: 0,
			total_relevant,
			next_offset: 0,
			out: Vec::with_capacity(toc.track_count() as usize),
		})
	}

	/// # Update Audio Size.
	///
	/// Revise the leadout used for the final track's trailing boundary
	/// (and hence the back-skip clip) when it wasn't known at
	/// construction time. Must be called before the last block is fed;
	/// calling it afterward is a logic error in the caller and is not
	/// guarded against here (see the crate's error handling design).
	///
	/// ## Errors
	///
	/// Returns [`Error::LeadoutSize`] if `leadout` doesn't leave at least
	/// `150` frames past the final track's offset, or exceeds
	/// [`crate::MAX_BLOCK_ADDRESS`].
	pub fn update_audiosize(&mut self, leadout: u32) -> Result<(), Error> {
		let offsets = self.toc.offsets();
		// Safe: bounds/offsets are non-empty per construction.
		let last_offset = offsets[offsets.len() - 1];
		if leadout < last_offset + crate::MIN_TRACK_LENGTH || leadout > crate::MAX_BLOCK_ADDRESS {
			return Err(Error::LeadoutSize);
		}

		let total_samples = leadout * SAMPLES_PER_FRAME;
		let last = self.bounds.len() - 1;
		self.bounds[last].1 = total_samples - 1 - BACK_SKIP_SAMPLES;
		self.total_relevant = self.bounds[self.bounds.len() - 1].1 - self.bounds[0].0 + 1;
		self.leadout = Some(leadout);
		Ok(())
	}

	#[must_use]
	/// # Complete?
	///
	/// True iff every sample in the legal range has been processed.
	pub const fn complete(&self) -> bool { self.processed == self.total_relevant }

	/// # Effective Length of Track (Frames).
	///
	/// Same arithmetic as [`ToC::effective_length`], but against this
	/// [`Calculation`]'s own (possibly revised) `leadout` rather than the
	/// borrowed `toc`'s original one.
	fn effective_length(&self, track: u8) -> u32 {
		let offsets = self.toc.offsets();
		let Some(idx) = usize::from(track).checked_sub(1) else { return 0; };
		if idx >= offsets.len() { return 0; }

		if idx + 1 < offsets.len() { offsets[idx + 1] - offsets[idx] }
		else { self.leadout.map_or(0, |l| l - offsets[idx]) }
	}

	/// # Update.
	///
	/// Process one incoming block of packed-stereo samples.
	///
	/// ## Errors
	///
	/// Infallible at present (kept as a `Result` for API stability;
	/// partitioning against this [`Calculation`]'s own bounds never
	/// fails).
	pub fn update(&mut self, samples: &[u32]) -> Result<(), Error> {
		// Safe: usize to u32 — samples.len() never approaches u32::MAX for
		// real CDDA streams (max disc length is ~264 million samples).
		#[expect(clippy::cast_possible_truncation, reason = "Block sizes never approach u32::MAX.")]
		let block_len = samples.len() as u32;
		let block_offset = self.next_offset;
		self.next_offset += block_len;

		let parts = partition_bounds(&self.bounds, block_offset, block_len);
		for part in parts {
			let local_start = (part.start() - block_offset) as usize;
			let local_end = (part.end() - block_offset) as usize;
			for &sample in &samples[local_start..=local_end] {
				self.running.update(sample);
			}
			self.processed += part.len();

			if part.ends_track() {
				log::trace!("track {} finished at sample {}", part.track(), part.end());
				let length = self.effective_length(part.track());
				let finished = std::mem::replace(&mut self.running, Subtotals::starting());
				self.out.push(finished.finish(self.algorithm, length));
				self.track_idx += 1;
			}
		}

		Ok(())
	}

	/// # Result.
	///
	/// ## Errors
	///
	/// Returns [`Error::Incomplete`] unless [`Calculation::complete`] is
	/// `true`.
	pub fn result(&self) -> Result<&Checksums, Error> {
		if self.complete() { Ok(&self.out) }
		else { Err(Error::Incomplete) }
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		make_toc,
		make_toc_with_lengths,
	};

	/// # Build A Deterministic Fake Sample Stream.
	fn fake_stream(total_samples: u32) -> Vec<u32> {
		(0..total_samples).map(|i| i.wrapping_mul(2_654_435_761)).collect()
	}

	#[test]
	fn t_single_vs_chunked_blocks_agree() {
		let toc = make_toc(2, vec![0, 100], 1000).unwrap();
		let total = toc.total_samples().unwrap();
		let samples = fake_stream(total);

		let mut one_shot = Calculation::new(&toc, Algorithm::V1V2).unwrap();
		one_shot.update(&samples).unwrap();
		assert!(one_shot.complete());
		let whole = one_shot.result().unwrap().clone();

		let mut chunked = Calculation::new(&toc, Algorithm::V1V2).unwrap();
		for chunk in samples.chunks(37) {
			chunked.update(chunk).unwrap();
		}
		assert!(chunked.complete());
		let split = chunked.result().unwrap().clone();

		assert_eq!(whole.len(), split.len());
		for (a, b) in whole.iter().zip(split.iter()) {
			assert_eq!(a.v1(), b.v1());
			assert_eq!(a.v2(), b.v2());
			assert_eq!(a.length(), b.length());
		}
	}

	#[test]
	fn t_incomplete_before_done() {
		let toc = make_toc(2, vec![0, 100], 1000).unwrap();
		let samples = fake_stream(toc.total_samples().unwrap());
		let mut calc = Calculation::new(&toc, Algorithm::V1).unwrap();
		calc.update(&samples[..50]).unwrap();
		assert!(! calc.complete());
		assert!(calc.result().is_err());
	}

	#[test]
	fn t_algorithm_gating() {
		let toc = make_toc(1, vec![0], 1000).unwrap();
		let samples = fake_stream(toc.total_samples().unwrap());

		let mut v1_only = Calculation::new(&toc, Algorithm::V1).unwrap();
		v1_only.update(&samples).unwrap();
		let set = &v1_only.result().unwrap()[0];
		assert!(set.v1().is_some());
		assert!(set.v2().is_none());

		let mut v2_only = Calculation::new(&toc, Algorithm::V2).unwrap();
		v2_only.update(&samples).unwrap();
		let set = &v2_only.result().unwrap()[0];
		assert!(set.v1().is_none());
		assert!(set.v2().is_some());
	}

	#[test]
	fn t_incomplete_toc_then_update_audiosize() {
		// Leadout isn't known until after the fact, as when streaming from
		// a source that only reports total length once it's exhausted.
		let toc = make_toc_with_lengths(2, vec![100, 100], None).unwrap();
		assert!(! toc.is_complete());

		let leadout = 1000;
		let complete = make_toc(2, vec![0, 100], leadout).unwrap();
		let samples = fake_stream(complete.total_samples().unwrap());

		let mut calc = Calculation::new(&toc, Algorithm::V1V2).unwrap();
		// Feed everything up to (but well short of) the back-skip region
		// while the leadout is still unknown, then learn it, then feed the
		// remainder — which is where the back-skip clip actually lands.
		let split = samples.len() - 5000;
		calc.update(&samples[..split]).unwrap();
		assert!(! calc.complete());

		calc.update_audiosize(leadout).unwrap();
		calc.update(&samples[split..]).unwrap();
		assert!(calc.complete());

		let result = calc.result().unwrap();
		assert_eq!(result.len(), 2);

		// Confirm it agrees with a Calculation built from the complete ToC
		// from the start.
		let mut reference = Calculation::new(&complete, Algorithm::V1V2).unwrap();
		reference.update(&samples).unwrap();
		let reference = reference.result().unwrap();

		for (a, b) in result.iter().zip(reference.iter()) {
			assert_eq!(a.v1(), b.v1());
			assert_eq!(a.v2(), b.v2());
			assert_eq!(a.length(), b.length());
		}
	}
}
