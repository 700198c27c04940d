/*!
# AccurateRip Core: Verifier

Compares locally computed [`crate::Checksums`] against reference data —
typically a parsed [`crate::Dbar`] — under one of two canonical policy
combinations, [`AlbumVerifier`] or [`TracksetVerifier`], both built on top
of the shared [`Verifier`] engine.
*/

use crate::{
	ArId,
	Checksums,
	Dbar,
	Error,
	id::from_parts,
	make_empty_arid,
};
use std::ops::{Deref, DerefMut, Range};

/// # Maximum Possible Block Difference.
///
/// 99 tracks plus the id flag.
pub const MAX_DIFFERENCE: u32 = 100;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Traversal Policy.
///
/// Chooses which dimension of the reference store is the outer loop
/// during [`Verifier::verify`]. Affects only iteration order, never which
/// pairs get compared or the resulting [`VerificationResult`].
pub enum TraversalPolicy {
	/// # One Reference Block At A Time, Tracks `0..T` Within It.
	Block,
	/// # One Track Index At A Time, Blocks `0..B` Within It.
	Track,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Match Policy.
pub enum MatchPolicy {
	/// # Compare `actual[t]` Against `reference[block, t]` Only.
	Positional,
	/// # Compare Every `actual[t']` Against `reference[block, t]`.
	FindAny,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Track Policy.
///
/// Defines when a track counts as "verified" over the result matrix.
/// Switching this only affects `is_matched`/`all_tracks_match` queries,
/// never the underlying flag matrix.
pub enum TrackPolicy {
	/// # Verified Iff Set In The Best Block (See [`best_block`]).
	Strict,
	/// # Verified Iff Set For Either Variant In Any Block.
	Liberal,
}



/// # Checksum Source.
///
/// Unified read access to a reference checksum container, indexed by
/// block and by track within a block. [`Dbar`] implements this directly;
/// [`Checksums`] implements it too, presented as two single-block
/// "sources" (one exposing ARCSv1 values, one ARCSv2) with no id of its
/// own — useful for diffing two locally computed results against each
/// other without going through the wire format.
pub trait ChecksumSource {
	/// # Total Number of Blocks.
	fn total_blocks(&self) -> usize;

	/// # Tracks In The Given Block.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	fn tracks_per_block(&self, block: usize) -> Result<usize, Error>;

	/// # Reference Id For The Given Block.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	fn id(&self, block: usize) -> Result<ArId, Error>;

	/// # Reference ARCS For `(block, track)`.
	///
	/// A single dBAR triplet carries one ARCS value; whether it represents
	/// ARCSv1 or ARCSv2 isn't recorded anywhere in the wire format, so
	/// callers compare it against both of the actual side's variants.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` or `track` is out of range.
	fn checksum(&self, block: usize, track: usize) -> Result<u32, Error>;

	/// # Confidence For `(block, track)`.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` or `track` is out of range.
	fn confidence(&self, block: usize, track: usize) -> Result<u8, Error>;
}

impl ChecksumSource for Dbar {
	fn total_blocks(&self) -> usize { self.len() }

	fn tracks_per_block(&self, block: usize) -> Result<usize, Error> {
		self.size(block).map(usize::from)
	}

	fn id(&self, block: usize) -> Result<ArId, Error> {
		let h = self.header(block)?;
		Ok(from_parts(h.total_tracks(), h.id1(), h.id2(), h.cddb_id()))
	}

	fn checksum(&self, block: usize, track: usize) -> Result<u32, Error> {
		self.triplet(block, track).map(|t| t.arcs())
	}

	fn confidence(&self, block: usize, track: usize) -> Result<u8, Error> {
		self.triplet(block, track).map(|t| t.confidence())
	}
}

impl ChecksumSource for Checksums {
	fn total_blocks(&self) -> usize { 2 }

	fn tracks_per_block(&self, block: usize) -> Result<usize, Error> {
		if block < 2 { Ok(self.len()) } else { Err(Error::Domain) }
	}

	fn id(&self, block: usize) -> Result<ArId, Error> {
		if block < 2 { Ok(make_empty_arid()) } else { Err(Error::Domain) }
	}

	fn checksum(&self, block: usize, track: usize) -> Result<u32, Error> {
		let set = self.get(track).ok_or(Error::Domain)?;
		match block {
			0 => set.v1().ok_or(Error::Domain),
			1 => set.v2().ok_or(Error::Domain),
			_ => Err(Error::Domain),
		}
	}

	fn confidence(&self, block: usize, track: usize) -> Result<u8, Error> {
		if block < 2 && track < self.len() { Ok(0) } else { Err(Error::Domain) }
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Verification Result.
///
/// A flat boolean flag store over `(block, track, {v1,v2})` plus one id
/// flag per block, laid out as a single `Vec<bool>` of length
/// `blocks · (2 · tracks_per_block + 1)`. Block `b` occupies indices
/// `[b·(2T+1), (b+1)·(2T+1))`; within a block, offset `0` is the id flag,
/// `[1, T+1)` are the v1 track flags, `[T+1, 2T+1)` are the v2 track
/// flags. This layout is part of the public contract.
pub struct VerificationResult {
	/// # Tracks Per Block.
	tracks_per_block: usize,
	/// # Flat Flag Store.
	flags: Vec<bool>,
}

impl VerificationResult {
	/// # New, All Flags Clear.
	fn new(blocks: usize, tracks_per_block: usize) -> Self {
		Self { tracks_per_block, flags: vec![false; blocks * (2 * tracks_per_block + 1)] }
	}

	/// # Stride Of One Block.
	const fn stride(&self) -> usize { 2 * self.tracks_per_block + 1 }

	/// # Check Bounds, Return The Block's Base Index.
	fn block_base(&self, block: usize) -> Result<usize, Error> {
		if block < self.total_blocks() { Ok(block * self.stride()) } else { Err(Error::Domain) }
	}

	/// # Mark The Id Flag Of `block`.
	fn set_id(&mut self, block: usize, value: bool) -> Result<(), Error> {
		let base = self.block_base(block)?;
		self.flags[base] = value;
		Ok(())
	}

	#[must_use = "ignoring a fallible accessor's Result silently discards errors"]
	/// # Id Flag Of `block`.
	///
	/// `true` iff the reference id of `block` matched the id being
	/// verified against.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	pub fn id(&self, block: usize) -> Result<bool, Error> {
		let base = self.block_base(block)?;
		Ok(self.flags[base])
	}

	/// # Mark A Track Flag.
	fn set_track(&mut self, block: usize, track: usize, v2: bool, value: bool) -> Result<(), Error> {
		if track >= self.tracks_per_block { return Err(Error::Domain); }
		let base = self.block_base(block)?;
		let offset = 1 + usize::from(v2) * self.tracks_per_block + track;
		self.flags[base + offset] = value;
		Ok(())
	}

	#[must_use = "ignoring a fallible accessor's Result silently discards errors"]
	/// # Track Flag For `(block, track, v2)`.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` or `track` is out of range.
	pub fn track(&self, block: usize, track: usize, v2: bool) -> Result<bool, Error> {
		if track >= self.tracks_per_block { return Err(Error::Domain); }
		let base = self.block_base(block)?;
		let offset = 1 + usize::from(v2) * self.tracks_per_block + track;
		Ok(self.flags[base + offset])
	}

	#[must_use = "ignoring a fallible accessor's Result silently discards errors"]
	/// # Difference Of `block` For Variant `v2`.
	///
	/// The count of reference ARCSs in `block` that failed to match their
	/// corresponding actual track, plus `1` unless the block's id flag is
	/// set.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	pub fn difference(&self, block: usize, v2: bool) -> Result<u32, Error> {
		let id_ok = self.id(block)?;
		let mut diff = u32::from(! id_ok);
		for t in 0..self.tracks_per_block {
			// Safe: t is always in range here.
			if ! self.track(block, t, v2).unwrap_or(false) { diff += 1; }
		}
		Ok(diff)
	}

	#[must_use]
	/// # Total Number of Analyzed Blocks.
	pub fn total_blocks(&self) -> usize {
		if self.stride() == 0 { 0 } else { self.flags.len() / self.stride() }
	}

	#[must_use]
	/// # Tracks Per Block.
	pub const fn tracks_per_block(&self) -> usize { self.tracks_per_block }

	#[must_use]
	/// # Number of Flags Stored.
	pub fn size(&self) -> usize { self.flags.len() }
}

#[must_use = "best_block returns a Result, which must be handled"]
/// # Identify The Best-Matching Block.
///
/// Scans every `(block, variant)` pair and returns the one minimizing
/// [`VerificationResult::difference`], as `(block, is_v2, difference)`.
/// Ties are broken toward the higher variant (ARCSv2 over ARCSv1) and,
/// among equal differences, toward the later block in iteration order.
///
/// ## Errors
///
/// Returns [`Error::Domain`] if `result` has zero blocks.
pub fn best_block(result: &VerificationResult) -> Result<(usize, bool, u32), Error> {
	let total = result.total_blocks();
	if total == 0 { return Err(Error::Domain); }

	let mut best = (0_usize, false, MAX_DIFFERENCE + 1);
	for block in 0..total {
		for v2 in [false, true] {
			let d = result.difference(block, v2)?;
			if d <= best.2 { best = (block, v2, d); }
		}
	}

	Ok(best)
}



/// # Verifier.
///
/// The shared engine behind [`AlbumVerifier`] and [`TracksetVerifier`]: a
/// set of actual [`Checksums`] plus an id to verify against, driven
/// through one of three orthogonal policies. There is no state machine
/// beyond constructed → [`Verifier::verify`] → query the result freely.
pub struct Verifier {
	/// # Actual (Locally Computed) Checksums.
	actual: Checksums,
	/// # Actual Id To Compare Against Reference Blocks.
	actual_id: ArId,
	/// # Traversal Order (Iteration Only; Doesn't Affect The Result).
	traversal: TraversalPolicy,
	/// # Match Policy.
	match_policy: MatchPolicy,
	/// # Track Policy.
	track_policy: TrackPolicy,
	/// # Result, Once [`Verifier::verify`] Has Run.
	result: Option<VerificationResult>,
}

impl Verifier {
	/// # New.
	const fn new(
		actual: Checksums,
		actual_id: ArId,
		match_policy: MatchPolicy,
		track_policy: TrackPolicy,
	) -> Self {
		Self {
			actual,
			actual_id,
			traversal: TraversalPolicy::Block,
			match_policy,
			track_policy,
			result: None,
		}
	}

	/// # Set Traversal Policy.
	///
	/// Affects only iteration order during [`Verifier::verify`]; the
	/// resulting [`VerificationResult`] is identical either way.
	pub fn set_traversal(&mut self, traversal: TraversalPolicy) { self.traversal = traversal; }

	/// # Set Strictness.
	///
	/// `true` selects [`TrackPolicy::Strict`], `false`
	/// [`TrackPolicy::Liberal`]. Only affects `is_matched`/
	/// `all_tracks_match`/`total_unmatched_tracks`, never the flag matrix
	/// itself.
	pub fn set_strict(&mut self, strict: bool) {
		self.track_policy = if strict { TrackPolicy::Strict } else { TrackPolicy::Liberal };
	}

	/// # Verify Against A Reference Source.
	///
	/// Populates the internal [`VerificationResult`]; re-running replaces
	/// it.
	///
	/// ## Errors
	///
	/// Propagates any [`Error::Domain`] raised while indexing `source`.
	pub fn verify<S: ChecksumSource>(&mut self, source: &S) -> Result<(), Error> {
		let total_blocks = source.total_blocks();
		let tracks_per_block = if total_blocks == 0 { 0 } else { source.tracks_per_block(0)? };
		let mut result = VerificationResult::new(total_blocks, tracks_per_block);

		// Every (block, track) pair is visited exactly once regardless of
		// which dimension drives the outer loop, so the resulting flags are
		// identical either way; what differs is genuinely the traversal
		// order, not just its label.
		match self.traversal {
			TraversalPolicy::Block => {
				for block in 0..total_blocks {
					self.verify_block(source, &mut result, block, 0..tracks_per_block)?;
				}
			},
			TraversalPolicy::Track => {
				for t in 0..tracks_per_block {
					for block in 0..total_blocks {
						self.verify_block(source, &mut result, block, t..t + 1)?;
					}
				}
			},
		}

		self.result = Some(result);
		Ok(())
	}

	/// # Verify One Block's Id, Plus The Given Slice Of Its Tracks.
	///
	/// Shared by both traversal orders in [`Verifier::verify`]: block-major
	/// calls this once per block with the full track range, track-major
	/// calls it once per `(track, block)` pair with a single-track range.
	/// The id flag is (re)written every call regardless — harmless, since
	/// setting it is idempotent.
	fn verify_block<S: ChecksumSource>(
		&self,
		source: &S,
		result: &mut VerificationResult,
		block: usize,
		tracks: Range<usize>,
	) -> Result<(), Error> {
		let ref_id = source.id(block)?;
		let id_matches = self.actual_id.is_empty() || ref_id == self.actual_id;
		result.set_id(block, id_matches)?;

		if matches!(self.match_policy, MatchPolicy::Positional) && ! id_matches {
			return Ok(());
		}

		let block_tracks = source.tracks_per_block(block)?.min(result.tracks_per_block());
		for t in tracks {
			if t >= block_tracks { continue; }
			let ref_val = source.checksum(block, t)?;

			match self.match_policy {
				MatchPolicy::Positional => {
					if let Some(set) = self.actual.get(t) {
						if set.v1() == Some(ref_val) { result.set_track(block, t, false, true)?; }
						if set.v2() == Some(ref_val) { result.set_track(block, t, true, true)?; }
					}
				},
				MatchPolicy::FindAny => {
					for set in &self.actual {
						if set.v1() == Some(ref_val) { result.set_track(block, t, false, true)?; }
						if set.v2() == Some(ref_val) { result.set_track(block, t, true, true)?; }
					}
				},
			}
		}

		Ok(())
	}

	#[must_use]
	/// # Result.
	pub const fn result(&self) -> Option<&VerificationResult> { self.result.as_ref() }

	/// # Is Track `track` (0-Based) Verified?
	///
	/// Returns `false` if [`Verifier::verify`] hasn't run yet.
	#[must_use]
	pub fn is_matched(&self, track: usize) -> bool {
		let Some(result) = &self.result else { return false; };
		if track >= result.tracks_per_block() { return false; }

		match self.track_policy {
			TrackPolicy::Strict => {
				let Ok((block, v2, _)) = best_block(result) else { return false; };
				result.track(block, track, v2).unwrap_or(false)
			},
			TrackPolicy::Liberal => {
				(0..result.total_blocks()).any(|b| {
					result.track(b, track, false).unwrap_or(false)
						|| result.track(b, track, true).unwrap_or(false)
				})
			},
		}
	}

	#[must_use]
	/// # Do All Tracks Verify?
	pub fn all_tracks_match(&self) -> bool {
		let Some(result) = &self.result else { return false; };
		(0..result.tracks_per_block()).all(|t| self.is_matched(t))
	}

	#[must_use]
	/// # Count Of Unverified Tracks.
	pub fn total_unmatched_tracks(&self) -> usize {
		let Some(result) = &self.result else { return 0; };
		(0..result.tracks_per_block()).filter(|&t| ! self.is_matched(t)).count()
	}

	#[must_use]
	/// # Best Block, If Verified.
	pub fn best_block(&self) -> Option<(usize, bool, u32)> {
		self.result.as_ref().and_then(|r| best_block(r).ok())
	}

	#[must_use]
	/// # Best Block's Difference, If Verified.
	pub fn best_block_difference(&self) -> Option<u32> {
		self.best_block().map(|(_, _, d)| d)
	}
}



/// # Album Verifier.
///
/// Positional matching against an actual [`ArId`]: track `t` is only ever
/// compared against reference track `t`, and a block whose id doesn't
/// match the actual id has its track comparisons skipped entirely.
/// Defaults to strict track policy.
pub struct AlbumVerifier(Verifier);

impl AlbumVerifier {
	#[must_use]
	/// # New.
	pub const fn new(actual: Checksums, actual_id: ArId) -> Self {
		Self(Verifier::new(actual, actual_id, MatchPolicy::Positional, TrackPolicy::Strict))
	}
}

impl Deref for AlbumVerifier {
	type Target = Verifier;
	fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for AlbumVerifier {
	fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}



/// # Trackset Verifier.
///
/// Find-any matching with no actual id: every reference block's id flag
/// is forced true (there's nothing to compare it against), and a
/// reference checksum matches if *any* actual track carries the same
/// value, regardless of position. Useful when track order in the actual
/// rip is unknown or unreliable. Defaults to strict track policy.
pub struct TracksetVerifier(Verifier);

impl TracksetVerifier {
	#[must_use]
	/// # New.
	pub const fn new(actual: Checksums) -> Self {
		Self(Verifier::new(actual, make_empty_arid(), MatchPolicy::FindAny, TrackPolicy::Strict))
	}
}

impl Deref for TracksetVerifier {
	type Target = Verifier;
	fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for TracksetVerifier {
	fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::checksum::ChecksumSet;
	use crate::dbar::{ContentHandler, DbarBlockHeader, DbarBuilder, DbarTriplet};

	/// # Build A Dbar From `(id1, id2, cddb_id, [(confidence, arcs)])` Blocks.
	fn fixture_dbar(blocks: &[(u32, u32, u32, &[(u8, u32)])]) -> Dbar {
		let mut builder = DbarBuilder::new();
		for (block, &(id1, id2, cddb_id, triplets)) in blocks.iter().enumerate() {
			// Safe: test fixtures never exceed u8::MAX tracks.
			#[expect(clippy::cast_possible_truncation, reason = "Test fixtures use small track counts.")]
			let total_tracks = triplets.len() as u8;
			builder.header(DbarBlockHeader::test_only(total_tracks, id1, id2, cddb_id));
			for &(confidence, arcs) in triplets {
				builder.triplet(DbarTriplet::test_only(confidence, arcs, 0), true, true);
			}
			// Safe: block count in these fixtures never approaches u32::MAX.
			#[expect(clippy::cast_possible_truncation, reason = "Test fixtures use few blocks.")]
			builder.end_block(block as u32 + 1);
		}
		builder.result()
	}

	/// # Fifteen Actual Checksum Sets, ARCSv1 = Track Index, ARCSv2 = Track Index + 1000.
	fn fifteen_actual() -> Checksums {
		(0..15_u32).map(|i| ChecksumSet::test_only(i, i + 1000, 1000)).collect()
	}

	#[test]
	fn t_scenario_d_strict_album_verify() {
		let actual = fifteen_actual();
		let actual_id = from_parts(15, 0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC);

		// Block 0: same id, ARCS equal actual's v1 values.
		let block0: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i)).collect();
		// Block 1: same id, ARCS equal actual's v2 values.
		let block1: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i + 1000)).collect();
		// Block 2: a different id entirely, garbage ARCS.
		let block2: Vec<(u8, u32)> = (0..15_u32).map(|_| (0, 0xDEAD_BEEF)).collect();

		let dbar = fixture_dbar(&[
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block0),
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block1),
			(0x1111_1111, 0x2222_2222, 0x3333_3333, &block2),
		]);

		let mut verifier = AlbumVerifier::new(actual, actual_id);
		verifier.verify(&dbar).unwrap();
		let result = verifier.result().unwrap();

		assert_eq!(result.size(), 93);
		assert_eq!(result.difference(0, false).unwrap(), 0);
		assert_eq!(result.difference(0, true).unwrap(), 15);
		assert_eq!(result.difference(1, false).unwrap(), 15);
		assert_eq!(result.difference(1, true).unwrap(), 0);
		assert_eq!(result.difference(2, false).unwrap(), 16);
		assert_eq!(result.difference(2, true).unwrap(), 16);

		assert_eq!(verifier.best_block(), Some((1, true, 0)));
		assert!(verifier.all_tracks_match());
	}

	#[test]
	fn t_scenario_e_trackset_verify_shuffled() {
		let mut actual = fifteen_actual();
		// Shuffle deterministically (reverse) to simulate reordered rip output.
		// Find-any matching only cares which values are present among the
		// actual set, not their position, so this should change nothing.
		actual.reverse();

		// Block 0: a distractor that matches nothing.
		let block0: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i + 5000)).collect();
		// Block 1: carries a matching id but ARCS equal to actual's v1 set.
		let block1: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i)).collect();
		// Block 2: a *mismatching* id, yet its ARCS equal actual's v2 set —
		// exactly the case an AlbumVerifier would wrongly skip over.
		let block2: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i + 1000)).collect();

		let dbar = fixture_dbar(&[
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block0),
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block1),
			(0x1111_1111, 0x2222_2222, 0x3333_3333, &block2),
		]);

		let mut verifier = TracksetVerifier::new(actual);
		verifier.verify(&dbar).unwrap();
		let result = verifier.result().unwrap();

		// Find-any ignores the reference id entirely; every block's id flag
		// is forced true regardless of what the header actually carries.
		assert!(result.id(0).unwrap());
		assert!(result.id(1).unwrap());
		assert!(result.id(2).unwrap());
		assert_eq!(result.difference(1, false).unwrap(), 0);
		assert_eq!(result.difference(2, true).unwrap(), 0);

		assert_eq!(verifier.best_block(), Some((2, true, 0)));
		assert!(verifier.all_tracks_match());

		verifier.set_strict(false);
		assert!(verifier.all_tracks_match());
	}

	#[test]
	fn t_verification_result_layout() {
		let mut r = VerificationResult::new(2, 3);
		assert_eq!(r.size(), 2 * (2 * 3 + 1));
		r.set_id(0, true).unwrap();
		r.set_track(0, 1, false, true).unwrap();
		r.set_track(0, 2, true, true).unwrap();
		assert!(r.id(0).unwrap());
		assert!(! r.id(1).unwrap());
		assert!(r.track(0, 1, false).unwrap());
		assert!(! r.track(0, 0, false).unwrap());
		assert!(r.track(0, 2, true).unwrap());
		assert!(r.track(1, 0, false).is_ok());
		assert!(r.id(2).is_err());
	}

	#[test]
	fn t_traversal_policy_agrees() {
		let actual = fifteen_actual();
		let actual_id = from_parts(15, 0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC);

		let block0: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i)).collect();
		let block1: Vec<(u8, u32)> = (0..15_u32).map(|i| (50, i + 1000)).collect();
		let dbar = fixture_dbar(&[
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block0),
			(0xAAAA_AAAA, 0xBBBB_BBBB, 0xCCCC_CCCC, &block1),
		]);

		let mut by_block = AlbumVerifier::new(actual.clone(), actual_id);
		by_block.verify(&dbar).unwrap();

		let mut by_track = AlbumVerifier::new(actual, actual_id);
		by_track.set_traversal(TraversalPolicy::Track);
		by_track.verify(&dbar).unwrap();

		let (ra, rb) = (by_block.result().unwrap(), by_track.result().unwrap());
		assert_eq!(ra, rb);
	}

	#[test]
	fn t_difference_and_best_block() {
		let mut r = VerificationResult::new(2, 2);
		r.set_id(0, true).unwrap();
		r.set_track(0, 0, false, true).unwrap();
		r.set_track(0, 1, false, true).unwrap();
		// block 0, v1: id ok + both tracks -> difference 0
		assert_eq!(r.difference(0, false).unwrap(), 0);
		// block 0, v2: id ok but no v2 track flags -> difference 2
		assert_eq!(r.difference(0, true).unwrap(), 2);
		// block 1: id not set, no tracks -> difference 3
		assert_eq!(r.difference(1, false).unwrap(), 3);

		let (block, v2, diff) = best_block(&r).unwrap();
		assert_eq!(block, 0);
		assert!(! v2);
		assert_eq!(diff, 0);
	}
}
