/*!
# AccurateRip Core: dBAR Codec

Streaming (SAX-style) parser for the binary AccurateRip HTTP response
format, a builder [`ContentHandler`] that materializes a [`Dbar`], and a
default [`ErrorHandler`] that re-raises the crate's structured parse
error.
*/

use crate::{ArId, Error};
use std::collections::BTreeMap;
use std::io::Read;

/// # Header Size (Bytes).
const HEADER_LEN: usize = 13;

/// # Triplet Size (Bytes).
const TRIPLET_LEN: usize = 9;

#[must_use]
/// # Is Valid ARCS?
///
/// True iff `v` is non-zero; `0` is the sentinel AccurateRip uses for "no
/// value parsed here".
pub const fn is_valid_arcs(v: u32) -> bool { v > 0 }

#[must_use]
/// # Is Valid Confidence?
pub const fn is_valid_confidence(v: u8) -> bool { v > 0 }



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # dBAR Block Header.
///
/// `(total_tracks, id1, id2, cddb_id)` — the thirteen bytes every dBAR
/// block opens with.
pub struct DbarBlockHeader {
	/// # Total Tracks Declared.
	total_tracks: u8,
	/// # Disc ID 1.
	id1: u32,
	/// # Disc ID 2.
	id2: u32,
	/// # CDDB ID.
	cddb_id: u32,
}

impl DbarBlockHeader {
	#[must_use]
	/// # Total Tracks Declared.
	pub const fn total_tracks(&self) -> u8 { self.total_tracks }

	#[must_use]
	/// # Disc ID 1.
	pub const fn id1(&self) -> u32 { self.id1 }

	#[must_use]
	/// # Disc ID 2.
	pub const fn id2(&self) -> u32 { self.id2 }

	#[must_use]
	/// # CDDB ID.
	pub const fn cddb_id(&self) -> u32 { self.cddb_id }

	#[cfg(test)]
	/// # Build Directly (Test Fixtures Only).
	pub(crate) const fn test_only(total_tracks: u8, id1: u32, id2: u32, cddb_id: u32) -> Self {
		Self { total_tracks, id1, id2, cddb_id }
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # dBAR Triplet.
///
/// One track's reference record within a block: `(arcs, confidence,
/// frame450_arcs)`.
pub struct DbarTriplet {
	/// # Confidence.
	confidence: u8,
	/// # ARCS.
	arcs: u32,
	/// # ARCS of Frame 450.
	frame450_arcs: u32,
}

impl DbarTriplet {
	#[must_use]
	/// # Confidence.
	pub const fn confidence(&self) -> u8 { self.confidence }

	#[must_use]
	/// # ARCS.
	pub const fn arcs(&self) -> u32 { self.arcs }

	#[must_use]
	/// # ARCS of Frame 450.
	pub const fn frame450_arcs(&self) -> u32 { self.frame450_arcs }

	#[cfg(test)]
	/// # Build Directly (Test Fixtures Only).
	pub(crate) const fn test_only(confidence: u8, arcs: u32, frame450_arcs: u32) -> Self {
		Self { confidence, arcs, frame450_arcs }
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # dBAR.
///
/// An ordered sequence of blocks, stored as three flat arrays rather than
/// a `Vec` of owned block structs: `total_tracks[b]` gives block `b`'s
/// track count, `confidences` is indexed by cumulative track offset
/// across all blocks, and `sums` packs each block's header ids followed
/// by its `(arcs, frame450_arcs)` pairs. This keeps [`Dbar::size`] and
/// indexed access O(1) without per-block heap allocations.
///
/// Produced by parsing via [`parse_stream`] and a [`DbarBuilder`]; a
/// [`Dbar`] owns its data outright, while [`DbarBlock`] is a non-owning
/// view bound to one.
pub struct Dbar {
	/// # Declared Track Count, Per Block.
	total_tracks: Vec<u8>,
	/// # Confidences, Flat-Indexed By Cumulative Track Offset.
	confidences: Vec<u8>,
	/// # Header Ids + ARCS Pairs, Flat-Packed Per Block.
	sums: Vec<u32>,
	/// # Start Offset Into `sums` For Each Block.
	sum_offsets: Vec<usize>,
	/// # Start Offset Into `confidences` For Each Block.
	track_offsets: Vec<usize>,
}

impl Dbar {
	#[must_use]
	/// # Number of Blocks.
	pub fn len(&self) -> usize { self.total_tracks.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.total_tracks.is_empty() }

	/// # Track Count Of Block `block`.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	pub fn size(&self, block: usize) -> Result<u8, Error> {
		self.total_tracks.get(block).copied().ok_or(Error::Domain)
	}

	/// # Header Of Block `block`.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	pub fn header(&self, block: usize) -> Result<DbarBlockHeader, Error> {
		let off = *self.sum_offsets.get(block).ok_or(Error::Domain)?;
		Ok(DbarBlockHeader {
			total_tracks: self.total_tracks[block],
			id1: self.sums[off],
			id2: self.sums[off + 1],
			cddb_id: self.sums[off + 2],
		})
	}

	/// # Triplet For `(block, track)`.
	///
	/// `track` is 0-based.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` or `track` is out of range.
	pub fn triplet(&self, block: usize, track: usize) -> Result<DbarTriplet, Error> {
		let tt = usize::from(self.size(block)?);
		if track >= tt { return Err(Error::Domain); }

		let sum_off = self.sum_offsets[block] + 3 + track * 2;
		let conf_off = self.track_offsets[block] + track;
		Ok(DbarTriplet {
			confidence: self.confidences[conf_off],
			arcs: self.sums[sum_off],
			frame450_arcs: self.sums[sum_off + 1],
		})
	}

	/// # Block View.
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `block` is out of range.
	pub fn block(&self, block: usize) -> Result<DbarBlock<'_>, Error> {
		if block < self.len() { Ok(DbarBlock { dbar: self, idx: block }) }
		else { Err(Error::Domain) }
	}

	/// # Iterate Blocks.
	pub fn blocks(&self) -> impl Iterator<Item = DbarBlock<'_>> {
		(0..self.len()).map(move |idx| DbarBlock { dbar: self, idx })
	}
}



#[derive(Debug, Clone, Copy)]
/// # dBAR Block (Borrowed View).
///
/// A non-owning view bound to a [`Dbar`] and a block index; its lifetime
/// must not exceed the [`Dbar`] it was produced from.
pub struct DbarBlock<'a> {
	/// # Parent.
	dbar: &'a Dbar,
	/// # Block Index.
	idx: usize,
}

impl DbarBlock<'_> {
	#[must_use]
	/// # Header.
	pub fn header(&self) -> DbarBlockHeader {
		// Safe: constructed only via `Dbar::block`/`Dbar::blocks`, which
		// only ever hand out in-range indices.
		self.dbar.header(self.idx).unwrap_or_else(|_| unreachable!())
	}

	#[must_use]
	/// # Track Count.
	pub fn size(&self) -> u8 {
		self.dbar.size(self.idx).unwrap_or_else(|_| unreachable!())
	}

	/// # Triplet For `track` (0-Based).
	///
	/// ## Errors
	///
	/// Returns [`Error::Domain`] if `track` is out of range.
	pub fn triplet(&self, track: usize) -> Result<DbarTriplet, Error> {
		self.dbar.triplet(self.idx, track)
	}

	#[must_use]
	/// # Iterate Triplets.
	pub fn triplets(&self) -> impl Iterator<Item = DbarTriplet> + '_ {
		(0..usize::from(self.size())).map(move |t| self.triplet(t).unwrap_or_else(|_| unreachable!()))
	}
}



/// # Content Handler.
///
/// SAX-style callbacks driven by [`parse_stream`]. Every method has a
/// no-op default; implementors override only what they need.
/// [`DbarBuilder`] is the reference implementation — it materializes a
/// [`Dbar`].
pub trait ContentHandler {
	/// # Stream Started.
	fn start_input(&mut self) {}

	/// # Block Started (1-Based Block Number).
	fn start_block(&mut self, _block: u32) {}

	/// # Header Parsed.
	fn header(&mut self, _header: DbarBlockHeader) {}

	/// # Triplet Parsed (Or Partially Parsed).
	///
	/// `valid_arcs`/`valid_frame450` are `true` iff all four bytes of that
	/// field were actually read from the stream — distinct from
	/// [`is_valid_arcs`], which instead tests whether a fully-read value is
	/// non-zero.
	fn triplet(&mut self, _triplet: DbarTriplet, _valid_arcs: bool, _valid_frame450: bool) {}

	/// # Block Ended (1-Based Block Number).
	fn end_block(&mut self, _block: u32) {}

	/// # Stream Ended.
	fn end_input(&mut self) {}
}

/// # Error Handler.
///
/// Invoked by [`parse_stream`] before it raises a
/// [`Error::StreamParse`]; implementors may swallow or transform the
/// error. The default ([`DefaultErrorHandler`]) simply re-raises it.
pub trait ErrorHandler {
	/// # On Error.
	///
	/// ## Errors
	///
	/// Returning `Err` aborts parsing with that error; returning `Ok(())`
	/// tells [`parse_stream`] to stop cleanly instead (any bytes
	/// already consumed still count toward its returned total).
	fn on_error(&mut self, byte_pos: u64, block: u32, block_byte_pos: u32) -> Result<(), Error>;
}

/// # Default Error Handler.
///
/// Always re-raises via [`Error::StreamParse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl ErrorHandler for DefaultErrorHandler {
	fn on_error(&mut self, byte_pos: u64, block: u32, block_byte_pos: u32) -> Result<(), Error> {
		Err(Error::StreamParse { byte_pos, block, block_byte_pos })
	}
}



#[derive(Debug, Clone, Default)]
/// # dBAR Builder.
///
/// The reference [`ContentHandler`]: accumulates parsed blocks into the
/// three-array representation a [`Dbar`] wraps.
///
/// A block is only committed into the finalized arrays on `end_block` —
/// which [`parse_stream`] does not call for a block that failed to parse in
/// full (see `§4.6`) — so a truncated final block never appears in the
/// resulting [`Dbar`] even though its header (and any partial triplet) were
/// still forwarded to this handler first.
pub struct DbarBuilder {
	/// # Declared Track Count, Per Block (Committed).
	total_tracks: Vec<u8>,
	/// # Confidences, Flat-Indexed (Committed).
	confidences: Vec<u8>,
	/// # Header Ids + ARCS Pairs, Flat-Packed (Committed).
	sums: Vec<u32>,
	/// # Start Offset Into `sums` For Each Committed Block.
	sum_offsets: Vec<usize>,
	/// # Start Offset Into `confidences` For Each Committed Block.
	track_offsets: Vec<usize>,

	/// # In-Progress Block's Declared Track Count.
	staged_total_tracks: Option<u8>,
	/// # In-Progress Block's Header Ids + ARCS Pairs.
	staged_sums: Vec<u32>,
	/// # In-Progress Block's Confidences.
	staged_confidences: Vec<u8>,
}

impl ContentHandler for DbarBuilder {
	fn header(&mut self, header: DbarBlockHeader) {
		self.staged_total_tracks = Some(header.total_tracks);
		self.staged_sums.clear();
		self.staged_confidences.clear();
		self.staged_sums.extend_from_slice(&[header.id1, header.id2, header.cddb_id]);
	}

	fn triplet(&mut self, triplet: DbarTriplet, _valid_arcs: bool, _valid_frame450: bool) {
		self.staged_confidences.push(triplet.confidence);
		self.staged_sums.push(triplet.arcs);
		self.staged_sums.push(triplet.frame450_arcs);
	}

	fn end_block(&mut self, _block: u32) {
		// A block only lands here once it has fully parsed; a truncated
		// block's staged data is simply left to be overwritten (or dropped
		// along with the builder).
		let Some(total_tracks) = self.staged_total_tracks.take() else { return; };
		self.sum_offsets.push(self.sums.len());
		self.track_offsets.push(self.confidences.len());
		self.total_tracks.push(total_tracks);
		self.sums.append(&mut self.staged_sums);
		self.confidences.append(&mut self.staged_confidences);
	}
}

impl DbarBuilder {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # Into `Dbar`.
	pub fn result(self) -> Dbar {
		Dbar {
			total_tracks: self.total_tracks,
			confidences: self.confidences,
			sums: self.sums,
			sum_offsets: self.sum_offsets,
			track_offsets: self.track_offsets,
		}
	}
}



/// # Read Up To `buf.len()` Bytes, Best Effort.
///
/// Unlike [`Read::read_exact`], this doesn't treat a short read as an
/// error — it returns how many bytes actually landed so the caller can
/// forward a partial record to the content handler.
fn read_some<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, Error> {
	let mut total = 0;
	while total < buf.len() {
		match reader.read(&mut buf[total..]) {
			Ok(0) => break,
			// I/O errors reaching here (not EOF) are treated as an
			// immediate truncation at the current position; the caller's
			// error handler still gets a chance to see it.
			Ok(n) => total += n,
			Err(_) => break,
		}
	}
	Ok(total)
}

#[must_use = "parse_stream returns a Result, which must be handled"]
/// # Parse A dBAR Stream.
///
/// Drives `content` with SAX-style events as the stream is consumed. On
/// any short read, the partial triplet is still forwarded to `content`
/// (with per-field validity flags) before `errors` is invoked; the
/// default ([`DefaultErrorHandler`]) re-raises as [`Error::StreamParse`].
///
/// An empty input stream yields zero blocks and is not an error.
///
/// ## Errors
///
/// Propagates whatever `errors.on_error` returns on a truncated read.
pub fn parse_stream<R, C, E>(reader: &mut R, content: &mut C, errors: &mut E) -> Result<u64, Error>
where
	R: Read,
	C: ContentHandler,
	E: ErrorHandler,
{
	let mut byte_pos: u64 = 0;
	let mut block: u32 = 0;

	content.start_input();

	loop {
		let mut header_buf = [0_u8; HEADER_LEN];
		let read = read_some(reader, &mut header_buf)?;

		if read == 0 {
			// Clean end of stream between blocks.
			break;
		}

		block += 1;
		content.start_block(block);
		// Safe: HEADER_LEN and TRIPLET_LEN are small compile-time constants.
		#[expect(clippy::cast_possible_truncation, reason = "Record sizes are well under u32::MAX.")]
		let mut block_byte_pos: u32 = read as u32;

		if read < HEADER_LEN {
			byte_pos += read as u64;
			log::warn!("truncated dBAR header in block {block} at byte {byte_pos}");
			errors.on_error(byte_pos, block, block_byte_pos)?;
			break;
		}

		byte_pos += HEADER_LEN as u64;
		let total_tracks = header_buf[0];
		let id1 = u32::from_le_bytes([header_buf[1], header_buf[2], header_buf[3], header_buf[4]]);
		let id2 = u32::from_le_bytes([header_buf[5], header_buf[6], header_buf[7], header_buf[8]]);
		let cddb_id = u32::from_le_bytes([header_buf[9], header_buf[10], header_buf[11], header_buf[12]]);
		content.header(DbarBlockHeader { total_tracks, id1, id2, cddb_id });

		let mut truncated = false;
		for _ in 0..total_tracks {
			let mut triplet_buf = [0_u8; TRIPLET_LEN];
			let read = read_some(reader, &mut triplet_buf)?;

			if read < TRIPLET_LEN {
				let confidence = if read >= 1 { triplet_buf[0] } else { 0 };
				let valid_arcs = read >= 5;
				let arcs = if valid_arcs {
					u32::from_le_bytes([triplet_buf[1], triplet_buf[2], triplet_buf[3], triplet_buf[4]])
				} else { 0 };
				let valid_frame450 = read >= TRIPLET_LEN;
				let frame450_arcs = if valid_frame450 {
					u32::from_le_bytes([triplet_buf[5], triplet_buf[6], triplet_buf[7], triplet_buf[8]])
				} else { 0 };

				content.triplet(DbarTriplet { confidence, arcs, frame450_arcs }, valid_arcs, valid_frame450);

				byte_pos += read as u64;
				block_byte_pos += read as u32;
				truncated = true;
				log::warn!("truncated dBAR triplet in block {block} at byte {byte_pos}");
				break;
			}

			let confidence = triplet_buf[0];
			let arcs = u32::from_le_bytes([triplet_buf[1], triplet_buf[2], triplet_buf[3], triplet_buf[4]]);
			let frame450_arcs = u32::from_le_bytes([triplet_buf[5], triplet_buf[6], triplet_buf[7], triplet_buf[8]]);
			content.triplet(DbarTriplet { confidence, arcs, frame450_arcs }, true, true);
			byte_pos += TRIPLET_LEN as u64;
			block_byte_pos += TRIPLET_LEN as u32;
		}

		if truncated {
			errors.on_error(byte_pos, block, block_byte_pos)?;
			break;
		}

		content.end_block(block);
	}

	content.end_input();
	Ok(byte_pos)
}

#[must_use = "parse_checksums returns a Result, which must be handled"]
/// # Parse Checksums (Convenience).
///
/// Parses `bin` as a dBAR stream and collapses every block whose header id
/// matches `id` into one `checksum => summed confidence` map per track —
/// the shape a one-off lookup wants without constructing a [`Verifier`](crate::Verifier).
/// Blocks parsed before a truncated read still contribute; a truncation
/// itself is not an error here (unlike [`parse_stream`]'s default handler),
/// since the caller only cares about whatever checksums made it through.
///
/// ## Errors
///
/// Returns [`Error::NoChecksums`] if no block matched `id`, or if every
/// matching block's ARCS values were the all-zero sentinel.
pub fn parse_checksums(id: &ArId, bin: &[u8]) -> Result<Vec<BTreeMap<u32, u8>>, Error> {
	/// # Swallow Truncation, Keep Whatever Parsed Before It.
	struct IgnoreTruncation;
	impl ErrorHandler for IgnoreTruncation {
		fn on_error(&mut self, _: u64, _: u32, _: u32) -> Result<(), Error> { Ok(()) }
	}

	let mut cur = std::io::Cursor::new(bin);
	let mut builder = DbarBuilder::new();
	let mut errors = IgnoreTruncation;
	parse_stream(&mut cur, &mut builder, &mut errors)?;
	let dbar = builder.result();

	let track_count = usize::from(id.track_count());
	let mut out: Vec<BTreeMap<u32, u8>> = vec![BTreeMap::new(); track_count];

	for block in dbar.blocks() {
		let header = block.header();
		if header.id1() != id.id1() || header.id2() != id.id2() || header.cddb_id() != id.cddb_id() {
			continue;
		}

		for (t, triplet) in block.triplets().enumerate() {
			let Some(slot) = out.get_mut(t) else { break; };
			if is_valid_arcs(triplet.arcs()) {
				let e = slot.entry(triplet.arcs()).or_insert(0);
				*e = e.saturating_add(triplet.confidence());
			}
		}
	}

	if out.iter().any(|m| ! m.is_empty()) { Ok(out) } else { Err(Error::NoChecksums) }
}



#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn encode_block(total_tracks: u8, id1: u32, id2: u32, cddb_id: u32, triplets: &[(u8, u32, u32)]) -> Vec<u8> {
		let mut out = Vec::new();
		out.push(total_tracks);
		out.extend_from_slice(&id1.to_le_bytes());
		out.extend_from_slice(&id2.to_le_bytes());
		out.extend_from_slice(&cddb_id.to_le_bytes());
		for &(confidence, arcs, frame450) in triplets {
			out.push(confidence);
			out.extend_from_slice(&arcs.to_le_bytes());
			out.extend_from_slice(&frame450.to_le_bytes());
		}
		out
	}

	#[test]
	fn t_empty_stream() {
		let mut cur = Cursor::new(Vec::<u8>::new());
		let mut builder = DbarBuilder::new();
		let mut errors = DefaultErrorHandler;
		let consumed = parse_stream(&mut cur, &mut builder, &mut errors).unwrap();
		assert_eq!(consumed, 0);
		let dbar = builder.result();
		assert!(dbar.is_empty());
	}

	#[test]
	fn t_single_block_roundtrip() {
		let bytes = encode_block(2, 0x1111_1111, 0x2222_2222, 0x3333_3333, &[
			(10, 0xAAAA_AAAA, 0xBBBB_BBBB),
			(20, 0xCCCC_CCCC, 0xDDDD_DDDD),
		]);
		let mut cur = Cursor::new(bytes.clone());
		let mut builder = DbarBuilder::new();
		let mut errors = DefaultErrorHandler;
		let consumed = parse_stream(&mut cur, &mut builder, &mut errors).unwrap();
		assert_eq!(consumed as usize, bytes.len());

		let dbar = builder.result();
		assert_eq!(dbar.len(), 1);
		let header = dbar.header(0).unwrap();
		assert_eq!(header.total_tracks(), 2);
		assert_eq!(header.id1(), 0x1111_1111);

		let t0 = dbar.triplet(0, 0).unwrap();
		assert_eq!(t0.confidence(), 10);
		assert_eq!(t0.arcs(), 0xAAAA_AAAA);
		let t1 = dbar.triplet(0, 1).unwrap();
		assert_eq!(t1.frame450_arcs(), 0xDDDD_DDDD);

		assert!(dbar.triplet(0, 2).is_err());
		assert!(dbar.header(1).is_err());
	}

	#[test]
	fn t_header_only_truncation() {
		// Header claims one track but the stream ends right after it.
		let bytes = encode_block(1, 1, 2, 3, &[]);
		let mut cur = Cursor::new(bytes);
		let mut builder = DbarBuilder::new();
		let mut errors = DefaultErrorHandler;
		let err = parse_stream(&mut cur, &mut builder, &mut errors).unwrap_err();
		match err {
			Error::StreamParse { block, block_byte_pos, .. } => {
				assert_eq!(block, 1);
				assert_eq!(block_byte_pos, 13);
			},
			_ => panic!("expected StreamParse"),
		}
	}

	#[test]
	fn t_truncated_third_block() {
		let mut bytes = encode_block(1, 1, 2, 3, &[(5, 100, 200)]);
		bytes.extend(encode_block(1, 4, 5, 6, &[(7, 300, 400)]));
		// Third block: header only, no triplets.
		bytes.extend_from_slice(&[3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

		let mut cur = Cursor::new(bytes);
		let mut builder = DbarBuilder::new();
		let mut errors = DefaultErrorHandler;
		let err = parse_stream(&mut cur, &mut builder, &mut errors).unwrap_err();
		match err {
			Error::StreamParse { block, block_byte_pos, .. } => {
				assert_eq!(block, 3);
				assert_eq!(block_byte_pos, 13);
			},
			_ => panic!("expected StreamParse"),
		}

		let dbar = builder.result();
		assert_eq!(dbar.len(), 2);
	}

	#[test]
	fn t_sentinels() {
		assert!(! is_valid_arcs(0));
		assert!(is_valid_arcs(1));
		assert!(! is_valid_confidence(0));
		assert!(is_valid_confidence(1));
	}

	#[test]
	fn t_parse_checksums() {
		let id = crate::id::from_parts(2, 0x1111_1111, 0x2222_2222, 0x3333_3333);

		let mut bytes = encode_block(2, 0x1111_1111, 0x2222_2222, 0x3333_3333, &[
			(10, 100, 0),
			(20, 200, 0),
		]);
		// A second matching block, confirming the per-track maps accumulate
		// confidence across blocks sharing a checksum.
		bytes.extend(encode_block(2, 0x1111_1111, 0x2222_2222, 0x3333_3333, &[
			(5, 100, 0),
			(0, 0, 0),
		]));
		// A non-matching block, ignored entirely.
		bytes.extend(encode_block(2, 0x9999_9999, 0x8888_8888, 0x7777_7777, &[
			(50, 999, 0),
			(50, 999, 0),
		]));

		let out = parse_checksums(&id, &bytes).unwrap();
		assert_eq!(out.len(), 2);
		assert_eq!(out[0].get(&100), Some(&15));
		assert_eq!(out[1].get(&200), Some(&20));
		assert_eq!(out[1].len(), 1);
	}

	#[test]
	fn t_parse_checksums_no_match() {
		let id = crate::id::from_parts(1, 1, 2, 3);
		let bytes = encode_block(1, 0xDEAD, 0xBEEF, 0xCAFE, &[(10, 100, 0)]);
		assert!(parse_checksums(&id, &bytes).is_err());
	}
}
