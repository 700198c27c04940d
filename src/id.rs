/*!
# AccurateRip Core: Identifier (ArId)
*/

use crate::{
	Error,
	ToC,
};
use dactyl::traits::{
	BytesToUnsigned,
	HexToUnsigned,
};
use std::fmt;



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # AccurateRip Identifier.
///
/// The canonical disc identifier AccurateRip keys its reference data by:
/// a track count plus three 32-bit ids derived from the table of
/// contents. Produced only via [`make_arid`] or [`make_empty_arid`].
///
/// ## Examples
///
/// ```
/// use accurip_core::{make_arid, make_toc};
///
/// let toc = make_toc(2, vec![0, 29_042], 53_880).unwrap();
/// let id = make_arid(&toc).unwrap();
/// assert_eq!(id.track_count(), 2);
/// ```
pub struct ArId {
	/// # Track Count.
	track_count: u8,
	/// # Disc ID 1.
	id1: u32,
	/// # Disc ID 2.
	id2: u32,
	/// # CDDB ID.
	cddb_id: u32,
}

impl fmt::Display for ArId {
	#[allow(unsafe_code, reason = "Output is guaranteed ASCII; matches the pack's hex-rendering idiom.")]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pretty_print())
	}
}

impl ArId {
	#[must_use]
	/// # Track Count.
	pub const fn track_count(&self) -> u8 { self.track_count }

	#[must_use]
	/// # Disc ID 1.
	pub const fn id1(&self) -> u32 { self.id1 }

	#[must_use]
	/// # Disc ID 2.
	pub const fn id2(&self) -> u32 { self.id2 }

	#[must_use]
	/// # CDDB ID.
	pub const fn cddb_id(&self) -> u32 { self.cddb_id }

	#[must_use]
	/// # Is Empty?
	///
	/// True iff the track count and all three ids are zero, i.e. this is
	/// the value returned by [`make_empty_arid`].
	pub const fn is_empty(&self) -> bool {
		self.track_count == 0 && self.id1 == 0 && self.id2 == 0 && self.cddb_id == 0
	}

	#[must_use]
	#[allow(unsafe_code, reason = "All bytes written are ASCII hex/digits.")]
	/// # Pretty Print.
	///
	/// Same as the `Display` rendering but callable directly; matches
	/// `{track_count:03}-{id1:08x}-{id2:08x}-{cddb_id:08x}`.
	pub fn pretty_print(&self) -> String {
		let mut out: Vec<u8> = vec![
			b'0', b'0', b'0',
			b'-', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0',
			b'-', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0',
			b'-', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0',
		];

		out[..3].copy_from_slice(dactyl::NiceU8::from(self.track_count).as_bytes3());
		faster_hex::hex_encode_fallback(&self.id1.to_be_bytes(), &mut out[4..12]);
		faster_hex::hex_encode_fallback(&self.id2.to_be_bytes(), &mut out[13..21]);
		faster_hex::hex_encode_fallback(&self.cddb_id.to_be_bytes(), &mut out[22..]);

		// Safety: every byte written above is ASCII.
		unsafe { String::from_utf8_unchecked(out) }
	}

	#[must_use]
	/// # Filename.
	///
	/// The canonical `dBAR-###-xxxxxxxx-xxxxxxxx-xxxxxxxx.bin` filename
	/// AccurateRip uses for this disc's response file.
	///
	/// ## Examples
	///
	/// ```
	/// use accurip_core::{make_arid, make_toc};
	///
	/// let toc = make_toc(
	///     15,
	///     vec![33,5225,7390,23380,35608,49820,69508,87733,106333,139495,157863,198495,213368,225320,234103],
	///     253_038,
	/// ).unwrap();
	/// let id = make_arid(&toc).unwrap();
	/// assert_eq!(id.filename(), "dBAR-015-001b9178-014be24e-b40d2d0f.bin");
	/// ```
	pub fn filename(&self) -> String {
		["dBAR-", &self.pretty_print(), ".bin"].concat()
	}

	#[must_use]
	/// # Checksum URL.
	///
	/// The URL where AccurateRip serves this disc's reference checksums,
	/// if present in their database.
	pub fn url(&self) -> String {
		let disc_id = self.pretty_print();
		[
			"http://www.accuraterip.com/accuraterip/",
			&disc_id[11..12],
			"/",
			&disc_id[10..11],
			"/",
			&disc_id[9..10],
			"/dBAR-",
			&disc_id,
			".bin",
		].concat()
	}

	/// # Decode.
	///
	/// Parse the `###-xxxxxxxx-xxxxxxxx-xxxxxxxx` string form (as produced
	/// by `Display`/[`ArId::pretty_print`]) back into an [`ArId`].
	///
	/// ## Errors
	///
	/// Returns [`Error::ArIdDecode`] if the string doesn't match that
	/// shape.
	pub fn decode<S>(src: S) -> Result<Self, Error>
	where S: AsRef<str> {
		let src = src.as_ref().as_bytes();
		if src.len() == 30 && src[3] == b'-' && src[12] == b'-' && src[21] == b'-' {
			let track_count = u8::btou(&src[..3]).ok_or(Error::ArIdDecode)?;
			let id1 = u32::htou(&src[4..12]).ok_or(Error::ArIdDecode)?;
			let id2 = u32::htou(&src[13..21]).ok_or(Error::ArIdDecode)?;
			let cddb_id = u32::htou(&src[22..]).ok_or(Error::ArIdDecode)?;
			Ok(Self { track_count, id1, id2, cddb_id })
		}
		else { Err(Error::ArIdDecode) }
	}
}

#[must_use]
/// # From Raw Parts.
///
/// Builds an [`ArId`] directly from already-known fields, bypassing
/// [`make_arid`]'s derivation from a [`ToC`]. Used to read an id back out of
/// a parsed [`crate::DbarBlockHeader`], which carries the same four values.
pub(crate) const fn from_parts(track_count: u8, id1: u32, id2: u32, cddb_id: u32) -> ArId {
	ArId { track_count, id1, id2, cddb_id }
}

#[must_use]
/// # Make Empty ArId.
///
/// Returns the canonical empty [`ArId`] (track count and all three ids
/// zero). Used by [`crate::TracksetVerifier`], which has no actual
/// identifier to compare against.
pub const fn make_empty_arid() -> ArId {
	ArId { track_count: 0, id1: 0, id2: 0, cddb_id: 0 }
}

#[must_use = "factories return a Result, which must be handled"]
/// # Make ArId From ToC.
///
/// Computes the three AccurateRip ids from a complete [`ToC`]. All
/// arithmetic below is unsigned 32-bit with explicit wrap semantics.
///
///   - `id1 = Σ offsets[i] + leadout`
///   - `id2 = Σ (max(offsets[i], 1) · i) + leadout · (n+1)`, `i` 1-based
///   - `cddb_id = (Σ digit_sum(⌊offsets[i]/75⌋ + 2) mod 255) << 24
///               | (⌊leadout/75⌋ − ⌊offsets[1]/75⌋) << 8 | n`
///
/// ## Errors
///
/// Returns [`Error::Incomplete`] if `toc` has no leadout yet.
pub fn make_arid(toc: &ToC) -> Result<ArId, Error> {
	let offsets = toc.offsets();
	let leadout = toc.leadout().ok_or(Error::Incomplete)?;
	let n = toc.track_count();

	let mut id1: u32 = 0;
	let mut id2: u32 = 0;
	let mut digit_sum: u32 = 0;

	for (idx, &offset) in offsets.iter().enumerate() {
		let i = u32::try_from(idx + 1).unwrap_or(u32::MAX);
		id1 = id1.wrapping_add(offset);
		id2 = id2.wrapping_add(offset.max(1).wrapping_mul(i));
		digit_sum = digit_sum.wrapping_add(digit_sum_term(offset.wrapping_div(75).wrapping_add(2)));
	}

	id1 = id1.wrapping_add(leadout);
	id2 = id2.wrapping_add(leadout.wrapping_mul(u32::from(n) + 1));

	// Safe: offsets is non-empty for any valid ToC.
	let first_offset = offsets[0];
	let total_seconds = leadout.wrapping_div(75).wrapping_sub(first_offset.wrapping_div(75));

	let cddb_id =
		((digit_sum % 255) << 24) |
		((total_seconds & 0xFFFF) << 8) |
		u32::from(n);

	Ok(ArId { track_count: n, id1, id2, cddb_id })
}

/// # Digit Sum.
///
/// Sums the base-10 digits of `value`, e.g. `d(1234) = 1+2+3+4`. Computed
/// via decimal formatting rather than recursive division/modulo — the same
/// ASCII-XOR trick the pack's CDDB id code uses: for `'0'..='9'`, `b ^ b'0'`
/// equals the digit's numeric value.
fn digit_sum_term(value: u32) -> u32 {
	let mut buf = itoa::Buffer::new();
	let mut sum: u32 = 0;
	for b in buf.format(value).bytes() {
		sum = sum.wrapping_add(u32::from(b ^ b'0'));
	}
	sum
}
