/*!
# AccurateRip Core

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

`accurip_core` computes [AccurateRip](http://accuraterip.com/) track
checksums (v1 and v2) from decoded CDDA sample streams, encodes a disc's
table of contents as the canonical AccurateRip identifier, parses the
binary `dBAR` HTTP response format, and verifies locally computed
checksums against that reference data under configurable matching
policies.

It does not decode audio, parse cuesheets, or fetch anything over the
network — those remain the caller's job. Feed it already-decoded 16-bit
interleaved stereo samples and already-parsed track offsets; it handles
the CDDA-aware checksum math, the identifier/response codecs, and the
verification matrix.



## Examples

```
use accurip_core::{Algorithm, Calculation, make_toc};

let toc = make_toc(
    2,
    vec![0, 29_042],
    332_075,
).unwrap();

let mut calc = Calculation::new(&toc, Algorithm::V1V2).unwrap();
// calc.update(&samples) is called repeatedly as blocks arrive; once
// `calc.complete()` is true, `calc.result()` yields the track checksums.
assert!(! calc.complete());
```



## De/Serialization

The optional `serde` crate feature exposes de/serialization support for
[`ArId`] (as a string) and [`ChecksumSet`] (as a map).
*/

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
	unsafe_code,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod checksum;
mod dbar;
mod error;
mod id;
mod partition;
mod size;
mod toc;
mod verify;
#[cfg(feature = "serde")] mod serde;

pub use checksum::{
	Algorithm,
	Calculation,
	ChecksumSet,
	Checksums,
};
pub use dbar::{
	ContentHandler,
	Dbar,
	DbarBlock,
	DbarBlockHeader,
	DbarBuilder,
	DbarTriplet,
	ErrorHandler,
	is_valid_arcs,
	is_valid_confidence,
	parse_checksums,
	parse_stream,
};
pub use error::Error;
pub use id::{
	ArId,
	make_arid,
	make_empty_arid,
};
pub use partition::{
	Partition,
	partition,
};
pub use size::{
	AudioSize,
	AudioUnit,
};
pub use toc::{
	ToC,
	make_toc,
	make_toc_with_lengths,
	merge,
};
pub use verify::{
	AlbumVerifier,
	ChecksumSource,
	MatchPolicy,
	MAX_DIFFERENCE,
	TracksetVerifier,
	TrackPolicy,
	TraversalPolicy,
	Verifier,
	VerificationResult,
	best_block,
};



/// # CDDA Sample Rate (Hz).
pub const SAMPLE_RATE: u32 = 44_100;

/// # CDDA Channel Count.
pub const CHANNELS: u8 = 2;

/// # CDDA Bits Per Sample (Per Channel).
pub const BITS_PER_SAMPLE: u8 = 16;

/// # CDDA Frames Per Second.
pub const FRAMES_PER_SECOND: u32 = 75;

/// # Samples Per Frame.
///
/// One CDDA frame (1/75 s) holds exactly `588` packed stereo samples.
pub const SAMPLES_PER_FRAME: u32 = 588;

/// # Bytes Per Sample.
///
/// One packed stereo sample is two 16-bit channels: `4` bytes.
pub const BYTES_PER_SAMPLE: u32 = 4;

/// # Bytes Per Frame.
pub const BYTES_PER_FRAME: u32 = SAMPLES_PER_FRAME * BYTES_PER_SAMPLE;

/// # Maximum Track Count.
pub const MAX_TRACK_COUNT: u8 = 99;

/// # Minimum Inter-Track Distance (Frames).
pub const MIN_TRACK_DISTANCE: u32 = 300;

/// # Minimum Track Length (Frames).
pub const MIN_TRACK_LENGTH: u32 = 150;

/// # Maximum Legal Block Address (Frames).
///
/// `(99·60+59)·75+74`, i.e. the largest LBA expressible as 99:59.74 in
/// MSF notation.
pub const MAX_BLOCK_ADDRESS: u32 = (99 * 60 + 59) * 75 + 74;

/// # Maximum Legal Track Offset (Frames).
///
/// `(79·60+59)·75+74`, i.e. the largest LBA expressible as 79:59.74 —
/// the longest a Red Book audio CD may run.
pub const MAX_OFFSET: u32 = (79 * 60 + 59) * 75 + 74;

/// # Front Skip (Samples).
///
/// `5·588 − 1` samples are excluded from the start of the first track.
pub const FRONT_SKIP_SAMPLES: u32 = 5 * SAMPLES_PER_FRAME - 1;

/// # Back Skip (Samples).
///
/// `5·588` samples are excluded from the end of the last track.
pub const BACK_SKIP_SAMPLES: u32 = 5 * SAMPLES_PER_FRAME;

#[must_use]
/// # Frames to Samples.
pub const fn frames_to_samples(frames: u32) -> u32 { frames * SAMPLES_PER_FRAME }

#[must_use]
/// # Frames to Bytes.
pub const fn frames_to_bytes(frames: u32) -> u32 { frames * BYTES_PER_FRAME }

#[must_use]
/// # Samples to Bytes.
pub const fn samples_to_bytes(samples: u32) -> u32 { samples * BYTES_PER_SAMPLE }

#[must_use]
/// # Samples to Frames (Exact).
///
/// Returns `None` if `samples` isn't evenly divisible by
/// [`SAMPLES_PER_FRAME`].
pub const fn samples_to_frames(samples: u32) -> Option<u32> {
	if samples % SAMPLES_PER_FRAME == 0 { Some(samples / SAMPLES_PER_FRAME) }
	else { None }
}

#[must_use]
/// # Bytes to Samples (Exact).
///
/// Returns `None` if `bytes` isn't evenly divisible by [`BYTES_PER_SAMPLE`].
pub const fn bytes_to_samples(bytes: u32) -> Option<u32> {
	if bytes % BYTES_PER_SAMPLE == 0 { Some(bytes / BYTES_PER_SAMPLE) }
	else { None }
}
