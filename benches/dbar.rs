/*!
# Benchmark: dBAR Codec
*/

use accurip_core::{
	DbarBuilder,
	DefaultErrorHandler,
	parse_stream,
};
use brunch::{
	Bench,
	benches,
};
use std::io::Cursor;



/// # Encode One Block.
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

fn main() {
	let triplets: Vec<(u8, u32, u32)> = (0..20_u32)
		.map(|i| (10, 0x1000_0000 + i, 0x2000_0000 + i))
		.collect();
	let mut bytes = Vec::new();
	for b in 0..3_u32 {
		bytes.extend(encode_block(20, b, b + 1, b + 2, &triplets));
	}

	benches!(
		inline:
		Bench::new("parse_stream (3 blocks x 20 tracks)").run(|| {
			let mut cur = Cursor::new(bytes.as_slice());
			let mut builder = DbarBuilder::new();
			let mut errors = DefaultErrorHandler;
			parse_stream(&mut cur, &mut builder, &mut errors).unwrap();
			builder.result()
		}),
	);
}
