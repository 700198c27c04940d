/*!
# AccurateRip Core: Serde
*/

use crate::{
	ArId,
	ChecksumSet,
};
use serde::{
	de,
	Deserialize,
	ser::{
		self,
		SerializeStruct,
	},
	Serialize,
};
use std::fmt;



/// # Helper: Deserialize as String.
macro_rules! deserialize_str_with {
	($ty:ty, $fn:ident) => (
		#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
		impl<'de> Deserialize<'de> for $ty {
			fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
			where D: de::Deserializer<'de> {
				struct Visitor;

				impl de::Visitor<'_> for Visitor {
					type Value = $ty;

					fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
						f.write_str("string")
					}

					fn visit_str<S>(self, src: &str) -> Result<$ty, S>
					where S: de::Error {
						<$ty>::$fn(src).map_err(de::Error::custom)
					}

					fn visit_bytes<S>(self, src: &[u8]) -> Result<$ty, S>
					where S: de::Error {
						std::str::from_utf8(src)
							.map_err(de::Error::custom)
							.and_then(|s| <$ty>::$fn(s).map_err(de::Error::custom))
					}
				}

				deserializer.deserialize_str(Visitor)
			}
		}
	);
}

/// # Helper: Serialize as String.
macro_rules! serialize_with {
	($ty:ty, $fn:ident) => (
		#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
		impl Serialize for $ty {
			#[inline]
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where S: ser::Serializer { self.$fn().serialize(serializer) }
		}
	);
}

deserialize_str_with!(ArId, decode);
serialize_with!(ArId, pretty_print);



#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de> Deserialize<'de> for ChecksumSet {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: de::Deserializer<'de> {
		/// # Fields of Interest.
		const FIELDS: &[&str] = &["v1", "v2", "length"];

		/// # Visitor Instance.
		struct Visitor;

		impl<'de> de::Visitor<'de> for Visitor {
			type Value = ChecksumSet;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("struct ChecksumSet")
			}

			fn visit_map<V>(self, mut map: V) -> Result<ChecksumSet, V::Error>
			where V: de::MapAccess<'de> {
				let mut v1: Option<Option<u32>> = None;
				let mut v2: Option<Option<u32>> = None;
				let mut length = None;

				/// # Helper: Accept or Reject Value.
				macro_rules! set {
					($var:ident, $name:literal) => (
						if $var.is_none() { $var.replace(map.next_value()?); }
						else { return Err(de::Error::duplicate_field($name)); }
					);
				}

				while let Some(key) = map.next_key()? {
					match key {
						"v1" => set!(v1, "v1"),
						"v2" => set!(v2, "v2"),
						"length" => set!(length, "length"),
						_ => return Err(de::Error::unknown_field(key, FIELDS)),
					}
				}

				let v1 = v1.ok_or_else(|| de::Error::missing_field("v1"))?;
				let v2 = v2.ok_or_else(|| de::Error::missing_field("v2"))?;
				let length = length.ok_or_else(|| de::Error::missing_field("length"))?;

				Ok(crate::checksum::from_parts(v1, v2, length))
			}
		}

		deserializer.deserialize_struct("ChecksumSet", FIELDS, Visitor)
	}
}

#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl Serialize for ChecksumSet {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: ser::Serializer {
		let mut state = serializer.serialize_struct("ChecksumSet", 3)?;

		state.serialize_field("v1", &self.v1())?;
		state.serialize_field("v2", &self.v2())?;
		state.serialize_field("length", &self.length())?;

		state.end()
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::make_toc;

	/// # Test Serialize->Deserialize Consistency.
	macro_rules! inout {
		($input:ident, $ty:ty, $nice:literal) => (
			let s = serde_json::to_vec(&$input).expect(concat!($nice, " serialize failed."));
			let d = serde_json::from_slice::<$ty>(&s).expect(concat!($nice, " deserialize failed."));
			assert_eq!($input, d, concat!($nice, " JSON serialize/deserialize does not match the original."));
		);
	}

	#[test]
	fn serde_arid() {
		let toc = make_toc(2, vec![0, 29_042], 53_880).unwrap();
		let id = crate::make_arid(&toc).unwrap();
		inout!(id, ArId, "ArId");
	}

	#[test]
	fn serde_empty_arid() {
		let id = crate::make_empty_arid();
		inout!(id, ArId, "ArId");
	}

	#[test]
	fn serde_checksum_set() {
		let set = ChecksumSet::test_only(0x1234_5678, 0x9abc_def0, 1000);
		inout!(set, ChecksumSet, "ChecksumSet");
	}
}
