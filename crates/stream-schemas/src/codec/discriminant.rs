use std::fmt;

/// A closed set of wire tags, one per variant of an event family.
///
/// Every implementation also carries an `Unrecognized` case holding a tag that this build
/// doesn't know about. Decoding never fails on such a tag; the tag is kept verbatim so the
/// value re-encodes exactly as it arrived.
pub trait Discriminant: Clone + Eq + fmt::Debug + fmt::Display {
	/// Every tag this build understands, in declaration order
	const KNOWN: &'static [&'static str];

	fn as_str(&self) -> &str;

	/// Total: unknown tags map to the unrecognized case
	fn from_wire(tag: &str) -> Self;

	fn is_recognized(&self) -> bool;

	/// False for an unrecognized case that holds a tag this build does know. Such a value
	/// would decode back as the known case, so it is refused on encode.
	fn is_consistent(&self) -> bool {
		self.is_recognized() || !Self::from_wire(self.as_str()).is_recognized()
	}
}

/// Declares a discriminant enum along with its `Discriminant`, `Display`, `FromStr` and
/// serde impls. Each variant is paired with its wire tag.
macro_rules! discriminant {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq, Eq, Hash)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant, )+
			/// A tag not known to this build, kept verbatim. Only decoding produces it;
			/// holding a known tag here makes the value fail to encode.
			Unrecognized(String),
		}

		impl $crate::codec::Discriminant for $name {
			const KNOWN: &'static [&'static str] = &[$($wire),+];

			fn as_str(&self) -> &str {
				match self {
					$( Self::$variant => $wire, )+
					Self::Unrecognized(tag) => tag.as_str(),
				}
			}

			fn from_wire(tag: &str) -> Self {
				match tag {
					$( $wire => Self::$variant, )+
					other => Self::Unrecognized(other.to_string()),
				}
			}

			fn is_recognized(&self) -> bool {
				!matches!(self, Self::Unrecognized(_))
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::codec::Discriminant::as_str(self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = ::std::convert::Infallible;

			fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
				Ok(<Self as $crate::codec::Discriminant>::from_wire(s))
			}
		}

		impl ::serde::Serialize for $name {
			fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
				serializer.serialize_str($crate::codec::Discriminant::as_str(self))
			}
		}

		impl<'de> ::serde::Deserialize<'de> for $name {
			fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
				let tag = <String as ::serde::Deserialize>::deserialize(deserializer)?;
				Ok(<Self as $crate::codec::Discriminant>::from_wire(&tag))
			}
		}
	};
}

pub(crate) use discriminant;
