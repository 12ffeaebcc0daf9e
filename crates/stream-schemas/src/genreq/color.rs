use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The set of colors we can use to describe images, arranged around a color wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
	Red,
	RedOrange,
	Orange,
	YellowOrange,
	Yellow,
	Chartreuse,
	Green,
	Cyan,
	SkyBlue,
	Blue,
	Indigo,
	Purple,
	Magenta,
}

/// The text doesn't begin with a color name we know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Not a color")]
pub struct NoColor;

impl Color {
	pub const ALL: [Color; 13] = [
		Color::Red,
		Color::RedOrange,
		Color::Orange,
		Color::YellowOrange,
		Color::Yellow,
		Color::Chartreuse,
		Color::Green,
		Color::Cyan,
		Color::SkyBlue,
		Color::Blue,
		Color::Indigo,
		Color::Purple,
		Color::Magenta,
	];

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Red => "red",
			Self::RedOrange => "red-orange",
			Self::Orange => "orange",
			Self::YellowOrange => "yellow-orange",
			Self::Yellow => "yellow",
			Self::Chartreuse => "chartreuse",
			Self::Green => "green",
			Self::Cyan => "cyan",
			Self::SkyBlue => "sky-blue",
			Self::Blue => "blue",
			Self::Indigo => "indigo",
			Self::Purple => "purple",
			Self::Magenta => "magenta",
		}
	}

	#[must_use]
	pub const fn complement(self) -> Self {
		match self {
			Self::Red => Self::Green,
			Self::RedOrange => Self::Cyan,
			Self::Orange => Self::SkyBlue,
			Self::YellowOrange => Self::Blue,
			Self::Yellow => Self::Indigo,
			Self::Chartreuse => Self::Magenta,
			Self::Green => Self::Red,
			Self::Cyan => Self::RedOrange,
			Self::SkyBlue => Self::Orange,
			Self::Blue | Self::Indigo => Self::YellowOrange,
			Self::Purple => Self::Yellow,
			Self::Magenta => Self::Chartreuse,
		}
	}

	/// Atomic words making up the name: one for primary colors, two for compounds
	fn slugs(self) -> (&'static str, Option<&'static str>) {
		let name = self.as_str();
		match name.split_once('-') {
			Some((lhs, rhs)) => (lhs, Some(rhs)),
			None => (name, None),
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Color {
	type Err = NoColor;

	/// Exact canonical name only; use [`match_color`] for free text
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Color::ALL.into_iter().find(|c| c.as_str() == s).ok_or(NoColor)
	}
}

struct Matcher {
	pattern: Regex,
	lookup: HashMap<String, Color>,
}

static MATCHER: Lazy<Matcher> = Lazy::new(|| {
	let mut slugs: Vec<&str> = Color::ALL
		.iter()
		.flat_map(|c| {
			let (lhs, rhs) = c.slugs();
			std::iter::once(lhs).chain(rhs)
		})
		.collect();
	slugs.sort_unstable();
	slugs.dedup();

	// group 1: any slug; group 2 (optional): another slug after a space, slash or hyphen
	let group = format!("({})", slugs.join("|"));
	let pattern = Regex::new(&format!("(?i)^{group}(?:[-/ ]{group})?")).expect("color pattern is built from a fixed vocabulary");

	let lookup = Color::ALL
		.iter()
		.map(|c| {
			let (lhs, rhs) = c.slugs();
			(lookup_key(lhs, rhs.unwrap_or("")), *c)
		})
		.collect();

	Matcher { pattern, lookup }
});

/// Canonical key for a pair of slugs: lowercase, order-independent
fn lookup_key(lhs: &str, rhs: &str) -> String {
	let lhs = lhs.to_lowercase();
	let rhs = rhs.to_lowercase();
	if rhs.is_empty() || rhs == lhs {
		return lhs;
	}
	if lhs < rhs {
		format!("{lhs}-{rhs}")
	} else {
		format!("{rhs}-{lhs}")
	}
}

/// Recognizes the color named at the start of `text`, case-insensitively, and returns it
/// along with the rest of the text after any spaces that follow the color name.
///
/// Compound names match in either order, so "orange-red" is [`Color::RedOrange`]. A pair
/// of color words that doesn't form a known compound ("green-orange") is not a color.
///
/// # Errors
///
/// [`NoColor`] when the text does not start with a color name.
pub fn match_color(text: &str) -> Result<(Color, &str), NoColor> {
	let caps = MATCHER.pattern.captures(text).ok_or(NoColor)?;
	let lhs = caps.get(1).map_or("", |m| m.as_str());
	let rhs = caps.get(2).map_or("", |m| m.as_str());
	let color = *MATCHER.lookup.get(&lookup_key(lhs, rhs)).ok_or(NoColor)?;

	let end = caps.get(0).map_or(0, |m| m.end());
	Ok((color, text[end..].trim_start_matches(' ')))
}
