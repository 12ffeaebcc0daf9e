use thiserror::Error;

/// Twitch reported a subscription tier we have no multiplier for
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized tier value '{0}'")]
pub struct UnrecognizedTier(pub String);

/// Converts a Twitch subscription tier ("1000", "2000" or "3000") to the multiplier used
/// when crediting the subscriber
///
/// # Errors
///
/// [`UnrecognizedTier`] for any tier other than the three listed.
pub fn credit_multiplier(tier: &str) -> Result<u32, UnrecognizedTier> {
	match tier {
		"1000" => Ok(1),
		"2000" => Ok(2),
		"3000" => Ok(5),
		other => Err(UnrecognizedTier(other.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_credit_multiplier() {
		assert_eq!(credit_multiplier("1000"), Ok(1));
		assert_eq!(credit_multiplier("2000"), Ok(2));
		assert_eq!(credit_multiplier("3000"), Ok(5));
	}

	#[test]
	fn test_unrecognized_tier() {
		for tier in ["", "4000", "prime", " 1000", "1"] {
			assert_eq!(credit_multiplier(tier), Err(UnrecognizedTier(tier.to_string())));
		}
		assert_eq!(UnrecognizedTier("4000".to_string()).to_string(), "Unrecognized tier value '4000'");
	}
}
