//! Sign tables shared by the chart and strength modules.
//!
//! Signs are addressed by index 0-11, Aries = 0. Every index derived from
//! arithmetic goes through [`wrap_sign_index`] so it stays in range.

pub const SIGN_COUNT: usize = 12;

pub const SIGNS_EN: [&str; SIGN_COUNT] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Localized names used when the payload does not carry its own list.
pub const SIGNS_SANSKRIT: [&str; SIGN_COUNT] = [
    "Mesha",
    "Vrishabha",
    "Mithuna",
    "Karka",
    "Simha",
    "Kanya",
    "Tula",
    "Vrishchika",
    "Dhanu",
    "Makara",
    "Kumbha",
    "Meena",
];

/// Normalize any integer to a sign index in [0, 11].
pub fn wrap_sign_index(value: i64) -> usize {
    value.rem_euclid(SIGN_COUNT as i64) as usize
}

/// English name for a sign index (wrapped).
pub fn sign_name(index: usize) -> &'static str {
    SIGNS_EN[index % SIGN_COUNT]
}

/// Default localized sign names as owned strings.
pub fn default_sanskrit_names() -> Vec<String> {
    SIGNS_SANSKRIT.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_negative_and_large_indices() {
        assert_eq!(wrap_sign_index(-1), 11);
        assert_eq!(wrap_sign_index(12), 0);
        assert_eq!(wrap_sign_index(25), 1);
    }

    #[test]
    fn sign_names_wrap() {
        assert_eq!(sign_name(0), "Aries");
        assert_eq!(sign_name(13), "Taurus");
    }
}
