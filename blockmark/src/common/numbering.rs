//! List bullet labels.
//!
//! Maps a list style and a 1-based ordinal to the marker written in front of a
//! list item (`-`, `3.`, `C.`, `iv`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BulletStyle {
    Dash,
    #[default]
    Decimal,
    UpperAlpha,
    LowerAlpha,
    UpperRoman,
    LowerRoman,
}

impl BulletStyle {
    /// Name used by the `type` attribute of `core/list` blocks
    pub fn as_str(&self) -> &'static str {
        match self {
            BulletStyle::Dash => "-",
            BulletStyle::Decimal => "decimal",
            BulletStyle::UpperAlpha => "upper-alpha",
            BulletStyle::LowerAlpha => "lower-alpha",
            BulletStyle::UpperRoman => "upper-roman",
            BulletStyle::LowerRoman => "lower-roman",
        }
    }

    /// Label for the `count`-th item (1-based).
    ///
    /// Lower-roman labels carry no trailing period; every other ordered style
    /// does. Existing documents depend on that output.
    pub fn bullet(&self, count: u64) -> String {
        match self {
            BulletStyle::Dash => "-".to_string(),
            BulletStyle::Decimal => format!("{count}."),
            BulletStyle::UpperAlpha => format!("{}.", alpha(count, b'A')),
            BulletStyle::LowerAlpha => format!("{}.", alpha(count, b'a')),
            BulletStyle::UpperRoman => format!("{}.", romanize(count)),
            BulletStyle::LowerRoman => romanize(count).to_lowercase(),
        }
    }
}

impl fmt::Display for BulletStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a style name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBulletStyle(pub String);

impl fmt::Display for UnknownBulletStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown list style '{}'", self.0)
    }
}

impl std::error::Error for UnknownBulletStyle {}

impl FromStr for BulletStyle {
    type Err = UnknownBulletStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "dash" => Ok(BulletStyle::Dash),
            "decimal" => Ok(BulletStyle::Decimal),
            "upper-alpha" => Ok(BulletStyle::UpperAlpha),
            "lower-alpha" => Ok(BulletStyle::LowerAlpha),
            "upper-roman" => Ok(BulletStyle::UpperRoman),
            "lower-roman" => Ok(BulletStyle::LowerRoman),
            other => Err(UnknownBulletStyle(other.to_string())),
        }
    }
}

/// Letters for `n`: A..Z, then AA, AB, ... (bijective base 26).
fn alpha(mut n: u64, base: u8) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((base + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

const HUNDREDS: [&str; 10] = ["", "C", "CC", "CCC", "CD", "D", "DC", "DCC", "DCCC", "CM"];
const TENS: [&str; 10] = ["", "X", "XX", "XXX", "XL", "L", "LX", "LXX", "LXXX", "XC"];
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Largest value written with roman numerals.
pub const MAX_ROMAN: u64 = 3999;

/// Uppercase roman numeral. Thousands repeat `M`; zero is the empty string.
/// Values above [`MAX_ROMAN`] are written as decimal digits.
pub fn romanize(n: u64) -> String {
    if n > MAX_ROMAN {
        return n.to_string();
    }
    let mut out = "M".repeat((n / 1000) as usize);
    out.push_str(HUNDREDS[((n / 100) % 10) as usize]);
    out.push_str(TENS[((n / 10) % 10) as usize]);
    out.push_str(ONES[(n % 10) as usize]);
    out
}
