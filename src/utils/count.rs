//! Counted nouns for log lines.

use std::fmt;

/// `count` followed by `noun`, pluralized with a trailing `s` unless exactly one.
///
/// Formats lazily, so it can go straight into `log!` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted<'a> {
    pub count: usize,
    pub noun: &'a str,
}

/// `counted(22, "rule")` displays as `22 rules`.
#[inline]
pub const fn counted(count: usize, noun: &str) -> Counted<'_> {
    Counted { count, noun }
}

impl fmt::Display for Counted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.noun)?;
        if self.count != 1 {
            f.write_str("s")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted() {
        assert_eq!(counted(0, "rule").to_string(), "0 rules");
        assert_eq!(counted(1, "route").to_string(), "1 route");
        assert_eq!(counted(12, "route warning").to_string(), "12 route warnings");
    }
}
