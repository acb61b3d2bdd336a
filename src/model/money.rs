use serde::{Deserialize, Deserializer};
use std::fmt;

/// Amount in VND.
///
/// The backend serializes decimals either as JSON numbers or as strings
/// (`"1500000.00"`), so both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(pub f64);

impl Money {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Money(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Money)
                .map_err(|_| serde::de::Error::custom(format!("invalid amount '{}'", text))),
        }
    }
}

/// Renders `1500000` as `1,500,000 VND`. Fractions are rounded away.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round() as i64;
        let digits = rounded.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if rounded < 0 {
            write!(f, "-{} VND", grouped)
        } else {
            write!(f, "{} VND", grouped)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_decimal_strings() {
        let amounts: Vec<Money> = serde_json::from_str(r#"[1500000, "250000.00"]"#).unwrap();
        assert_eq!(amounts, vec![Money(1_500_000.0), Money(250_000.0)]);
    }

    #[test]
    fn rejects_garbage_strings() {
        assert!(serde_json::from_str::<Money>(r#""abc""#).is_err());
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(Money(0.0).to_string(), "0 VND");
        assert_eq!(Money(999.0).to_string(), "999 VND");
        assert_eq!(Money(1000.0).to_string(), "1,000 VND");
        assert_eq!(Money(12_345_678.0).to_string(), "12,345,678 VND");
        assert_eq!(Money(-50_000.0).to_string(), "-50,000 VND");
    }
}
