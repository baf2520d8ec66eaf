//! Tenors and tenor families.

use qz_core::{
    ensure,
    errors::{Error, Result},
    Time,
};

/// The family a tenor belongs to. The family selects the seeding rule the
/// quantizer uses for the initial grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenorFamily {
    /// Six-month style tenors.
    SixMonth,
    /// Three-month style tenors.
    ThreeMonth,
}

impl TenorFamily {
    /// Infer the family from a tenor name. Names carrying `"6M"` map to
    /// [`TenorFamily::SixMonth`], names carrying `"3M"` to
    /// [`TenorFamily::ThreeMonth`]; anything else is rejected.
    pub fn from_name(name: &str) -> Result<Self> {
        if name.contains("6M") {
            Ok(Self::SixMonth)
        } else if name.contains("3M") {
            Ok(Self::ThreeMonth)
        } else {
            Err(Error::InvalidArgument(format!(
                "tenor name '{name}' carries no known family tag (6M or 3M)"
            )))
        }
    }
}

/// A forward-rate tenor: a name, an accrual length in years, and the
/// family inferred from the name.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenor {
    name: String,
    length: Time,
    family: TenorFamily,
}

impl Tenor {
    /// Build a tenor, inferring the family from the name. The accrual
    /// length must be positive.
    pub fn new(name: impl Into<String>, length: Time) -> Result<Self> {
        let name = name.into();
        ensure!(
            length > 0.0,
            "tenor '{name}': accrual length must be positive, got {length}"
        );
        let family = TenorFamily::from_name(&name)?;
        Ok(Self { name, length, family })
    }

    /// The tenor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accrual length in years.
    pub fn length(&self) -> Time {
        self.length
    }

    /// The family the seeding rule is keyed on.
    pub fn family(&self) -> TenorFamily {
        self.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_from_name() {
        assert_eq!(TenorFamily::from_name("EUR-6M").unwrap(), TenorFamily::SixMonth);
        assert_eq!(TenorFamily::from_name("forward-3M").unwrap(), TenorFamily::ThreeMonth);
        assert!(TenorFamily::from_name("EUR-1Y").is_err());
    }

    #[test]
    fn tenor_construction() {
        let t = Tenor::new("EUR-6M", 0.5).unwrap();
        assert_eq!(t.name(), "EUR-6M");
        assert_eq!(t.length(), 0.5);
        assert_eq!(t.family(), TenorFamily::SixMonth);
    }

    #[test]
    fn nonpositive_length_rejected() {
        assert!(Tenor::new("EUR-6M", 0.0).is_err());
        assert!(Tenor::new("EUR-3M", -0.25).is_err());
    }
}
