//! Closed name table for encoding selection.
//!
//! Only the names listed here resolve; lookup is ASCII case-insensitive.

use std::fmt;
use std::str::FromStr;

use super::Encoding;
use super::error::EncodingError;

const REGISTRY: &[(&str, Encoding)] = &[
    ("naive", Encoding::Naive),
    ("nrz", Encoding::Naive),
    ("manchester", Encoding::Manchester),
    ("differentialmanchester", Encoding::DifferentialManchester),
    ("differential-manchester", Encoding::DifferentialManchester),
    ("biphasemark", Encoding::BiphaseMark),
    ("biphase-mark", Encoding::BiphaseMark),
];

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Naive,
        Encoding::Manchester,
        Encoding::DifferentialManchester,
        Encoding::BiphaseMark,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Naive => "Naive",
            Encoding::Manchester => "Manchester",
            Encoding::DifferentialManchester => "DifferentialManchester",
            Encoding::BiphaseMark => "BiphaseMark",
        }
    }

    /// Kebab-case name accepted on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            Encoding::Naive => "naive",
            Encoding::Manchester => "manchester",
            Encoding::DifferentialManchester => "differential-manchester",
            Encoding::BiphaseMark => "biphase-mark",
        }
    }

    pub fn lookup(name: &str) -> Result<Encoding, EncodingError> {
        let wanted = name.trim();
        REGISTRY
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
            .map(|(_, encoding)| *encoding)
            .ok_or_else(|| EncodingError::UnknownVariant {
                name: name.to_string(),
                expected: Encoding::ALL
                    .iter()
                    .map(|encoding| encoding.cli_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::lookup(s)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
