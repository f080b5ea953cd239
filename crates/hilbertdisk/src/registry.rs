//! Fixed name table for the square-to-disk mappings.
//!
//! The names are part of the external contract and are matched exactly and
//! case-sensitively. Table order is the display order and carries no other
//! meaning.

use crate::{error, mapping::Mapping};

/// One row of the registry.
#[derive(Debug, Clone, Copy)]
pub struct MappingEntry {
    /// Display name and lookup key.
    pub name: &'static str,
    /// The mapping registered under `name`.
    pub mapping: Mapping,
    /// One-line description.
    pub info: &'static str,
}

/// All mappings in display order. Row `i` holds `Mapping::ALL[i]`.
pub static REGISTRY: [MappingEntry; 7] = [
    MappingEntry {
        name: "Superellipse (Lamé)",
        mapping: Mapping::Superellipse,
        info: "Radial rescale onto the L4 superellipse; axes stay fixed, corners round off",
    },
    MappingEntry {
        name: "Shirley-Chiu",
        mapping: Mapping::ShirleyChiu,
        info: "Concentric squares to concentric circles, octant by octant",
    },
    MappingEntry {
        name: "FG-Squircular",
        mapping: Mapping::FgSquircular,
        info: "Fernández-Guasti squircle with squareness 1",
    },
    MappingEntry {
        name: "Simple Radial",
        mapping: Mapping::SimpleRadial,
        info: "Projects every point onto the square's boundary along its ray",
    },
    MappingEntry {
        name: "Naïve Polar",
        mapping: Mapping::NaivePolar,
        info: "Polar round-trip; the identity, kept as a baseline",
    },
    MappingEntry {
        name: "Equal-Area Approx",
        mapping: Mapping::EqualAreaApprox,
        info: "Square-root radial compression; can leave the unit square",
    },
    MappingEntry {
        name: "Polynomial (Conformal)",
        mapping: Mapping::Polynomial,
        info: "z + 0.0731647 z^5 + 0.00358709 z^9, a truncated Schwarz-Christoffel series",
    },
];

/// Registry names in display order.
pub const MAPPING_NAMES: [&str; 7] = [
    "Superellipse (Lamé)",
    "Shirley-Chiu",
    "FG-Squircular",
    "Simple Radial",
    "Naïve Polar",
    "Equal-Area Approx",
    "Polynomial (Conformal)",
];

/// Registry row for a mapping.
pub fn entry(mapping: Mapping) -> &'static MappingEntry {
    &REGISTRY[mapping as usize]
}

/// Resolve an exact registry name.
pub fn lookup(name: &str) -> error::Result<Mapping> {
    REGISTRY
        .iter()
        .find(|e| e.name == name)
        .map(|e| e.mapping)
        .ok_or_else(|| error::Error::UnknownMapping(name.to_string()))
}

/// The first two registry entries, the default side-by-side comparison.
pub fn default_pair() -> (Mapping, Mapping) {
    (REGISTRY[0].mapping, REGISTRY[1].mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_variant_order() {
        for (i, m) in Mapping::ALL.iter().enumerate() {
            assert_eq!(REGISTRY[i].mapping, *m);
            assert_eq!(REGISTRY[i].name, MAPPING_NAMES[i]);
            assert_eq!(entry(*m).name, MAPPING_NAMES[i]);
        }
    }

    #[test]
    fn lookup_is_exact() -> error::Result<()> {
        assert_eq!(lookup("Shirley-Chiu")?, Mapping::ShirleyChiu);
        assert_eq!(lookup("Naïve Polar")?, Mapping::NaivePolar);
        assert!(lookup("shirley-chiu").is_err());
        assert!(lookup("Naive Polar").is_err());
        assert!(lookup(" Shirley-Chiu").is_err());
        assert!(lookup("").is_err());
        Ok(())
    }

    #[test]
    fn unknown_name_lists_options() {
        let err = lookup("Mercator").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Mercator"));
        for name in MAPPING_NAMES {
            assert!(msg.contains(name), "{msg}");
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_pair(), (Mapping::Superellipse, Mapping::ShirleyChiu));
    }
}
