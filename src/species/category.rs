//! Conservation-category groups for known demo species.
//!
//! Used as a fallback when the classifier backend supplies no category of its
//! own. Group codes follow IUCN-style buckets: EN (endangered, split into two
//! demo groups), VU (vulnerable), NT (near threatened), LC (least concern).

use crate::constants::UNKNOWN_CATEGORY;

/// Species grouped by conservation category.
const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    (
        "EN(G1)",
        &[
            "Vaquita",
            "Pseudoryx nghetinhensis saola",
            "Eastern Lowland Gorilla",
            "Bornean Orangutan",
            "Black Rhino",
            "Amur Leopard",
            "African forest elephant",
        ],
    ),
    (
        "EN(G2)",
        &[
            "Black-footed Ferret",
            "Sea Turtle",
            "Red Panda",
            "Monarch Butterfly",
            "Humphead Wrasse",
            "Whale Shark",
            "African Wild Dog",
            "Sea Lions",
            "Chimpanzee",
        ],
    ),
    (
        "VU(G3)",
        &[
            "Black Spider Monkey",
            "Lion",
            "Greater One-Horned Rhino",
            "Dugong",
            "Hippopotamus",
            "Olive Ridley Turtle",
        ],
    ),
    (
        "NT(G4)",
        &[
            "Mountain Plover",
            "Beluga",
            "Yellowfin Tuna",
            "Greater Sage-Grouse",
            "Plains Bison",
            "Jaguar",
        ],
    ),
    (
        "LC(G5)",
        &[
            "Beaver",
            "Tree Kangaroo",
            "Macaw",
            "Swift Fox",
            "Arctic Wolf",
            "Arctic Fox",
        ],
    ),
];

/// Conservation category for a species label, or `"Unknown"`.
///
/// Matching trims whitespace and ignores case so minor label formatting
/// differences between model label files do not break the grouping.
pub fn category_for(label: &str) -> &'static str {
    let needle = label.trim().to_lowercase();
    for (category, members) in CATEGORY_GROUPS {
        if members
            .iter()
            .any(|member| member.trim().to_lowercase() == needle)
        {
            return category;
        }
    }
    UNKNOWN_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_species() {
        assert_eq!(category_for("Vaquita"), "EN(G1)");
        assert_eq!(category_for("Red Panda"), "EN(G2)");
        assert_eq!(category_for("Lion"), "VU(G3)");
        assert_eq!(category_for("Jaguar"), "NT(G4)");
        assert_eq!(category_for("Arctic Fox"), "LC(G5)");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(category_for("  vaquita "), "EN(G1)");
        assert_eq!(category_for("RED PANDA"), "EN(G2)");
    }

    #[test]
    fn test_unknown_species() {
        assert_eq!(category_for("Dodo"), "Unknown");
        assert_eq!(category_for(""), "Unknown");
    }
}
