//! Conservation-status display hints.

/// Icon and color pair for rendering a conservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    /// Marker glyph for the status.
    pub icon: &'static str,
    /// Hex color for the status text.
    pub color: &'static str,
}

/// Map a conservation status string to a display icon and color.
///
/// Keyword checks run against the lowercased status and are unanchored, so
/// the order below is load-bearing: "critically" must be tested before the
/// bare "endangered" check, which would otherwise also fire on
/// "Critically Endangered". Unrecognized or empty text maps to the unknown
/// marker.
pub fn status_display(status: &str) -> StatusDisplay {
    let status_lower = status.to_lowercase();
    if status_lower.contains("extinct") {
        StatusDisplay {
            icon: "\u{1f534}",
            color: "#ff0000",
        }
    } else if status_lower.contains("critically") {
        StatusDisplay {
            icon: "\u{26a0}\u{fe0f}",
            color: "#ff4500",
        }
    } else if status_lower.contains("endangered") {
        StatusDisplay {
            icon: "\u{26a0}\u{fe0f}",
            color: "#ff8c00",
        }
    } else if status_lower.contains("vulnerable") {
        StatusDisplay {
            icon: "\u{26a0}\u{fe0f}",
            color: "#ffd700",
        }
    } else if status_lower.contains("near") && status_lower.contains("threatened") {
        StatusDisplay {
            icon: "\u{26a0}\u{fe0f}",
            color: "#ffff00",
        }
    } else if status_lower.contains("least") && status_lower.contains("concern") {
        StatusDisplay {
            icon: "\u{2705}",
            color: "#90ee90",
        }
    } else {
        StatusDisplay {
            icon: "\u{2753}",
            color: "#808080",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critically_endangered_precedes_endangered() {
        let display = status_display("Critically Endangered");
        assert_eq!(display.color, "#ff4500");
        assert_eq!(display.icon, "\u{26a0}\u{fe0f}");
    }

    #[test]
    fn test_endangered() {
        assert_eq!(status_display("Endangered").color, "#ff8c00");
    }

    #[test]
    fn test_extinct_precedes_everything() {
        assert_eq!(status_display("Extinct in the Wild").color, "#ff0000");
        assert_eq!(status_display("Extinct in the Wild").icon, "\u{1f534}");
    }

    #[test]
    fn test_vulnerable() {
        assert_eq!(status_display("Vulnerable").color, "#ffd700");
    }

    #[test]
    fn test_near_threatened_requires_both_keywords() {
        assert_eq!(status_display("Near Threatened").color, "#ffff00");
        // "Threatened" alone is not a recognized bucket.
        assert_eq!(status_display("Threatened").color, "#808080");
    }

    #[test]
    fn test_least_concern_distinct_from_critical() {
        let least = status_display("Least Concern");
        let critical = status_display("Critically Endangered");
        assert_eq!(least.icon, "\u{2705}");
        assert_eq!(least.color, "#90ee90");
        assert_ne!(least, critical);
    }

    #[test]
    fn test_unknown_and_empty_map_to_gray() {
        for status in ["", "Data Deficient", "garbage"] {
            let display = status_display(status);
            assert_eq!(display.icon, "\u{2753}");
            assert_eq!(display.color, "#808080");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(status_display("ENDANGERED").color, "#ff8c00");
        assert_eq!(status_display("least concern").color, "#90ee90");
    }
}
