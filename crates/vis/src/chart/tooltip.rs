//! Hover labels of activity points.

/// Formats the hover label of a point.
///
/// Points that earned eco points show them next to the value.
pub fn hover_text(label: &str, y: f64, eco: f64) -> String {
    if eco != 0.0 {
        format!("{label}: {y} (Eco Points: {eco})")
    } else {
        format!("{label}: {y}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_only_without_eco_points() {
        assert_eq!(hover_text("Your Steps", 1200.0, 0.0), "Your Steps: 1200");
    }

    #[test]
    fn value_and_eco_points() {
        assert_eq!(
            hover_text("Your Cycling Distance", 12.5, 3.25),
            "Your Cycling Distance: 12.5 (Eco Points: 3.25)"
        );
    }
}
