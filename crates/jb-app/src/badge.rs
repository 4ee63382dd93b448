//! Application status badge colors.
//!
//! One mapping used everywhere a status is rendered, so the applicant
//! table, the profile preview, and the status dropdown never disagree.

use jb_models::ApplicationStatus;

/// Badge tint. Unknown labels fall back to gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Blue,
    Yellow,
    Red,
    Green,
    Gray,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "blue",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Red => "red",
            BadgeColor::Green => "green",
            BadgeColor::Gray => "gray",
        }
    }
}

/// Color for a known status.
pub fn badge_color(status: ApplicationStatus) -> BadgeColor {
    match status {
        ApplicationStatus::Applied => BadgeColor::Blue,
        ApplicationStatus::InReview => BadgeColor::Yellow,
        ApplicationStatus::Rejected => BadgeColor::Red,
        ApplicationStatus::Accepted => BadgeColor::Green,
    }
}

/// Color for a raw server label, gray when unrecognized.
pub fn badge_color_for_label(label: &str) -> BadgeColor {
    match ApplicationStatus::from_label(label) {
        Some(status) => badge_color(status),
        None => BadgeColor::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_color() {
        assert_eq!(badge_color(ApplicationStatus::Applied), BadgeColor::Blue);
        assert_eq!(badge_color(ApplicationStatus::InReview), BadgeColor::Yellow);
        assert_eq!(badge_color(ApplicationStatus::Rejected), BadgeColor::Red);
        assert_eq!(badge_color(ApplicationStatus::Accepted), BadgeColor::Green);
    }

    #[test]
    fn test_labels_resolve_through_the_canonical_set() {
        assert_eq!(badge_color_for_label("In Review"), BadgeColor::Yellow);
        assert_eq!(badge_color_for_label("Accepted"), BadgeColor::Green);
    }

    #[test]
    fn test_unknown_label_is_gray() {
        assert_eq!(badge_color_for_label("Interview"), BadgeColor::Gray);
        assert_eq!(badge_color_for_label("Hired"), BadgeColor::Gray);
        assert_eq!(badge_color_for_label(""), BadgeColor::Gray);
    }
}
