//! Section Navigation
//!
//! The dashboard is a single page of sections; exactly one is shown at a time.

/// A top-level section of the page, in menu order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    Activities,
    Signup,
    StudentProfile,
    AttendanceMark,
    AttendanceHistory,
    NotificationSend,
    NotificationHistory,
    Waitlist,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Activities,
        Section::Signup,
        Section::StudentProfile,
        Section::AttendanceMark,
        Section::AttendanceHistory,
        Section::NotificationSend,
        Section::NotificationHistory,
        Section::Waitlist,
    ];

    /// DOM id of the section container
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard-container",
            Section::Activities => "activities-container",
            Section::Signup => "signup-container",
            Section::StudentProfile => "student-profile-container",
            Section::AttendanceMark => "attendance-mark-container",
            Section::AttendanceHistory => "attendance-history-container",
            Section::NotificationSend => "notification-send-container",
            Section::NotificationHistory => "notification-history-container",
            Section::Waitlist => "waitlist-container",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Activities => "Activities",
            Section::Signup => "Sign Up",
            Section::StudentProfile => "Student Profile",
            Section::AttendanceMark => "Mark Attendance",
            Section::AttendanceHistory => "Attendance History",
            Section::NotificationSend => "Send Notification",
            Section::NotificationHistory => "Notifications",
            Section::Waitlist => "Waitlist",
        }
    }

    /// Menu link target, e.g. `#dashboard-container`
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Resolve a menu link href back to its section
    pub fn from_href(href: &str) -> Option<Section> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Inline display style for the container given the active section
    pub fn display_style(self, active: Section) -> &'static str {
        if self == active {
            "display: block"
        } else {
            "display: none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_section_is_dashboard() {
        assert_eq!(Section::default(), Section::Dashboard);
    }

    #[test]
    fn test_href_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_href(&section.href()), Some(section));
        }
        assert_eq!(Section::from_href("#nowhere"), None);
    }

    #[test]
    fn test_exactly_one_section_visible() {
        let active = Section::AttendanceHistory;
        let visible: Vec<_> = Section::ALL
            .into_iter()
            .filter(|s| s.display_style(active) == "display: block")
            .collect();
        assert_eq!(visible, vec![Section::AttendanceHistory]);
    }
}
