//! Endpoint URLs
//!
//! Every path segment and query value is percent-encoded here so callers can
//! pass raw form input.

use urlencoding::encode;

fn query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn dashboard(base: &str) -> String {
    format!("{}/dashboard", base)
}

pub fn activities(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn signup(base: &str, activity: &str, email: &str, name: &str, grade: &str) -> String {
    format!(
        "{}/activities/{}/signup?{}",
        base,
        encode(activity),
        query(&[("email", email), ("name", name), ("grade", grade)])
    )
}

pub fn unregister(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/unregister?{}",
        base,
        encode(activity),
        query(&[("email", email)])
    )
}

pub fn mark_attendance(
    base: &str,
    activity: &str,
    student_email: &str,
    date: &str,
    present: bool,
    user_email: &str,
) -> String {
    let present = if present { "true" } else { "false" };
    format!(
        "{}/activities/{}/attendance?{}",
        base,
        encode(activity),
        query(&[
            ("student_email", student_email),
            ("date", date),
            ("present", present),
            ("user_email", user_email),
        ])
    )
}

pub fn waitlist(base: &str, activity: &str) -> String {
    format!("{}/activities/{}/waitlist", base, encode(activity))
}

pub fn remove_from_waitlist(base: &str, activity: &str, email: &str, user_email: &str) -> String {
    format!(
        "{}/activities/{}/waitlist/remove?{}",
        base,
        encode(activity),
        query(&[("email", email), ("user_email", user_email)])
    )
}

pub fn students(base: &str, email: &str, name: &str, grade: &str) -> String {
    format!(
        "{}/students?{}",
        base,
        query(&[("email", email), ("name", name), ("grade", grade)])
    )
}

pub fn student(base: &str, email: &str) -> String {
    format!("{}/students/{}", base, encode(email))
}

pub fn student_attendance(base: &str, email: &str, user_email: &str) -> String {
    format!(
        "{}/attendance?{}",
        student(base, email),
        query(&[("user_email", user_email)])
    )
}

pub fn notify(base: &str, email: &str, message: &str, user_email: &str) -> String {
    format!(
        "{}/notify?{}",
        student(base, email),
        query(&[("message", message), ("user_email", user_email)])
    )
}

pub fn notifications(base: &str, email: &str) -> String {
    format!("{}/notifications", student(base, email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_endpoints() {
        assert_eq!(dashboard(""), "/dashboard");
        assert_eq!(activities("http://localhost:8000"), "http://localhost:8000/activities");
    }

    #[test]
    fn test_signup_encodes_path_and_query() {
        let url = signup("", "Chess Club", "a+b@x.com", "Ana María", "10");
        assert_eq!(
            url,
            "/activities/Chess%20Club/signup?email=a%2Bb%40x.com&name=Ana%20Mar%C3%ADa&grade=10"
        );
    }

    #[test]
    fn test_unregister() {
        assert_eq!(
            unregister("", "Art/Design", "kid@school.edu"),
            "/activities/Art%2FDesign/unregister?email=kid%40school.edu"
        );
    }

    #[test]
    fn test_mark_attendance_query_order() {
        let url = mark_attendance("", "Gym Class", "s@x.com", "2024-09-01", false, "t@x.com");
        assert_eq!(
            url,
            "/activities/Gym%20Class/attendance?student_email=s%40x.com&date=2024-09-01&present=false&user_email=t%40x.com"
        );
        let url = mark_attendance("", "Gym Class", "s@x.com", "2024-09-01", true, "t@x.com");
        assert!(url.contains("&present=true&"));
    }

    #[test]
    fn test_student_endpoints() {
        assert_eq!(student("", "a@x.com"), "/students/a%40x.com");
        assert_eq!(
            student_attendance("", "a@x.com", "t@x.com"),
            "/students/a%40x.com/attendance?user_email=t%40x.com"
        );
        assert_eq!(notifications("", "a@x.com"), "/students/a%40x.com/notifications");
        assert_eq!(
            notify("", "a@x.com", "Bring shoes & water", "t@x.com"),
            "/students/a%40x.com/notify?message=Bring%20shoes%20%26%20water&user_email=t%40x.com"
        );
    }

    #[test]
    fn test_waitlist_and_profile_save() {
        assert_eq!(waitlist("", "Math Club"), "/activities/Math%20Club/waitlist");
        assert_eq!(
            remove_from_waitlist("", "Math Club", "a@x.com", "t@x.com"),
            "/activities/Math%20Club/waitlist/remove?email=a%40x.com&user_email=t%40x.com"
        );
        assert_eq!(
            students("", "a@x.com", "Ana", "9"),
            "/students?email=a%40x.com&name=Ana&grade=9"
        );
    }
}
