//! HTTP API Client
//!
//! Functions for communicating with the activities REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::error::ClientError;
use super::routes;
use crate::state::models::{
    ActivityCatalog, AttendanceRecord, DashboardSummary, MessageResponse, Notification,
    SavedProfileResponse, StudentProfile, WaitlistEntry,
};

/// Decode a 2xx body as `T`, or turn a non-2xx response into `ClientError::Api`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::from_status(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    let response = Request::get(url).send().await?;
    read_json(response).await
}

async fn post<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    let response = Request::post(url).send().await?;
    read_json(response).await
}

async fn delete<T: DeserializeOwned>(url: &str) -> Result<T, ClientError> {
    let response = Request::delete(url).send().await?;
    read_json(response).await
}

// ============ Activities ============

/// Fetch aggregate dashboard numbers
pub async fn fetch_dashboard(base: &str) -> Result<DashboardSummary, ClientError> {
    get(&routes::dashboard(base)).await
}

/// Fetch the full activity catalog
pub async fn fetch_activities(base: &str) -> Result<ActivityCatalog, ClientError> {
    get(&routes::activities(base)).await
}

/// Sign a student up for an activity
pub async fn signup(
    base: &str,
    activity: &str,
    email: &str,
    name: &str,
    grade: &str,
) -> Result<MessageResponse, ClientError> {
    post(&routes::signup(base, activity, email, name, grade)).await
}

/// Remove a participant from an activity
pub async fn unregister(
    base: &str,
    activity: &str,
    email: &str,
) -> Result<MessageResponse, ClientError> {
    delete(&routes::unregister(base, activity, email)).await
}

/// Record attendance for one student on one date
pub async fn mark_attendance(
    base: &str,
    activity: &str,
    student_email: &str,
    date: &str,
    present: bool,
    user_email: &str,
) -> Result<MessageResponse, ClientError> {
    post(&routes::mark_attendance(
        base,
        activity,
        student_email,
        date,
        present,
        user_email,
    ))
    .await
}

pub async fn fetch_waitlist(base: &str, activity: &str) -> Result<Vec<WaitlistEntry>, ClientError> {
    get(&routes::waitlist(base, activity)).await
}

/// Remove a student from an activity's waitlist (teachers and admins only)
pub async fn remove_from_waitlist(
    base: &str,
    activity: &str,
    email: &str,
    user_email: &str,
) -> Result<MessageResponse, ClientError> {
    delete(&routes::remove_from_waitlist(base, activity, email, user_email)).await
}

// ============ Students ============

/// Create or update a student profile
pub async fn save_student(
    base: &str,
    email: &str,
    name: &str,
    grade: &str,
) -> Result<SavedProfileResponse, ClientError> {
    post(&routes::students(base, email, name, grade)).await
}

pub async fn fetch_student(base: &str, email: &str) -> Result<StudentProfile, ClientError> {
    get(&routes::student(base, email)).await
}

/// Fetch a student's attendance, authorized as `user_email`
pub async fn fetch_attendance(
    base: &str,
    email: &str,
    user_email: &str,
) -> Result<Vec<AttendanceRecord>, ClientError> {
    get(&routes::student_attendance(base, email, user_email)).await
}

pub async fn send_notification(
    base: &str,
    email: &str,
    message: &str,
    user_email: &str,
) -> Result<MessageResponse, ClientError> {
    post(&routes::notify(base, email, message, user_email)).await
}

pub async fn fetch_notifications(base: &str, email: &str) -> Result<Vec<Notification>, ClientError> {
    get(&routes::notifications(base, email)).await
}
