use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const FIELD_STUDENT_NAME: &str = "student-name";
pub const FIELD_SCHOOL: &str = "school";
pub const FIELD_GRADE: &str = "grade";
pub const FIELD_PHONE1: &str = "phone1";
pub const FIELD_PHONE2: &str = "phone2";
pub const FIELD_PHONE3: &str = "phone3";

/// Value recorded for a multipart field that arrives as a file upload.
pub const FILE_PART_VALUE: &str = "[object File]";

pub const ACCEPTED_MESSAGE: &str = "문자 수신 등록이 완료되었습니다!";
pub const REJECTED_MESSAGE: &str = "필수 정보를 모두 입력해주세요.";
pub const FAILED_MESSAGE: &str = "서버 오류로 인해 등록에 실패했습니다.";

/// Raw contact form values. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub student_name: String,
    pub school: String,
    pub grade: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
}

impl ContactSubmission {
    /// Builds a submission from decoded form pairs. The first value of a
    /// repeated field wins and unknown names are dropped.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut student_name: Option<String> = None;
        let mut school: Option<String> = None;
        let mut grade: Option<String> = None;
        let mut phone1: Option<String> = None;
        let mut phone2: Option<String> = None;
        let mut phone3: Option<String> = None;

        for (name, value) in fields {
            let slot = match name.as_ref() {
                FIELD_STUDENT_NAME => &mut student_name,
                FIELD_SCHOOL => &mut school,
                FIELD_GRADE => &mut grade,
                FIELD_PHONE1 => &mut phone1,
                FIELD_PHONE2 => &mut phone2,
                FIELD_PHONE3 => &mut phone3,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Self {
            student_name: student_name.unwrap_or_default(),
            school: school.unwrap_or_default(),
            grade: grade.unwrap_or_default(),
            phone1: phone1.unwrap_or_default(),
            phone2: phone2.unwrap_or_default(),
            phone3: phone3.unwrap_or_default(),
        }
    }

    /// Parent phone number as `phone1-phone2-phone3`, without reformatting.
    pub fn phone_number(&self) -> String {
        format!("{}-{}-{}", self.phone1, self.phone2, self.phone3)
    }

    /// Names of required fields left empty. School and grade are optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_STUDENT_NAME, &self.student_name),
            (FIELD_PHONE1, &self.phone1),
            (FIELD_PHONE2, &self.phone2),
            (FIELD_PHONE3, &self.phone3),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Accepted submission as recorded in the operational log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRegistration {
    pub student_name: String,
    pub school: String,
    pub grade: String,
    pub phone_number: String,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required contact fields are empty: {}", .missing.join(", "))]
    ValidationFailed { missing: Vec<&'static str> },
    #[error("contact submission could not be processed: {0}")]
    ProcessingFault(String),
}

/// Response body returned to the form. `status` always equals the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactAck {
    pub message: &'static str,
    pub status: u16,
}

impl ContactAck {
    pub const fn accepted() -> Self {
        Self {
            message: ACCEPTED_MESSAGE,
            status: 200,
        }
    }

    pub const fn rejected() -> Self {
        Self {
            message: REJECTED_MESSAGE,
            status: 400,
        }
    }

    pub const fn failed() -> Self {
        Self {
            message: FAILED_MESSAGE,
            status: 500,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<&ContactError> for ContactAck {
    fn from(error: &ContactError) -> Self {
        match error {
            ContactError::ValidationFailed { .. } => Self::rejected(),
            ContactError::ProcessingFault(_) => Self::failed(),
        }
    }
}

impl IntoResponse for ContactAck {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
