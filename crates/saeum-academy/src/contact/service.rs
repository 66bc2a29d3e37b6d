use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::{ContactError, ContactRegistration, ContactSubmission};

/// Validates contact submissions and records them in the operational log.
///
/// Nothing is stored or forwarded; the log line is the only trace of a
/// registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactIntake;

impl ContactIntake {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactRegistration, ContactError> {
        self.submit_at(submission, Utc::now())
    }

    pub fn submit_at(
        &self,
        submission: ContactSubmission,
        received_at: DateTime<Utc>,
    ) -> Result<ContactRegistration, ContactError> {
        let phone_number = submission.phone_number();
        info!(
            student_name = %submission.student_name,
            school = %submission.school,
            grade = %submission.grade,
            phone_number = %phone_number,
            %received_at,
            "received contact form submission"
        );

        let missing = submission.missing_fields();
        if !missing.is_empty() {
            warn!(?missing, "contact submission rejected");
            return Err(ContactError::ValidationFailed { missing });
        }

        let ContactSubmission {
            student_name,
            school,
            grade,
            ..
        } = submission;

        let registration = ContactRegistration {
            student_name,
            school,
            grade,
            phone_number,
            received_at,
        };

        info!(
            student_name = %registration.student_name,
            phone_number = %registration.phone_number,
            "contact registration accepted"
        );

        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn received_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 11, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    fn complete() -> ContactSubmission {
        ContactSubmission::from_fields([
            ("student-name", "홍길동"),
            ("school", ""),
            ("grade", ""),
            ("phone1", "010"),
            ("phone2", "1234"),
            ("phone3", "5678"),
        ])
    }

    #[test]
    fn accepts_complete_submission() {
        let registration = ContactIntake::new()
            .submit_at(complete(), received_at())
            .expect("submission accepted");
        assert_eq!(registration.student_name, "홍길동");
        assert_eq!(registration.phone_number, "010-1234-5678");
        assert_eq!(registration.school, "");
        assert_eq!(registration.received_at, received_at());
    }

    #[test]
    fn rejects_missing_student_name() {
        let submission = ContactSubmission {
            student_name: String::new(),
            school: "단대부고".to_string(),
            grade: "고1".to_string(),
            ..complete()
        };
        let err = ContactIntake::new()
            .submit(submission)
            .expect_err("name is required");
        assert_eq!(
            err,
            ContactError::ValidationFailed {
                missing: vec!["student-name"]
            }
        );
    }

    #[test]
    fn rejects_each_missing_phone_part() {
        for field in ["phone1", "phone2", "phone3"] {
            let mut submission = complete();
            match field {
                "phone1" => submission.phone1.clear(),
                "phone2" => submission.phone2.clear(),
                _ => submission.phone3.clear(),
            }
            let err = ContactIntake::new()
                .submit(submission)
                .expect_err("phone parts are required");
            assert_eq!(
                err,
                ContactError::ValidationFailed {
                    missing: vec![field]
                }
            );
        }
    }
}
