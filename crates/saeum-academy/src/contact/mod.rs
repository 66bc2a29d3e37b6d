//! Contact form intake: field extraction, presence checks and the
//! acknowledgement returned to the browser.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    ContactAck, ContactError, ContactRegistration, ContactSubmission, ACCEPTED_MESSAGE,
    FAILED_MESSAGE, FILE_PART_VALUE, REJECTED_MESSAGE,
};
pub use router::contact_router;
pub use service::ContactIntake;
