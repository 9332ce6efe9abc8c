mod fields;
mod invitation;
mod record;
mod submission;

pub use fields::{FieldEdit, FieldId, IntakeFields};
pub use invitation::{extract_id, link_from_args};
pub use record::{PaymentAmount, Record, SUBMITTED_SENTINEL};
pub use submission::Submission;
