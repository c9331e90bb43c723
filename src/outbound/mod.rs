pub mod errors;
pub mod forms;
pub mod mailer;

pub use errors::SubmissionError;
pub use forms::{BrandBrief, ContactForm, TalentApplication};
pub use mailer::{Delivery, Mailer};
