pub mod email;
pub mod relay;

pub use email::{EmailProvider, ResendProvider};
pub use relay::SubmissionRelay;
