//! Per-request domain models. Nothing here outlives a single submission.

pub mod email;
pub mod relay_result;
pub mod submission;

pub use email::{Attachment, EmailMessage};
pub use relay_result::{ProviderReply, RelayResult};
pub use submission::{discard_all, Submission, UploadedFile};
