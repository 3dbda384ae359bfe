//! Route paths and form field names.

/// The only relay route.
pub const SEND_PATH: &str = "/send";

pub const NAME_FIELD: &str = "name";
pub const COMMENT_FIELD: &str = "comment";
pub const IMAGES_FIELD: &str = "images";

/// Prefix of temporary upload file names inside the upload directory.
pub const UPLOAD_PREFIX: &str = "upload-";
