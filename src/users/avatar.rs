/**
 * Avatar File Helpers
 *
 * Filename validation and generation for uploaded avatar images.
 */

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Public URL prefix under which uploaded avatars are served
pub const AVATAR_PUBLIC_PREFIX: &str = "/uploads/avatars";

/// Accepted avatar image extensions
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()?
        .to_str()
        .map(|ext| ext.to_ascii_lowercase())
}

/// Check whether an uploaded filename looks like an accepted image
pub fn is_valid_image_name(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Generate a unique on-disk filename for a user's avatar
///
/// The name embeds the owning user id and the upload instant, so
/// successive uploads never collide with each other or with other users.
pub fn avatar_filename(user_id: Uuid, original_filename: &str) -> String {
    let ext = extension(original_filename).unwrap_or_else(|| "bin".to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("user_{user_id}_{timestamp}.{ext}")
}
