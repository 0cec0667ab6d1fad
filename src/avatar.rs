// src/avatar.rs
//
// Importación de una imagen como avatar. Sólo se valida el tamaño; la
// imagen se guarda tal cual dentro del perfil como data URL.

use crate::error::ValidationError;
use crate::model::Avatar;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Tipo MIME a partir de la extensión; si no la conocemos va como binario
fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn import_image(file_name: &str, bytes: &[u8], limit: usize) -> Result<Avatar, ValidationError> {
    if bytes.len() > limit {
        log::info!("Avatar rechazado: {file_name} pesa {} bytes", bytes.len());
        return Err(ValidationError::AvatarTooLarge {
            limit_mb: limit / (1024 * 1024),
        });
    }
    let mime = mime_for(file_name);
    Ok(Avatar::Image(format!("data:{mime};base64,{}", STANDARD.encode(bytes))))
}

/// Bytes de un avatar de imagen, para pintarlo
pub fn decode_image(avatar: &Avatar) -> Option<Vec<u8>> {
    let Avatar::Image(url) = avatar else {
        return None;
    };
    let (_, payload) = url.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}
