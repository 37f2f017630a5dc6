use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;
use board_core::SelectedFile;

const FALLBACK_MIME: &str = "application/octet-stream";

pub fn mime_for_file_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => FALLBACK_MIME,
    }
}

/// Reads a local file the way a file input hands it over.
pub fn load_selected_file(path: &Path) -> io::Result<SelectedFile> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SelectedFile {
        mime_type: mime_for_file_name(&file_name).to_string(),
        file_name,
        bytes,
    })
}

pub fn image_data_uri(file: &SelectedFile) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{};base64,{encoded}", file.mime_type)
}

/// Shows `file` in the preview image element. Returns `false` when there is
/// no file or no preview element.
pub fn preview_image(doc: &dyn crate::Document, preview: &str, file: Option<&SelectedFile>) -> bool {
    let Some(file) = file else {
        return false;
    };
    if !doc.exists(preview) {
        return false;
    }
    doc.set_attribute(preview, "src", &image_data_uri(file));
    doc.set_visible(preview, true);
    true
}

#[cfg(test)]
mod tests {
    use super::{image_data_uri, mime_for_file_name, preview_image};
    use crate::{Document, Element, MemoryDocument};
    use board_core::SelectedFile;

    fn pixel() -> SelectedFile {
        SelectedFile {
            file_name: "avatar.PNG".to_string(),
            mime_type: mime_for_file_name("avatar.PNG").to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[test]
    fn mime_follows_extension_case_insensitively() {
        assert_eq!(mime_for_file_name("avatar.PNG"), "image/png");
        assert_eq!(mime_for_file_name("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_file_name("notes"), "application/octet-stream");
    }

    #[test]
    fn data_uri_is_base64() {
        assert_eq!(image_data_uri(&pixel()), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn preview_sets_src_and_shows_element() {
        let doc = MemoryDocument::new().with_element("#image-preview", Element::new("").hidden());
        assert!(preview_image(&doc, "#image-preview", Some(&pixel())));
        let element = doc.element("#image-preview").unwrap();
        assert!(element.visible);
        assert_eq!(
            doc.attribute("#image-preview", "src").as_deref(),
            Some("data:image/png;base64,iVBORw==")
        );
    }

    #[test]
    fn preview_without_file_or_element_does_nothing() {
        let doc = MemoryDocument::new();
        assert!(!preview_image(&doc, "#image-preview", Some(&pixel())));
        let doc = MemoryDocument::new().with_element("#image-preview", Element::new("").hidden());
        assert!(!preview_image(&doc, "#image-preview", None));
        assert!(!doc.element("#image-preview").unwrap().visible);
    }
}
