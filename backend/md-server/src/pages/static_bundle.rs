use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

const INDEX_FILE: &str = "index.html";

/// Dashboard bundle service; unknown paths fall back to `index.html` so
/// client-side routes load the app shell
pub fn static_bundle(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join(INDEX_FILE)))
}
