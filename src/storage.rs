//! Filesystem access: the public asset directory and the contact log.
//!
//! Every filesystem touch in the portal goes through [`Storage`]. Assets are
//! read-only at request time; the log only ever grows, one appended block per
//! submission. There is no in-memory cache — each read reflects the current
//! on-disk state.

use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};

use chrono::Local;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::seed;

/// One contact-form submission, as persisted to the log.
///
/// Every field is guaranteed non-empty — the route handler substitutes
/// placeholders before constructing an entry, so the log never carries a
/// blank required field.
pub struct ContactEntry {
    pub fecha: String,
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
}

impl ContactEntry {
    /// Builds an entry stamped with the current local time.
    pub fn now(nombre: String, email: String, mensaje: String) -> Self {
        Self {
            fecha: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
            nombre,
            email,
            mensaje,
        }
    }

    /// The delimited block written to the log. External tooling parses this
    /// layout; field order and labels are fixed.
    pub fn to_block(&self) -> String {
        format!(
            "---\nFecha: {}\nNombre: {}\nEmail: {}\nMensaje:\n{}\n\n",
            self.fecha, self.nombre, self.email, self.mensaje,
        )
    }
}

/// Handle to the portal's on-disk state: `public/` and `data/consultas.txt`
/// under one base directory.
pub struct Storage {
    public_dir: PathBuf,
    log_file: PathBuf,
}

impl Storage {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        Self {
            public_dir: base.join("public"),
            log_file: base.join("data").join("consultas.txt"),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Creates `public/` and `data/`, writes the seed pages for any that are
    /// missing, and makes sure the contact log exists. Idempotent: files
    /// already on disk are left untouched.
    pub async fn ensure_initial_files(&self) -> io::Result<()> {
        fs::create_dir_all(&self.public_dir).await?;
        if let Some(data_dir) = self.log_file.parent() {
            fs::create_dir_all(data_dir).await?;
        }

        for (name, contents) in seed::PUBLIC_FILES {
            let path = self.public_dir.join(name);
            if fs::metadata(&path).await.is_err() {
                fs::write(&path, contents).await?;
                debug!(file = %path.display(), "seeded public file");
            }
        }

        if fs::metadata(&self.log_file).await.is_err() {
            fs::write(&self.log_file, "").await?;
            debug!(file = %self.log_file.display(), "created empty contact log");
        }
        Ok(())
    }

    /// Reads a static asset addressed by a request path.
    ///
    /// The path is confined to `public/`: traversal sequences are resolved
    /// lexically and anything that would climb past the root is discarded
    /// before joining. A target that is missing or not a regular file yields
    /// an [`ErrorKind::NotFound`] error; read failures keep their own kind.
    pub async fn read_asset(&self, raw_path: &str) -> io::Result<Vec<u8>> {
        let path = self.public_dir.join(confine(raw_path));

        let is_file = match fs::metadata(&path).await {
            Ok(meta) => meta.is_file(),
            Err(_) => false,
        };
        if !is_file {
            return Err(io::Error::new(
                ErrorKind::NotFound,
                format!("no public file at {raw_path}"),
            ));
        }

        fs::read(&path).await
    }

    /// Reads the whole contact log. A log that does not exist yet reads as
    /// empty — only that one failure is success; every other error
    /// propagates.
    pub async fn read_log(&self) -> io::Result<String> {
        match fs::read_to_string(&self.log_file).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Appends one entry to the contact log as a single write call.
    ///
    /// Per-call atomicity at the I/O layer is all the coordination this
    /// low-traffic log gets; entries are never rewritten or reordered.
    pub async fn append_entry(&self, entry: &ContactEntry) -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.log_file)
            .await?;
        file.write_all(entry.to_block().as_bytes()).await?;
        file.flush().await
    }
}

/// Reduces a request path to a relative path that cannot escape the asset
/// root: strip the leading separator, resolve `.`/`..` lexically, and drop
/// any `..` left over at the front.
fn confine(raw: &str) -> PathBuf {
    let trimmed = raw.trim_start_matches('/');
    let mut kept = PathBuf::new();
    for component in Path::new(trimmed).components() {
        match component {
            Component::Normal(part) => kept.push(part),
            // Popping on an already-empty path drops a leading escape.
            Component::ParentDir => {
                kept.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    kept
}

/// Content type for an asset path, derived from its extension.
///
/// The table is fixed; anything unrecognised is served as raw bytes.
pub fn content_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confinement_holds_under_adversarial_paths() {
        let attempts = [
            "../../etc/passwd",
            "/../../etc/passwd",
            "..",
            "../",
            "./../..",
            "a/../../b",
            "a/b/../../../c",
            "/..//..//secreto.txt",
            "....//....//x",
        ];
        for raw in attempts {
            let confined = confine(raw);
            assert!(
                confined
                    .components()
                    .all(|c| matches!(c, Component::Normal(_))),
                "{raw:?} confined to {confined:?}",
            );
            let joined = Path::new("/srv/public").join(&confined);
            assert!(joined.starts_with("/srv/public"), "{raw:?} escaped: {joined:?}");
        }
    }

    #[test]
    fn confinement_keeps_ordinary_paths() {
        assert_eq!(confine("/estilos.css"), PathBuf::from("estilos.css"));
        assert_eq!(confine("img/logo.png"), PathBuf::from("img/logo.png"));
        assert_eq!(confine("/a/./b.txt"), PathBuf::from("a/b.txt"));
    }

    #[test]
    fn content_types_follow_the_table() {
        assert_eq!(content_type("/estilos.css"), "text/css; charset=utf-8");
        assert_eq!(content_type("index.html"), "text/html; charset=utf-8");
        assert_eq!(content_type("foto.JPG"), "image/jpeg");
        assert_eq!(content_type("datos.json"), "application/json; charset=utf-8");
        assert_eq!(content_type("favicon.ico"), "image/x-icon");
        assert_eq!(content_type("misterio.xyz"), "application/octet-stream");
        assert_eq!(content_type("sin_extension"), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_log_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        assert_eq!(storage.read_log().await.unwrap(), "");
    }

    #[tokio::test]
    async fn appended_entries_come_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        storage.ensure_initial_files().await.unwrap();

        for i in 1..=3 {
            let entry = ContactEntry {
                fecha: format!("01/01/2026 00:00:0{i}"),
                nombre: format!("Persona {i}"),
                email: format!("p{i}@x.com"),
                mensaje: format!("Mensaje {i}"),
            };
            storage.append_entry(&entry).await.unwrap();
        }

        let log = storage.read_log().await.unwrap();
        let blocks: Vec<&str> = log.split("---\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            assert!(block.contains(&format!("Nombre: Persona {}", i + 1)));
        }
    }

    #[tokio::test]
    async fn entry_block_layout_is_exact() {
        let entry = ContactEntry {
            fecha: "02/03/2026 10:20:30".into(),
            nombre: "Ana".into(),
            email: "ana@x.com".into(),
            mensaje: "Hola".into(),
        };
        assert_eq!(
            entry.to_block(),
            "---\nFecha: 02/03/2026 10:20:30\nNombre: Ana\nEmail: ana@x.com\nMensaje:\nHola\n\n",
        );
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent_and_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        storage.ensure_initial_files().await.unwrap();

        let index = storage.public_dir().join("index.html");
        fs::write(&index, "editado a mano").await.unwrap();
        storage.ensure_initial_files().await.unwrap();

        assert_eq!(fs::read_to_string(&index).await.unwrap(), "editado a mano");
        assert!(fs::metadata(storage.log_file()).await.unwrap().is_file());
    }

    #[tokio::test]
    async fn traversal_reads_stay_inside_public() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        storage.ensure_initial_files().await.unwrap();
        fs::write(dir.path().join("secreto.txt"), "no leer").await.unwrap();

        // Resolves to public/secreto.txt, which does not exist.
        let err = storage.read_asset("../secreto.txt").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        // A confined duplicate is served normally.
        fs::write(storage.public_dir().join("secreto.txt"), "publico").await.unwrap();
        let bytes = storage.read_asset("../../secreto.txt").await.unwrap();
        assert_eq!(bytes, b"publico");
    }

    #[tokio::test]
    async fn directories_are_not_assets() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());
        storage.ensure_initial_files().await.unwrap();

        let err = storage.read_asset("/").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
