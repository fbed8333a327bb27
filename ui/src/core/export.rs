//! Export plumbing behind the export panel: file naming, CSV encoding, clipboard, and
//! delivery. Browser builds download through a Blob link; native builds save into the
//! user's download directory.

use std::borrow::Cow;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

use dioxus::logger::tracing::info;
use time::{macros::format_description, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("couldn't encode export: {0}")]
    Encode(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("couldn't deliver {filename}: {reason}")]
    Delivery { filename: String, reason: String },
}

impl ExportError {
    fn delivery(filename: &str, reason: impl ToString) -> Self {
        Self::Delivery {
            filename: filename.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Where a finished export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to the browser as a download.
    Downloaded,
    #[cfg(not(target_arch = "wasm32"))]
    Saved(PathBuf),
}

/// `bbb-subject-<id>-<yyyymmdd_hhmmss>.<ext>`
pub fn export_filename(subject: &str, format: ExportFormat, at: OffsetDateTime) -> String {
    let stamp = at
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("bbb-subject-{subject}-{stamp}.{}", format.extension())
}

/// RFC 4180 document: comma-separated fields, `\n` after every record. An empty
/// record becomes a blank line.
pub fn encode_csv<R: AsRef<[String]>>(records: impl IntoIterator<Item = R>) -> String {
    records.into_iter().fold(String::new(), |mut out, record| {
        for (i, field) in record.as_ref().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&quote_field(field));
        }
        out.push('\n');
        out
    })
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(text: &str) -> Result<(), ExportError> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
        .map_err(|err| ExportError::Clipboard(err.to_string()))
}

/// Copies through an off-screen textarea and `execCommand("copy")`, which works from
/// a click handler without clipboard permissions.
#[cfg(target_arch = "wasm32")]
pub fn copy_text(text: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let fail = |reason: &str| ExportError::Clipboard(reason.to_string());
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| fail("document unavailable"))?;
    let textarea: web_sys::HtmlTextAreaElement =
        hidden_element(&document, "textarea").map_err(|_| fail("couldn't create textarea"))?;
    textarea.set_value(text);
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|html| html.exec_command("copy").ok())
        .unwrap_or(false);
    textarea.remove();
    if copied {
        Ok(())
    } else {
        Err(fail("copy was blocked by the browser"))
    }
}

/// Hand `bytes` to the user under `filename`.
pub fn deliver(
    filename: &str,
    format: ExportFormat,
    bytes: &[u8],
) -> Result<Delivery, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let fail = |reason: &str| ExportError::delivery(filename, reason);
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).buffer());
        let options = BlobPropertyBag::new();
        options.set_type(format.mime());
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|_| fail("couldn't create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| fail("couldn't create object URL"))?;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| fail("document unavailable"))?;
        let anchor: HtmlAnchorElement =
            hidden_element(&document, "a").map_err(|_| fail("couldn't create link"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        info!(filename, bytes = bytes.len(), "export downloaded");
        Ok(Delivery::Downloaded)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = export_dir().ok_or_else(|| {
            ExportError::delivery(filename, "no download or data directory available")
        })?;
        dioxus::logger::tracing::debug!(
            format = format.extension(),
            dir = %dir.display(),
            "saving export"
        );
        save_into(&dir, filename, bytes).map(Delivery::Saved)
    }
}

/// Off-screen element appended to `<body>`, ready to be used once and removed.
#[cfg(target_arch = "wasm32")]
fn hidden_element<T: wasm_bindgen::JsCast>(
    document: &web_sys::Document,
    tag: &str,
) -> Result<T, wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let element = document.create_element(tag)?;
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let style = html.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", "-9999px")?;
        style.set_property("opacity", "0")?;
    }
    document
        .body()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("missing body"))?
        .append_child(&element)?;
    element.dyn_into::<T>().map_err(wasm_bindgen::JsValue::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn export_dir() -> Option<PathBuf> {
    use directories::{ProjectDirs, UserDirs};

    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .or_else(|| {
            ProjectDirs::from("org", "bbb", "bbb-dashboard")
                .map(|dirs| dirs.data_dir().join("exports"))
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn save_into(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|err| ExportError::delivery(filename, err))?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|err| ExportError::delivery(filename, err))?;
    info!(path = %path.display(), bytes = bytes.len(), "export saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn filename_carries_subject_stamp_and_extension() {
        let at = datetime!(2024-03-07 09:05:01 UTC);
        assert_eq!(
            export_filename("941", ExportFormat::Csv, at),
            "bbb-subject-941-20240307_090501.csv"
        );
        assert_eq!(
            export_filename("940", ExportFormat::Json, at),
            "bbb-subject-940-20240307_090501.json"
        );
    }

    #[test]
    fn csv_quotes_only_when_needed() {
        let csv = encode_csv([
            record(&["plain", "a,b"]),
            Vec::new(),
            record(&["say \"hi\"", "line\r\nbreak"]),
        ]);
        assert_eq!(
            csv,
            "plain,\"a,b\"\n\n\"say \"\"hi\"\"\",\"line\r\nbreak\"\n"
        );
        assert!(matches!(quote_field("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn formats_map_to_mime_types() {
        assert_eq!(ExportFormat::Json.mime(), "application/json");
        assert_eq!(ExportFormat::Csv.mime(), "text/csv");
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = std::env::temp_dir()
            .join(format!("bbb-export-{}", std::process::id()))
            .join("nested");

        let path = save_into(&dir, "out.csv", b"field,value\n").unwrap();

        assert_eq!(path, dir.join("out.csv"));
        assert_eq!(std::fs::read(&path).unwrap(), b"field,value\n");
        std::fs::remove_dir_all(dir.parent().unwrap()).ok();
    }
}
