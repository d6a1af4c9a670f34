//! File filtering for the drag-and-drop upload zone.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both dropped files and files picked through the hidden `<input type=file>`
//! pass through [`select_uploads`], so only PDFs ever reach the server.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// The single content type the upload zone accepts.
pub const ACCEPTED_TYPE: &str = "application/pdf";

/// Classes added to the zone while a drag hovers over it.
pub const DRAG_HOVER_CLASSES: &str = "border-blue-500 bg-blue-50";

pub const NOTHING_ACCEPTED_MESSAGE: &str = "Molimo upload-ujte samo PDF fajlove";

/// Result of filtering a batch of candidate files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadSelection<T> {
    pub accepted: Vec<T>,
    pub rejected: usize,
}

impl<T> UploadSelection<T> {
    /// Message to surface for this batch, if any.
    pub fn feedback(&self) -> Option<String> {
        if self.accepted.is_empty() {
            Some(NOTHING_ACCEPTED_MESSAGE.to_owned())
        } else if self.rejected > 0 {
            Some(skipped_files_message(self.rejected))
        } else {
            None
        }
    }
}

/// Split `files` into those of [`ACCEPTED_TYPE`] and a count of the rest.
pub fn select_uploads<T, I, F>(files: I, content_type: F) -> UploadSelection<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> String,
{
    let mut accepted = Vec::new();
    let mut rejected = 0;
    for file in files {
        if is_accepted(&content_type(&file)) {
            accepted.push(file);
        } else {
            rejected += 1;
        }
    }
    UploadSelection { accepted, rejected }
}

pub fn is_accepted(content_type: &str) -> bool {
    content_type.eq_ignore_ascii_case(ACCEPTED_TYPE)
}

fn skipped_files_message(rejected: usize) -> String {
    format!("Preskočeno {rejected} fajl(ova) koji nisu PDF")
}

/// Success text after the server stored `count` documents.
pub fn uploaded_message(count: usize) -> String {
    format!("✅ Učitano {count} dokument(a)")
}

/// Zone classes for the current hover state.
pub fn zone_class(base: &str, hovering: bool) -> String {
    if hovering {
        format!("{base} {DRAG_HOVER_CLASSES}")
    } else {
        base.to_owned()
    }
}
