// Clipboard access for the result-item actions
use crate::domain::error::TrqError;
use crate::domain::traits::ClipboardService;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::process::Command;

/// Key-injection helper used to synthesise the paste keystroke once the
/// clipboard is set. Probed once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasteHelper {
    /// wtype (Wayland)
    Wtype,
    /// xdotool (X11)
    Xdotool,
}

static PASTE_HELPER: Lazy<Option<PasteHelper>> = Lazy::new(detect_paste_helper);

fn detect_paste_helper() -> Option<PasteHelper> {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() && find_in_path("wtype").is_some() {
        return Some(PasteHelper::Wtype);
    }
    if find_in_path("xdotool").is_some() {
        return Some(PasteHelper::Xdotool);
    }
    None
}

fn find_in_path(bin: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(bin))
        .find(|candidate| candidate.is_file())
}

/// System clipboard plus optional paste synthesis.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn copy(text: &str) -> Result<(), TrqError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| TrqError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| TrqError::Clipboard(e.to_string()))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardService for SystemClipboard {
    fn paste_supported(&self) -> bool {
        PASTE_HELPER.is_some()
    }

    fn set_text(&self, text: &str) -> Result<(), TrqError> {
        Self::copy(text)
    }

    fn set_text_and_paste(&self, text: &str) -> Result<(), TrqError> {
        Self::copy(text)?;
        let status = match *PASTE_HELPER {
            Some(PasteHelper::Wtype) => Command::new("wtype")
                .args(["-M", "ctrl", "-P", "v", "-p", "v", "-m", "ctrl"])
                .status(),
            Some(PasteHelper::Xdotool) => Command::new("xdotool")
                .args(["key", "--clearmodifiers", "ctrl+v"])
                .status(),
            None => {
                return Err(TrqError::Clipboard(
                    "no paste helper available (wtype/xdotool)".to_string(),
                ))
            }
        };
        let status = status.map_err(|e| TrqError::Clipboard(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(TrqError::Clipboard(format!(
                "paste helper exited with {}",
                status
            )))
        }
    }
}
