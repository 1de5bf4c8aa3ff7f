/// Default location of the pronunciation recordings.
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://quileutelanguage.com/data/audio";

/// Number of recordings stored per folder on the audio host.
const FILES_PER_FOLDER: u64 = 1000;

/// Maps audio file identifiers to download URLs.
///
/// Recordings are bucketed by their numeric id: `1042.mp3` lives in folder
/// `1`, `999.mp3` in folder `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioUrlDeriver {
    base_url: String,
}

impl AudioUrlDeriver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for `audio_file_id`.
    ///
    /// Returns `None` when the id is absent, blank, or does not start with a
    /// number before its first `.`.
    pub fn derive(&self, audio_file_id: Option<&str>) -> Option<String> {
        let file = audio_file_id.map(str::trim).filter(|f| !f.is_empty())?;
        let stem = file.split('.').next().unwrap_or(file);
        let number: u64 = stem.parse().ok()?;
        let folder = number / FILES_PER_FOLDER;

        Some(format!("{}/{}/{}", self.base_url, folder, file))
    }
}

impl Default for AudioUrlDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_BASE_URL)
    }
}
