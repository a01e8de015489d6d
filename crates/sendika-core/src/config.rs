use std::path::{Path, PathBuf};

use crate::constants::{API_BASE_URL, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory holding the persisted read-state and unread-count files
    pub data_dir: PathBuf,
    pub api_base_url: String,
    /// Notifications requested per feed page
    pub page_size: u32,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            api_base_url: API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sendika");
        Self::new(data_dir)
    }
}
