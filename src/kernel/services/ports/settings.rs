use serde::{Deserialize, Serialize};

use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_language: LanguageId,
    #[serde(default = "default_seed_file_name")]
    pub seed_file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_content: Option<String>,
}

fn default_seed_file_name() -> String {
    "main.py".to_string()
}

impl Settings {
    pub fn seed_language(&self) -> LanguageId {
        self.seed_file_name
            .rsplit_once('.')
            .and_then(|(_, ext)| LanguageId::from_extension(ext))
            .unwrap_or(self.default_language)
    }

    pub fn seed_content(&self) -> &str {
        self.seed_content
            .as_deref()
            .unwrap_or_else(|| self.seed_language().starter_snippet())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: LanguageId::default(),
            seed_file_name: default_seed_file_name(),
            seed_content: None,
        }
    }
}
