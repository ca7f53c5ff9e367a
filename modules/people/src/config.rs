use serde::{Deserialize, Serialize};

/// Configuration for the people module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeopleConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for PeopleConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u64 {
    10
}
