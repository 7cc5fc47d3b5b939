//! Dataset compiled into the plugin binary.

use crate::domain::{Prompt, Result};
use crate::storage::json::parse_dataset;
use crate::storage::source::PromptSource;

const BUNDLED_PROMPTS: &str = include_str!("../../assets/prompts.json");

/// The built-in prompt collection, used when no `prompts_file` is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl PromptSource for BundledSource {
    fn load(&self) -> Result<Vec<Prompt>> {
        parse_dataset(BUNDLED_PROMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn bundled_dataset_is_valid() {
        let prompts = BundledSource.load().unwrap();
        let catalog = Catalog::new(prompts).unwrap();
        assert!(catalog.len() > 12, "bundled set should span several pages");
        assert_eq!(catalog.categories()[0], "All");
        assert!(catalog.categories().len() > 2);
    }
}
