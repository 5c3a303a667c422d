use crate::core::models::{Region, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileInputState {
    Missing,
    Empty,
    Selected(SelectedFile),
}

/// Everything the client reads from or writes to the hosting page.
///
/// `None`/`Missing`/`false` returns mean the element is not part of the page,
/// which is an integration problem rather than a user error.
pub trait ViewBindings: Send + Sync {
    fn search_query_value(&self) -> Option<String>;

    fn file_input(&self) -> FileInputState;

    fn custom_labels_value(&self) -> Option<String>;

    fn clear_file_input(&self);

    fn clear_custom_labels(&self);

    fn replace_region(&self, region: Region, markup: &str) -> bool;

    fn reveal_results_section(&self);

    fn alert(&self, text: &str);

    fn open_in_new_context(&self, url: &str) -> anyhow::Result<()>;
}
