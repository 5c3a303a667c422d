use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::core::interfaces::ports::{FileInputState, ViewBindings};
use crate::core::models::{Region, SelectedFile};

#[derive(Debug)]
struct DocumentState {
    regions: HashMap<Region, String>,
    search_field: Option<String>,
    file_input: Option<Option<SelectedFile>>,
    custom_labels_field: Option<String>,
    results_section_visible: bool,
    alerts: Vec<String>,
}

/// In-memory stand-in for the album page: input fields plus the three
/// message/result regions, keyed by the same ids the markup uses.
#[derive(Debug)]
pub struct HtmlDocument {
    state: Mutex<DocumentState>,
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::with_standard_layout()
    }
}

impl HtmlDocument {
    pub fn with_standard_layout() -> Self {
        let regions = Region::ALL
            .iter()
            .map(|region| (*region, String::new()))
            .collect();

        Self {
            state: Mutex::new(DocumentState {
                regions,
                search_field: Some(String::new()),
                file_input: Some(None),
                custom_labels_field: Some(String::new()),
                results_section_visible: false,
                alerts: Vec::new(),
            }),
        }
    }

    #[allow(dead_code)]
    pub fn without_region(self, region: Region) -> Self {
        self.lock().regions.remove(&region);
        self
    }

    #[allow(dead_code)]
    pub fn without_search_field(self) -> Self {
        self.lock().search_field = None;
        self
    }

    #[allow(dead_code)]
    pub fn without_file_input(self) -> Self {
        self.lock().file_input = None;
        self
    }

    #[allow(dead_code)]
    pub fn without_custom_labels_field(self) -> Self {
        self.lock().custom_labels_field = None;
        self
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_search_query(&self, value: &str) {
        if let Some(field) = self.lock().search_field.as_mut() {
            *field = value.to_string();
        }
    }

    pub fn select_file(&self, file: SelectedFile) {
        log::debug!("[DOCUMENT] Selecting file {:?}", file);
        if let Some(input) = self.lock().file_input.as_mut() {
            *input = Some(file);
        }
    }

    pub fn set_custom_labels(&self, value: &str) {
        if let Some(field) = self.lock().custom_labels_field.as_mut() {
            *field = value.to_string();
        }
    }

    #[allow(dead_code)]
    pub fn region_markup(&self, region: Region) -> Option<String> {
        self.lock().regions.get(&region).cloned()
    }

    #[allow(dead_code)]
    pub fn custom_labels(&self) -> Option<String> {
        self.lock().custom_labels_field.clone()
    }

    pub fn has_selected_file(&self) -> bool {
        matches!(self.lock().file_input, Some(Some(_)))
    }

    #[allow(dead_code)]
    pub fn is_results_section_visible(&self) -> bool {
        self.lock().results_section_visible
    }

    #[allow(dead_code)]
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    /// Renders the requested regions as `<div id="…">` blocks, skipping any
    /// the page does not have.
    pub fn render_regions(&self, regions: &[Region]) -> String {
        let state = self.lock();
        regions
            .iter()
            .filter_map(|region| {
                state
                    .regions
                    .get(region)
                    .map(|markup| format!("<div id=\"{}\">{}</div>\n", region.id(), markup))
            })
            .collect()
    }
}

impl ViewBindings for HtmlDocument {
    fn search_query_value(&self) -> Option<String> {
        self.lock().search_field.clone()
    }

    fn file_input(&self) -> FileInputState {
        match &self.lock().file_input {
            None => FileInputState::Missing,
            Some(None) => FileInputState::Empty,
            Some(Some(file)) => FileInputState::Selected(file.clone()),
        }
    }

    fn custom_labels_value(&self) -> Option<String> {
        self.lock().custom_labels_field.clone()
    }

    fn clear_file_input(&self) {
        if let Some(input) = self.lock().file_input.as_mut() {
            *input = None;
        }
    }

    fn clear_custom_labels(&self) {
        if let Some(field) = self.lock().custom_labels_field.as_mut() {
            field.clear();
        }
    }

    fn replace_region(&self, region: Region, markup: &str) -> bool {
        match self.lock().regions.get_mut(&region) {
            Some(content) => {
                *content = markup.to_string();
                true
            }
            None => false,
        }
    }

    fn reveal_results_section(&self) {
        self.lock().results_section_visible = true;
    }

    fn alert(&self, text: &str) {
        log::error!("[DOCUMENT] Alert: {}", text);
        eprintln!("{}", text);
        self.lock().alerts.push(text.to_string());
    }

    fn open_in_new_context(&self, url: &str) -> anyhow::Result<()> {
        log::info!("[DOCUMENT] Opening {} in the system browser", url);
        open::that(url)?;
        Ok(())
    }
}
