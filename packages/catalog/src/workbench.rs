//! # Workbench Tab
//!
//! One document being assembled from catalog entries: the current JSON
//! text, the picked category/option and a one-line status.

use crate::catalog::options;
use crate::kind::DocumentKind;
use tracing::{debug, info};
use workbench_patch::{apply, InsertDirective};

/// Category filter that shows every option
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct WorkbenchTab {
    title: String,
    options: Vec<InsertDirective>,
    categories: Vec<String>,
    selected_category: String,
    selected_option: Option<usize>,
    text: String,
    status: String,
}

impl WorkbenchTab {
    pub fn new(title: impl Into<String>, options: Vec<InsertDirective>, initial_json: impl Into<String>) -> Self {
        let mut categories: Vec<String> = options.iter().map(|o| o.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories.insert(0, ALL_CATEGORIES.to_string());

        let selected_option = if options.is_empty() { None } else { Some(0) };

        Self {
            title: title.into(),
            options,
            categories,
            selected_category: ALL_CATEGORIES.to_string(),
            selected_option,
            text: initial_json.into(),
            status: String::new(),
        }
    }

    /// Tab preloaded with the built-in catalog and starter document of `kind`
    pub fn for_kind(kind: DocumentKind) -> Self {
        Self::new(kind.title(), options(kind), kind.initial_json())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn options(&self) -> &[InsertDirective] {
        &self.options
    }

    /// `"All"` followed by the distinct categories, sorted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn selected_option(&self) -> Option<&InsertDirective> {
        self.selected_option.and_then(|idx| self.options.get(idx))
    }

    /// Replace the document text (manual edit); clears the status line
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.status.clear();
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn filtered_options(&self) -> impl Iterator<Item = &InsertDirective> + '_ {
        let show_all = self.selected_category == ALL_CATEGORIES;
        self.options
            .iter()
            .filter(move |o| show_all || o.category == self.selected_category)
    }

    /// Select by display name; returns whether an option matched
    pub fn select_option(&mut self, display_name: &str) -> bool {
        let found = self
            .options
            .iter()
            .position(|o| o.display_name.eq_ignore_ascii_case(display_name.trim()));
        if found.is_some() {
            self.selected_option = found;
        }
        found.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selected_option = None;
    }

    /// Apply the selected option to the document.
    ///
    /// On failure the document is kept and the status carries the error.
    /// Returns whether the document changed hands successfully.
    pub fn apply_selected(&mut self) -> bool {
        let Some(option) = self.selected_option().cloned() else {
            self.status = "Pick an option first.".to_string();
            return false;
        };

        let outcome = apply(&self.text, &option);
        match outcome.error {
            Some(error) => {
                debug!(option = %option.display_name, %error, "Option rejected");
                self.status = error;
                false
            }
            None => {
                info!(tab = %self.title, option = %option.display_name, "Option applied");
                self.text = outcome.text;
                self.status = format!("Added: {}", option.display_name);
                true
            }
        }
    }

    /// Select `display_name` and apply it
    pub fn apply_named(&mut self, display_name: &str) -> bool {
        if !self.select_option(display_name) {
            self.status = format!("Unknown option: {}", display_name);
            return false;
        }
        self.apply_selected()
    }
}
