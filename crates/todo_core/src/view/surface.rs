//! Display surface contract.
//!
//! # Responsibility
//! - Name the display regions the core reads and writes.
//! - Provide an in-memory surface for headless hosts and tests.
//!
//! # Invariants
//! - Core code touches the display only through `Surface` methods.
//! - Rewriting the list body discards every row's edit mode.

use std::collections::BTreeSet;

/// Named display regions addressed by the render engine and controller.
pub trait Surface {
    /// Replaces the list body markup.
    fn set_list_markup(&mut self, markup: String);
    /// Shows or hides the main section.
    fn set_main_visible(&mut self, visible: bool);
    /// Sets the "toggle all" control's checked state.
    fn set_toggle_all_checked(&mut self, checked: bool);
    /// Shows or hides the footer region.
    fn set_footer_visible(&mut self, visible: bool);
    /// Replaces the footer markup.
    fn set_footer_markup(&mut self, markup: String);
    /// Moves input focus to the new-item entry field.
    fn focus_entry(&mut self);
    /// Empties the new-item entry field.
    fn clear_entry(&mut self);
    /// Marks the row for `id` as editing and focuses its edit field.
    fn begin_row_edit(&mut self, id: &str);
    /// Removes focus from the edit field of the row for `id`.
    ///
    /// Hosts are expected to follow this with a focus-out signal.
    fn blur_edit_field(&mut self, id: &str);
}

/// Which element currently holds input focus on a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    Entry,
    EditField(String),
}

/// Surface that records the last written state of every region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub list_markup: String,
    pub main_visible: bool,
    pub toggle_all_checked: bool,
    pub footer_visible: bool,
    pub footer_markup: String,
    pub entry_text: String,
    pub focus: Focus,
    pub editing_rows: BTreeSet<String>,
    pub blurred: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_rows.contains(id)
    }
}

impl Surface for MemorySurface {
    fn set_list_markup(&mut self, markup: String) {
        self.list_markup = markup;
        self.editing_rows.clear();
    }

    fn set_main_visible(&mut self, visible: bool) {
        self.main_visible = visible;
    }

    fn set_toggle_all_checked(&mut self, checked: bool) {
        self.toggle_all_checked = checked;
    }

    fn set_footer_visible(&mut self, visible: bool) {
        self.footer_visible = visible;
    }

    fn set_footer_markup(&mut self, markup: String) {
        self.footer_markup = markup;
    }

    fn focus_entry(&mut self) {
        self.focus = Focus::Entry;
    }

    fn clear_entry(&mut self) {
        self.entry_text.clear();
    }

    fn begin_row_edit(&mut self, id: &str) {
        self.editing_rows.insert(id.to_string());
        self.focus = Focus::EditField(id.to_string());
    }

    fn blur_edit_field(&mut self, id: &str) {
        if self.focus == Focus::EditField(id.to_string()) {
            self.focus = Focus::None;
        }
        self.blurred.push(id.to_string());
    }
}
