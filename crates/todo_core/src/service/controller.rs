//! UI signal dispatch.
//!
//! # Responsibility
//! - Translate interaction signals into `TodoState` mutations.
//! - Own per-edit session state (including the Escape abort marker).
//!
//! # Invariants
//! - Item references resolve by identifier, never by display position.
//! - Unresolvable references are logged no-ops and never panic.
//! - A new edit session always starts un-aborted.
//! - Callers must render after every dispatch that `needs_render()`.

use crate::model::item::ItemId;
use crate::model::item_list::TitleUpdate;
use crate::model::state::TodoState;
use crate::view::surface::Surface;
use log::{debug, warn};

/// Key code of the Enter key.
pub const ENTER_KEY: u32 = 13;
/// Key code of the Escape key.
pub const ESCAPE_KEY: u32 = 27;

/// Keys the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl Key {
    pub fn from_code(code: u32) -> Self {
        match code {
            ENTER_KEY => Self::Enter,
            ESCAPE_KEY => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Display region a listener is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Entry,
    ToggleAll,
    Footer,
    List,
}

/// Interaction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    KeyUp(Key),
    Change,
    Click,
    DoubleClick,
    FocusOut,
}

/// Role of the element a signal originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Entry,
    ToggleAll,
    ClearCompleted,
    Toggle,
    Label,
    EditField,
    Destroy,
    Other,
}

/// Origin element snapshot taken by the host when the signal fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub role: Role,
    /// Identifier bound to the nearest enclosing row, if any.
    pub row_id: Option<ItemId>,
    /// Current text value for input elements.
    pub value: String,
    /// Checked state for checkbox elements.
    pub checked: bool,
}

impl Origin {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            row_id: None,
            value: String::new(),
            checked: false,
        }
    }

    pub fn in_row(role: Role, row_id: impl Into<ItemId>) -> Self {
        Self {
            row_id: Some(row_id.into()),
            ..Self::new(role)
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// One interaction delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub region: Region,
    pub kind: SignalKind,
    pub origin: Origin,
}

impl Signal {
    pub fn new(region: Region, kind: SignalKind, origin: Origin) -> Self {
        Self {
            region,
            kind,
            origin,
        }
    }

    /// Key-up on the new-item entry field, keyed by host key code.
    pub fn entry_key_up(code: u32, value: impl Into<String>) -> Self {
        Self::new(
            Region::Entry,
            SignalKind::KeyUp(Key::from_code(code)),
            Origin::new(Role::Entry).with_value(value),
        )
    }

    /// Key-up on the edit field of row `row_id`.
    pub fn edit_key_up(code: u32, row_id: impl Into<ItemId>, value: impl Into<String>) -> Self {
        Self::list(
            SignalKind::KeyUp(Key::from_code(code)),
            Origin::in_row(Role::EditField, row_id).with_value(value),
        )
    }

    /// Change on the "toggle all" control.
    pub fn toggle_all(checked: bool) -> Self {
        Self::new(
            Region::ToggleAll,
            SignalKind::Change,
            Origin::new(Role::ToggleAll).with_checked(checked),
        )
    }

    /// Click inside the footer region.
    pub fn footer_click(role: Role) -> Self {
        Self::new(Region::Footer, SignalKind::Click, Origin::new(role))
    }

    /// Signal delegated to the list region from an element inside a row.
    pub fn list(kind: SignalKind, origin: Origin) -> Self {
        Self::new(Region::List, kind, origin)
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Guard not met; nothing happened.
    Ignored,
    /// State changed.
    Mutated,
    /// Row entered edit mode.
    EditStarted(ItemId),
    /// Edit field focus removal was requested; a focus-out signal follows.
    BlurRequested(ItemId),
    /// An aborted edit ended without changing the title.
    EditDiscarded(ItemId),
    /// Referenced item no longer exists.
    Skipped(ItemId),
}

impl Dispatch {
    pub fn needs_render(&self) -> bool {
        matches!(self, Self::Mutated | Self::EditDiscarded(_))
    }
}

/// Per-edit state owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub item_id: ItemId,
    pub aborted: bool,
}

/// Signal dispatcher.
#[derive(Debug, Default)]
pub struct EventController {
    edit: Option<EditSession>,
}

impl EventController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current edit session, if a row is being edited.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    fn is_editing(&self, id: &str) -> bool {
        self.edit
            .as_ref()
            .is_some_and(|session| session.item_id == id)
    }

    /// Routes one signal by region, kind and origin role.
    pub fn dispatch(
        &mut self,
        state: &mut TodoState,
        signal: &Signal,
        surface: &mut dyn Surface,
    ) -> Dispatch {
        let origin = &signal.origin;
        let outcome = match (signal.region, signal.kind, origin.role) {
            (Region::Entry, SignalKind::KeyUp(Key::Enter), _) => {
                self.create(state, &origin.value, surface)
            }
            (Region::ToggleAll, SignalKind::Change, _) => {
                state.items.toggle_all(origin.checked);
                Dispatch::Mutated
            }
            (Region::Footer, SignalKind::Click, Role::ClearCompleted) => {
                let removed = state.clear_completed();
                debug!("event=clear_completed module=controller status=ok removed={removed}");
                Dispatch::Mutated
            }
            (Region::List, SignalKind::Change, Role::Toggle) => {
                self.with_row(state, origin, |state, index| {
                    state.items.toggle_item(index);
                    Dispatch::Mutated
                })
            }
            (Region::List, SignalKind::DoubleClick, Role::Label) => {
                self.begin_edit(state, origin, surface)
            }
            (Region::List, SignalKind::KeyUp(key), Role::EditField) => {
                self.edit_key_up(key, origin, surface)
            }
            (Region::List, SignalKind::FocusOut, Role::EditField) => {
                self.finish_edit(state, origin)
            }
            (Region::List, SignalKind::Click, Role::Destroy) => {
                self.with_row(state, origin, |state, index| {
                    state.items.remove_item(index);
                    Dispatch::Mutated
                })
            }
            _ => Dispatch::Ignored,
        };

        if let Dispatch::Skipped(id) = &outcome {
            warn!(
                "event=signal_dispatch module=controller status=skipped reason=item_not_found id={}",
                id
            );
        }
        outcome
    }

    fn create(&self, state: &mut TodoState, value: &str, surface: &mut dyn Surface) -> Dispatch {
        match state.items.add_item(value) {
            Some(_) => {
                surface.clear_entry();
                Dispatch::Mutated
            }
            None => Dispatch::Ignored,
        }
    }

    /// Resolves the origin row to a list position and runs `mutate` on it.
    fn with_row(
        &self,
        state: &mut TodoState,
        origin: &Origin,
        mutate: impl FnOnce(&mut TodoState, usize) -> Dispatch,
    ) -> Dispatch {
        let Some(id) = origin.row_id.as_deref() else {
            return Dispatch::Ignored;
        };
        match state.items.index_of(id) {
            Some(index) => mutate(state, index),
            None => Dispatch::Skipped(id.to_string()),
        }
    }

    fn begin_edit(
        &mut self,
        state: &TodoState,
        origin: &Origin,
        surface: &mut dyn Surface,
    ) -> Dispatch {
        let Some(id) = origin.row_id.as_deref() else {
            return Dispatch::Ignored;
        };
        if state.items.index_of(id).is_none() {
            return Dispatch::Skipped(id.to_string());
        }

        self.edit = Some(EditSession {
            item_id: id.to_string(),
            aborted: false,
        });
        surface.begin_row_edit(id);
        Dispatch::EditStarted(id.to_string())
    }

    fn edit_key_up(&mut self, key: Key, origin: &Origin, surface: &mut dyn Surface) -> Dispatch {
        let Some(id) = origin.row_id.as_deref() else {
            return Dispatch::Ignored;
        };
        match key {
            Key::Enter => {}
            Key::Escape => {
                if !self.is_editing(id) {
                    self.edit = Some(EditSession {
                        item_id: id.to_string(),
                        aborted: false,
                    });
                }
                if let Some(session) = self.edit.as_mut() {
                    session.aborted = true;
                }
            }
            Key::Other => return Dispatch::Ignored,
        }
        surface.blur_edit_field(id);
        Dispatch::BlurRequested(id.to_string())
    }

    fn finish_edit(&mut self, state: &mut TodoState, origin: &Origin) -> Dispatch {
        let Some(id) = origin.row_id.as_deref() else {
            return Dispatch::Ignored;
        };

        let aborted = self.is_editing(id)
            && self.edit.take().is_some_and(|session| session.aborted);
        if aborted {
            debug!("event=edit_end module=controller status=ok result=discarded id={id}");
            return Dispatch::EditDiscarded(id.to_string());
        }

        self.with_row(state, origin, |state, index| {
            let result = match state.items.update_item_title(index, &origin.value) {
                TitleUpdate::Renamed => "renamed",
                TitleUpdate::Removed(_) => "removed",
                TitleUpdate::Missing => "missing",
            };
            debug!("event=edit_end module=controller status=ok result={result} id={id}");
            Dispatch::Mutated
        })
    }
}
