//! TUI application state and key dispatch.
//!
//! The app forwards user intents to the [`Controller`] and renders whatever
//! state the controller exposes. Each intent drives exactly one request to
//! completion on the runtime before the next event is processed, so there
//! is no in-flight resubmission and nothing to cancel.

use crossterm::event::{KeyCode, KeyEvent};
use ticklist_client::{Controller, Filter};
use ticklist_core::TodoId;

/// Input mode the view is in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    Normal,
    /// Typing a new todo title
    Adding {
        /// Title typed so far
        buffer: String,
    },
    /// Editing the title of an existing todo
    Editing {
        /// Record being renamed
        id: TodoId,
        /// Title typed so far
        buffer: String,
    },
}

/// Terminal application state
pub struct App {
    /// Client state controller (authoritative for display)
    pub controller: Controller,
    /// Current input mode
    pub mode: Mode,
    /// Selected row within the visible (post-filter) list
    pub selected: usize,
    /// Last action failure, shown in the status line
    pub message: Option<String>,
    /// Set when the user asks to quit
    pub should_quit: bool,
    runtime: tokio::runtime::Runtime,
}

impl App {
    /// Create the app over a controller and the runtime that drives it
    #[must_use]
    pub fn new(controller: Controller, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            controller,
            mode: Mode::Normal,
            selected: 0,
            message: None,
            should_quit: false,
            runtime,
        }
    }

    /// Fetch the collection; failures land in the controller's load status
    pub fn load(&mut self) {
        let _ = self.runtime.block_on(self.controller.load());
        self.clamp_selection();
    }

    /// Dispatch a key event according to the current mode
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key.code),
            Mode::Adding { buffer } => self.handle_adding_key(key.code, buffer),
            Mode::Editing { id, buffer } => self.handle_editing_key(key.code, &id, buffer),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Active),
            KeyCode::Char('3') => self.set_filter(Filter::Done),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => {
                self.message = None;
                self.mode = Mode::Adding {
                    buffer: String::new(),
                };
            }
            KeyCode::Char('e') => {
                if let Some(todo) = self.selected_todo() {
                    self.message = None;
                    self.mode = Mode::Editing {
                        id: todo.0,
                        buffer: todo.1,
                    };
                }
            }
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('r') => self.load(),
            _ => {}
        }
    }

    fn handle_adding_key(&mut self, code: KeyCode, mut buffer: String) {
        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                // One request runs to completion here; the input stays
                // blocked until it resolves
                match self.runtime.block_on(self.controller.add(&buffer)) {
                    Ok(()) => {
                        // Cleared on success, ready for the next entry
                        self.mode = Mode::Adding {
                            buffer: String::new(),
                        };
                        self.clamp_selection();
                    }
                    Err(err) => {
                        self.message = Some(err.to_string());
                        self.mode = Mode::Adding { buffer };
                    }
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::Adding { buffer };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::Adding { buffer };
            }
            _ => self.mode = Mode::Adding { buffer },
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode, id: &TodoId, mut buffer: String) {
        match code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                match self.runtime.block_on(self.controller.rename(id, &buffer)) {
                    Ok(()) => self.mode = Mode::Normal,
                    Err(err) => {
                        self.message = Some(err.to_string());
                        self.mode = Mode::Editing {
                            id: id.clone(),
                            buffer,
                        };
                    }
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::Editing {
                    id: id.clone(),
                    buffer,
                };
            }
            KeyCode::Char(c) => {
                buffer.push(c);
                self.mode = Mode::Editing {
                    id: id.clone(),
                    buffer,
                };
            }
            _ => {
                self.mode = Mode::Editing {
                    id: id.clone(),
                    buffer,
                };
            }
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        self.controller.set_filter(filter);
        self.clamp_selection();
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len - 1;
        let next = self.selected as i64 + delta;
        self.selected = next.clamp(0, max as i64) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn selected_todo(&self) -> Option<(TodoId, String)> {
        self.controller
            .visible()
            .get(self.selected)
            .map(|t| (t.id.clone(), t.title.clone()))
    }

    fn toggle_selected(&mut self) {
        let Some((id, _)) = self.selected_todo() else {
            return;
        };
        let done = self
            .controller
            .todos()
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| !t.done);

        self.message = None;
        if let Err(err) = self.runtime.block_on(self.controller.toggle(&id, done)) {
            self.message = Some(err.to_string());
        }
        self.clamp_selection();
    }

    fn delete_selected(&mut self) {
        let Some((id, _)) = self.selected_todo() else {
            return;
        };

        self.message = None;
        if let Err(err) = self.runtime.block_on(self.controller.delete(&id)) {
            self.message = Some(err.to_string());
        }
        self.clamp_selection();
    }
}
