//! The presentation state machine.
//!
//! Owns the two mutually-exclusive result surfaces plus the hidden state,
//! maps input events to search invocations, and debounces typing. The host
//! page implements [`SearchSurface`]; the controller only decides what to
//! show and pushes rendered markup through it, so every transition is
//! testable without a real display.

use super::render;
use crate::search::{IndexLoader, search, searchable};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period after the last input event before a search runs.
const DEBOUNCE_QUIET: Duration = Duration::from_millis(150);

/// The three presentation states. Dropdown and overlay never show together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Hidden,
    Dropdown,
    Overlay,
}

/// User interactions the controller reacts to.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    /// The input value changed. Schedules a debounced search.
    InputChanged(String),
    /// The input gained focus. Searches immediately when a query exists.
    InputFocused,
    /// Enter pressed in the input. Opens the overlay immediately.
    EnterPressed,
    /// Escape pressed anywhere in the search UI.
    EscapePressed,
    /// Arrow-down pressed in the input or a result row.
    ArrowDown,
    /// Arrow-up pressed in a result row.
    ArrowUp,
    /// A click landed outside the input and the dropdown.
    ClickedOutside,
    /// The overlay close control or backdrop was clicked.
    OverlayDismissed,
    /// The global Ctrl/Cmd+K shortcut.
    FocusShortcut,
}

/// The host page's side of the search UI.
///
/// Implementations attach the markup to real elements; the controller never
/// touches a display directly.
pub trait SearchSurface: Send + Sync + 'static {
    /// Whether the page has both the search input and the dropdown
    /// container. When it does not, search stays disabled.
    fn has_search_elements(&self) -> bool;
    fn show_dropdown(&self, markup: &str);
    fn hide_dropdown(&self);
    /// Create the overlay root on demand and fill it with `markup`.
    fn open_overlay(&self, markup: &str);
    /// Tear the overlay root down again.
    fn close_overlay(&self);
    fn focus_input(&self);
    fn select_input(&self);
    fn focus_result(&self, index: usize);
}

#[derive(Debug, Default)]
struct UiState {
    query: String,
    surface: Surface,
    /// Focused result row while arrow-navigating the dropdown. `None` means
    /// the input itself holds focus.
    focused: Option<usize>,
    /// Number of result rows currently rendered in the dropdown.
    visible_results: usize,
}

struct UiShared<S: SearchSurface> {
    loader: IndexLoader,
    surface: S,
    state: Mutex<UiState>,
}

impl<S: SearchSurface> UiShared<S> {
    fn state(&self) -> std::sync::MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the index, score the query, and present the result set on the
    /// requested surface. The lock is taken only after the index resolves.
    async fn run_search(&self, query: String, target: Surface) {
        let index = self.loader.load().await;
        let results = search(&query, index);

        let mut state = self.state();
        match target {
            Surface::Dropdown => {
                let markup = render::dropdown_html(&query, &results);
                state.surface = Surface::Dropdown;
                state.focused = None;
                state.visible_results = results.len();
                self.surface.show_dropdown(&markup);
            }
            Surface::Overlay => {
                if state.surface == Surface::Dropdown {
                    self.surface.hide_dropdown();
                }
                let markup = render::overlay_html(&query, &results);
                state.surface = Surface::Overlay;
                state.focused = None;
                state.visible_results = results.len();
                self.surface.open_overlay(&markup);
            }
            Surface::Hidden => {}
        }
    }
}

/// The search UI controller.
///
/// Construct with [`SearchUi::mount`]; feed it [`SearchEvent`]s from the
/// host's event listeners.
pub struct SearchUi<S: SearchSurface> {
    shared: Arc<UiShared<S>>,
    /// Pending debounced search. Cancelled and replaced on every input
    /// event; only the last scheduled search within the quiet window runs.
    pending: Option<JoinHandle<()>>,
}

impl<S: SearchSurface> SearchUi<S> {
    /// Wire the controller to the host page.
    ///
    /// Returns `None` when the page lacks the search input or the results
    /// container; search is then disabled without error and unrelated
    /// features stay untouched.
    pub fn mount(loader: IndexLoader, surface: S) -> Option<Self> {
        if !surface.has_search_elements() {
            tracing::debug!("search elements missing from page, search disabled");
            return None;
        }
        Some(Self {
            shared: Arc::new(UiShared {
                loader,
                surface,
                state: Mutex::new(UiState::default()),
            }),
            pending: None,
        })
    }

    /// Current presentation state.
    pub fn surface(&self) -> Surface {
        self.shared.state().surface
    }

    /// Dispatch one user interaction.
    pub fn handle_event(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::InputChanged(raw) => self.on_input_changed(&raw),
            SearchEvent::InputFocused => {
                let query = self.current_query();
                if searchable(&query) {
                    self.spawn_search(query, Surface::Dropdown, false);
                }
            }
            SearchEvent::EnterPressed => {
                self.cancel_pending();
                let query = self.current_query();
                if searchable(&query) {
                    self.spawn_search(query, Surface::Overlay, false);
                }
            }
            SearchEvent::EscapePressed => self.on_escape(),
            SearchEvent::ArrowDown => self.on_arrow_down(),
            SearchEvent::ArrowUp => self.on_arrow_up(),
            SearchEvent::ClickedOutside => {
                let mut state = self.shared.state();
                if state.surface == Surface::Dropdown {
                    state.surface = Surface::Hidden;
                    state.focused = None;
                    self.shared.surface.hide_dropdown();
                }
            }
            SearchEvent::OverlayDismissed => {
                let mut state = self.shared.state();
                if state.surface == Surface::Overlay {
                    state.surface = Surface::Hidden;
                    self.shared.surface.close_overlay();
                }
            }
            SearchEvent::FocusShortcut => {
                self.shared.surface.focus_input();
                self.shared.surface.select_input();
            }
        }
    }

    fn on_input_changed(&mut self, raw: &str) {
        self.cancel_pending();
        let query = raw.trim().to_string();
        let run = searchable(&query);
        {
            let mut state = self.shared.state();
            state.query = query.clone();
            if !run && state.surface == Surface::Dropdown {
                state.surface = Surface::Hidden;
                state.focused = None;
                self.shared.surface.hide_dropdown();
            }
        }
        if run {
            self.spawn_search(query, Surface::Dropdown, true);
        }
    }

    fn on_escape(&mut self) {
        let mut state = self.shared.state();
        match state.surface {
            Surface::Overlay => {
                state.surface = Surface::Hidden;
                self.shared.surface.close_overlay();
            }
            Surface::Dropdown => {
                state.surface = Surface::Hidden;
                state.focused = None;
                self.shared.surface.hide_dropdown();
                self.shared.surface.focus_input();
            }
            Surface::Hidden => {}
        }
    }

    fn on_arrow_down(&mut self) {
        let mut state = self.shared.state();
        if state.surface != Surface::Dropdown || state.visible_results == 0 {
            return;
        }
        let next = match state.focused {
            None => 0,
            Some(current) => (current + 1).min(state.visible_results - 1),
        };
        state.focused = Some(next);
        self.shared.surface.focus_result(next);
    }

    fn on_arrow_up(&mut self) {
        let mut state = self.shared.state();
        if state.surface != Surface::Dropdown {
            return;
        }
        match state.focused {
            Some(0) => {
                state.focused = None;
                self.shared.surface.focus_input();
            }
            Some(current) => {
                let previous = current - 1;
                state.focused = Some(previous);
                self.shared.surface.focus_result(previous);
            }
            None => {}
        }
    }

    fn current_query(&self) -> String {
        self.shared.state().query.clone()
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    fn spawn_search(&mut self, query: String, target: Surface, debounce: bool) {
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            if debounce {
                tokio::time::sleep(DEBOUNCE_QUIET).await;
            }
            shared.run_search(query, target).await;
        });
        if debounce {
            self.pending = Some(handle);
        }
    }
}

impl<S: SearchSurface> Drop for SearchUi<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
