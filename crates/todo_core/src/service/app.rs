//! Application wiring.
//!
//! # Responsibility
//! - Load state at startup and bind the filter route.
//! - Run dispatch followed by a render pass for every signal.
//!
//! # Invariants
//! - Every mutating dispatch is followed by exactly one render and one save.
//! - State is owned here and lent to the controller and renderer per call.

use crate::model::filter::Filter;
use crate::model::item_list::ItemList;
use crate::model::state::TodoState;
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use crate::repo::todo_store::TodoStore;
use crate::service::controller::{Dispatch, EventController, Signal};
use crate::service::router::{RouteError, Router, INITIAL_ROUTE};
use crate::view::render::Renderer;
use crate::view::surface::Surface;
use crate::view::templates::Templates;
use log::{debug, info};

/// Single-page to-do application.
pub struct TodoApp<S: KeyValueStore, T: Templates> {
    state: TodoState,
    controller: EventController,
    renderer: Renderer<T>,
    store: TodoStore<S>,
    router: Router,
}

impl<S: KeyValueStore, T: Templates> TodoApp<S, T> {
    /// Loads the saved list and prepares an idle application.
    ///
    /// # Errors
    /// Returns [`RouteError`] when the filter route pattern fails to compile.
    pub fn new(store: TodoStore<S>, templates: T) -> Result<Self, RouteError> {
        let router = Router::filter_route()?;
        let items = store.load();
        info!(
            "event=app_init module=service status=ok key={} count={} route_param={}",
            store.key(),
            items.len(),
            router.param()
        );
        Ok(Self {
            state: TodoState::new(ItemList::from_items(items)),
            controller: EventController::new(),
            renderer: Renderer::new(templates),
            store,
            router,
        })
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn controller(&self) -> &EventController {
        &self.controller
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Navigates to the initial route, producing the first render.
    pub fn start(&mut self, surface: &mut dyn Surface) -> StoreResult<()> {
        self.navigate(INITIAL_ROUTE, surface).map(|_| ())
    }

    /// Applies the filter captured from `path` and renders.
    ///
    /// Returns `Ok(false)` without rendering when `path` does not match the route.
    pub fn navigate(&mut self, path: &str, surface: &mut dyn Surface) -> StoreResult<bool> {
        let Some(segment) = self.router.resolve(path) else {
            debug!("event=navigate module=service status=skipped reason=no_route_match");
            return Ok(false);
        };
        self.state.filter = Filter::from_segment(segment);
        debug!(
            "event=navigate module=service status=ok filter={}",
            self.state.filter.as_str()
        );
        self.render(surface)?;
        Ok(true)
    }

    /// Dispatches `signal` and renders when it changed anything visible.
    pub fn handle(&mut self, signal: &Signal, surface: &mut dyn Surface) -> StoreResult<Dispatch> {
        let outcome = self.controller.dispatch(&mut self.state, signal, surface);
        if outcome.needs_render() {
            self.render(surface)?;
        }
        Ok(outcome)
    }

    /// Runs one full render pass and saves the list.
    pub fn render(&mut self, surface: &mut dyn Surface) -> StoreResult<()> {
        self.renderer.render(&self.state, surface, &mut self.store)
    }
}
