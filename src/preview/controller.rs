use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, error};

use super::session::Session;
use crate::config::StudioConfig;
use crate::debounce::Debouncer;
use crate::logo::{LogoError, load_logo};
use crate::models::{PayloadFields, PayloadType, SavedEntry, StyleOptions};
use crate::render::{ExportFormat, RenderRequest, Renderer, export_file_name};
use crate::storage::{HistoryStore, KeyValueStore, SaveOutcome};

/// Drives the renderer from session edits and records exports in history
///
/// Payload and style settle through separate debouncers. The owner's event loop
/// calls [`tick`](Self::tick) (ideally at [`next_deadline`](Self::next_deadline));
/// a draw is issued whenever either channel settles a new value.
pub struct PreviewController<R: Renderer, S: KeyValueStore> {
    config: StudioConfig,
    session: Session,
    payload: Debouncer<String>,
    style: Debouncer<StyleOptions>,
    renderer: R,
    history: HistoryStore<S>,
    displayed: Option<RenderRequest>,
}

impl<R: Renderer, S: KeyValueStore> PreviewController<R, S> {
    pub fn new(config: StudioConfig, renderer: R, history: HistoryStore<S>) -> Self {
        let session = Session::default();
        let delay = config.debounce_delay();
        let payload = Debouncer::new(session.payload(), delay);
        let style = Debouncer::new(session.style().clone(), delay);

        Self { config, session, payload, style, renderer, history, displayed: None }
    }

    /// Initial draw of the default session
    pub fn start(&mut self) -> bool {
        self.redraw()
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn history(&self) -> &[SavedEntry] {
        self.history.entries()
    }

    /// Request currently shown on screen, if any draw has succeeded
    pub fn displayed(&self) -> Option<&RenderRequest> {
        self.displayed.as_ref()
    }

    /// Payload value the renderer currently sees
    pub fn settled_payload(&self) -> &str {
        self.payload.settled()
    }

    pub fn settled_style(&self) -> &StyleOptions {
        self.style.settled()
    }

    pub fn set_payload_type(&mut self, payload_type: PayloadType, now: Instant) {
        if self.session.set_payload_type(payload_type) {
            self.publish_payload(now);
        }
    }

    pub fn update_fields(&mut self, fields: PayloadFields, now: Instant) {
        if self.session.update_fields(fields) {
            self.publish_payload(now);
        }
    }

    pub fn set_style(&mut self, style: StyleOptions, now: Instant) {
        if self.session.set_style(style) {
            self.publish_style(now);
        }
    }

    pub fn set_logo(&mut self, logo: Option<String>, now: Instant) {
        if self.session.set_logo(logo) {
            self.publish_style(now);
        }
    }

    /// Validate and embed a logo file; a rejected file leaves the style untouched
    pub fn upload_logo(&mut self, path: &Path, now: Instant) -> Result<(), LogoError> {
        let data_uri = load_logo(path, self.config.logo_max_bytes)?;
        self.set_logo(Some(data_uri), now);
        Ok(())
    }

    pub fn toggle_history(&mut self) -> bool {
        self.session.toggle_history()
    }

    /// Settle due debouncers and redraw if either produced a new value
    pub fn tick(&mut self, now: Instant) -> bool {
        let payload_settled = self.payload.poll(now).is_some();
        let style_settled = self.style.poll(now).is_some();
        if payload_settled || style_settled {
            self.redraw()
        } else {
            false
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) can settle something
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.payload.deadline(), self.style.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Export the displayed symbol, then record the session in history
    ///
    /// Raster exports are re-rendered at the configured export size; vector
    /// exports reuse the on-screen request. The history save happens whether or
    /// not the export succeeded and never affects the export result. Export
    /// errors are returned, not logged.
    pub fn export(&mut self, format: ExportFormat) -> Result<String> {
        let file_name = export_file_name(&self.config.export_base_name, format);
        let size = if format.is_raster() { self.config.export_size } else { self.config.display_size };
        let request = match &self.displayed {
            Some(displayed) if format.is_raster() => displayed.resized(size),
            Some(displayed) => displayed.clone(),
            None => self.settled_request(size),
        };

        let result = self.renderer.export(&request, format, &file_name);

        match self.history.save(self.session.snapshot()) {
            SaveOutcome::Created(id) => debug!("Export saved as new history entry {}", id),
            SaveOutcome::Refreshed(id) => debug!("Export refreshed history entry {}", id),
        }

        result.map(|()| file_name)
    }

    /// Load a history entry into the session and republish both channels
    pub fn restore(&mut self, id: &str, now: Instant) -> bool {
        let Some(snapshot) = self.history.get(id).map(SavedEntry::snapshot) else {
            return false;
        };
        self.session.restore(snapshot);
        self.publish_payload(now);
        self.publish_style(now);
        true
    }

    pub fn delete_entry(&mut self, id: &str) -> bool {
        self.history.delete(id)
    }

    pub fn clear_history(&mut self) {
        self.history.clear_all();
    }

    /// Drop pending settlements so nothing is drawn from stale input
    pub fn shutdown(&mut self) {
        let dropped_payload = self.payload.cancel().is_some();
        let dropped_style = self.style.cancel().is_some();
        if dropped_payload || dropped_style {
            debug!("Discarded pending preview updates on shutdown");
        }
    }

    fn publish_payload(&mut self, now: Instant) {
        self.payload.push(self.session.payload(), now);
    }

    fn publish_style(&mut self, now: Instant) {
        self.style.push(self.session.style().clone(), now);
    }

    fn settled_request(&self, size: u32) -> RenderRequest {
        RenderRequest::new(
            self.payload.settled(),
            self.style.settled(),
            size,
            &self.config.placeholder_payload,
        )
    }

    fn redraw(&mut self) -> bool {
        let request = self.settled_request(self.config.display_size);
        match self.renderer.draw(&request) {
            Ok(()) => {
                debug!("Rendered preview ({} chars)", request.data.chars().count());
                self.displayed = Some(request);
                true
            }
            Err(e) => {
                error!("Failed to render preview: {:#}", e);
                false
            }
        }
    }
}
