//! Runtime module - drives the update loop against a host editor
//!
//! - `host` - the `EditorHost` trait the controller talks to
//! - `debounce` - deadlines for decoration refresh, with an injectable clock
//! - `memory` - a host that keeps documents in memory
//!
//! Messages are processed one at a time from a queue. Commands that need the
//! host run synchronously and feed their outcome back as new messages.

pub mod debounce;
pub mod host;
pub mod memory;

use std::collections::VecDeque;
use std::time::Instant;

pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use host::EditorHost;
pub use memory::MemoryHost;

use crate::commands::{Cmd, TrackingOp};
use crate::messages::{DecorationMsg, DocumentMsg, Msg, ToggleMsg};
use crate::model::{AppModel, DocumentId, Position, TextEdit};
use crate::update::update;

/// Owns the model and executes commands against the host
pub struct Runtime<H: EditorHost, C: Clock = SystemClock> {
    model: AppModel,
    host: H,
    debouncer: Debouncer<C>,
    queue: VecDeque<Msg>,
}

impl<H: EditorHost> Runtime<H, SystemClock> {
    pub fn new(model: AppModel, host: H) -> Self {
        Self::with_clock(model, host, SystemClock)
    }
}

impl<H: EditorHost, C: Clock> Runtime<H, C> {
    pub fn with_clock(model: AppModel, host: H, clock: C) -> Self {
        Self {
            model,
            host,
            debouncer: Debouncer::new(clock),
            queue: VecDeque::new(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Earliest pending refresh deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }

    /// Process a message and everything it triggers
    pub fn dispatch(&mut self, msg: Msg) {
        self.queue.push_back(msg);
        while let Some(msg) = self.queue.pop_front() {
            if let Msg::Document(DocumentMsg::Closed { document_id }) = &msg {
                self.debouncer.cancel(*document_id);
            }
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    /// Fire every refresh whose debounce delay has elapsed
    pub fn tick(&mut self) {
        for (document_id, revision) in self.debouncer.take_due() {
            self.dispatch(Msg::Decorations(DecorationMsg::RefreshReady {
                document_id,
                revision,
            }));
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::ApplyEdits {
                document_id,
                edits,
                cursor,
                tracking,
            } => self.apply_edits(document_id, edits, cursor, tracking),
            Cmd::ShowInfo(message) => self.host.show_info(&message),
            Cmd::SetDecorations {
                document_id,
                decorations,
            } => self.host.set_decorations(document_id, &decorations),
            Cmd::DebouncedRefresh {
                document_id,
                revision,
                delay_ms,
            } => self.debouncer.schedule(document_id, revision, delay_ms),
        }
    }

    fn apply_edits(
        &mut self,
        document_id: DocumentId,
        edits: Vec<TextEdit>,
        cursor: Option<Position>,
        tracking: TrackingOp,
    ) {
        match self.host.apply_edits(document_id, &edits) {
            Ok(changes) => {
                if let Some(position) = cursor {
                    self.host.set_cursor(document_id, position);
                }
                // The mirror must see the new text before tracking runs
                self.queue.push_back(Msg::Document(DocumentMsg::Changed {
                    document_id,
                    changes,
                }));
                self.queue.push_back(Msg::Toggle(ToggleMsg::EditApplied {
                    document_id,
                    tracking,
                    cursor,
                }));
            }
            Err(e) => {
                self.queue.push_back(Msg::Toggle(ToggleMsg::EditRejected {
                    document_id,
                    reason: e.to_string(),
                }));
            }
        }
    }
}
