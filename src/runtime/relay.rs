//! Debug-output relay.
//!
//! One-way forwarder for debug prints. Messages are wrapped in a JSON
//! envelope `{"message": <text>}` and handed to an attached sink; oversized
//! payloads are truncated with a fixed marker. A detached relay drops
//! messages silently, mirroring the original behavior when the receiving
//! side is not ready yet.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

/// Messages longer than this many characters are truncated.
pub const MAX_MESSAGE_LEN: usize = 200_000;

pub const TRUNCATION_MARKER: &str = "<message truncated>";

#[derive(Serialize)]
struct Envelope<'a> {
    message: &'a str,
}

/// Receiving side of the relay.
pub trait RelaySink {
    fn post(&mut self, payload: &str);
}

/// Sink writing envelopes to stderr.
pub struct StderrSink;
impl RelaySink for StderrSink {
    fn post(&mut self, payload: &str) {
        eprintln!("{}", payload);
    }
}

/// In-memory sink; hand out the buffer before attaching to inspect posts.
pub struct BufferSink {
    buffer: Rc<RefCell<Vec<String>>>,
}
impl BufferSink {
    pub fn new() -> Self {
        BufferSink {
            buffer: Rc::new(RefCell::new(vec![])),
        }
    }

    pub fn buffer(&self) -> Rc<RefCell<Vec<String>>> {
        self.buffer.clone()
    }
}
impl Default for BufferSink {
    fn default() -> Self {
        BufferSink::new()
    }
}
impl RelaySink for BufferSink {
    fn post(&mut self, payload: &str) {
        self.buffer.borrow_mut().push(payload.to_string());
    }
}

pub struct DebugRelay {
    sink: Option<Box<dyn RelaySink>>,
}
impl DebugRelay {
    /// A relay with no sink yet; posts are dropped until one is attached.
    pub fn new() -> Self {
        DebugRelay { sink: None }
    }

    pub fn attached(sink: Box<dyn RelaySink>) -> Self {
        DebugRelay { sink: Some(sink) }
    }

    pub fn attach(&mut self, sink: Box<dyn RelaySink>) {
        self.sink = Some(sink);
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Forward one message. Messages over [`MAX_MESSAGE_LEN`] characters
    /// keep their first [`MAX_MESSAGE_LEN`] characters followed by
    /// [`TRUNCATION_MARKER`]. Dropped silently when detached.
    pub fn post(&mut self, message: &str) {
        let sink = match &mut self.sink {
            Some(sink) => sink,
            None => return,
        };
        let truncated;
        let text = match message.char_indices().nth(MAX_MESSAGE_LEN) {
            Some((byte_index, _)) => {
                truncated = format!("{}{}", &message[..byte_index], TRUNCATION_MARKER);
                truncated.as_str()
            }
            None => message,
        };
        if let Ok(payload) = serde_json::to_string(&Envelope { message: text }) {
            sink.post(&payload);
        }
    }
}
impl Default for DebugRelay {
    fn default() -> Self {
        DebugRelay::new()
    }
}
