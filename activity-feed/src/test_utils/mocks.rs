//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured per test and inspected
//! afterwards. Clones share state, so a test can keep a handle to a mock it
//! has moved into the poller.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::domain::entities::{decode_events, Event};
use crate::domain::ports::{EventSource, RenderTarget, Ticker};
use crate::error::FeedError;

// ============================================================================
// In-Memory Render Target
// ============================================================================

/// A child of the display container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    Entry {
        text: String,
        timestamp_text: String,
        style_class: String,
    },
    Placeholder(String),
}

impl RenderedNode {
    pub fn text(&self) -> &str {
        match self {
            RenderedNode::Entry { text, .. } => text,
            RenderedNode::Placeholder(text) => text,
        }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRenderTarget {
    nodes: Arc<RwLock<Vec<RenderedNode>>>,
    clears: Arc<AtomicUsize>,
    fail_appends: bool,
}

impl InMemoryRenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with content from an earlier render
    pub fn with_nodes(self, nodes: Vec<RenderedNode>) -> Self {
        *self.nodes.write().unwrap() = nodes;
        self
    }

    /// Make every append fail, as a closed output stream would
    pub fn failing(mut self) -> Self {
        self.fail_appends = true;
        self
    }

    pub fn nodes(&self) -> Vec<RenderedNode> {
        self.nodes.read().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.nodes
            .read()
            .unwrap()
            .iter()
            .map(|n| n.text().to_string())
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<(), FeedError> {
        if self.fail_appends {
            return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "display closed").into());
        }
        Ok(())
    }
}

impl RenderTarget for InMemoryRenderTarget {
    fn clear(&mut self) -> Result<(), FeedError> {
        self.nodes.write().unwrap().clear();
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn append_entry(
        &mut self,
        text: &str,
        timestamp_text: &str,
        style_class: &str,
    ) -> Result<(), FeedError> {
        self.check_writable()?;
        self.nodes.write().unwrap().push(RenderedNode::Entry {
            text: text.to_string(),
            timestamp_text: timestamp_text.to_string(),
            style_class: style_class.to_string(),
        });
        Ok(())
    }

    fn append_placeholder(&mut self, text: &str) -> Result<(), FeedError> {
        self.check_writable()?;
        self.nodes
            .write()
            .unwrap()
            .push(RenderedNode::Placeholder(text.to_string()));
        Ok(())
    }
}

// ============================================================================
// Mock Event Source
// ============================================================================

/// One scripted reply from the mock feed
#[derive(Debug, Clone)]
pub enum Scripted {
    Events(Vec<Event>),
    /// A raw body, decoded exactly as the HTTP adapter would
    Body(String),
    /// A non-2xx reply
    Status(u16),
    /// Reply after a delay (use with a paused tokio clock)
    Delayed(Duration, Box<Scripted>),
}

/// Event source that replays a script; once exhausted it returns empty lists
#[derive(Clone, Default)]
pub struct MockEventSource {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<AtomicUsize>,
}

impl MockEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, reply: Scripted) -> Self {
        self.script.lock().unwrap().push_back(reply);
        self
    }

    pub fn then_events(self, events: Vec<Event>) -> Self {
        self.then(Scripted::Events(events))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.script.lock().unwrap().pop_front();

        let mut reply = match reply {
            Some(reply) => reply,
            None => return Ok(Vec::new()),
        };

        loop {
            match reply {
                Scripted::Events(events) => return Ok(events),
                Scripted::Body(body) => return decode_events(&body),
                Scripted::Status(status) => {
                    return Err(FeedError::Status {
                        status,
                        body: String::new(),
                    })
                }
                Scripted::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
            }
        }
    }
}

// ============================================================================
// Manual Ticker
// ============================================================================

/// Ticker driven from the test body; ends when the handle is dropped
pub struct ManualTicker {
    rx: mpsc::UnboundedReceiver<()>,
}

#[derive(Clone)]
pub struct TickHandle {
    tx: mpsc::UnboundedSender<()>,
}

impl ManualTicker {
    pub fn new() -> (Self, TickHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, TickHandle { tx })
    }
}

impl TickHandle {
    pub fn tick(&self) {
        self.tx.send(()).unwrap();
    }
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }
}
