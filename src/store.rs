use std::collections::BTreeMap;

use crate::api::IssueMeta;
use crate::error::FetchError;
use crate::link::LinkRecord;
use crate::render::render;

/// The whole mutable state of the tool, owned by the [`Store`] and mutated
/// only through [`Store::update`].
#[derive(Debug, Default)]
pub struct AppState {
    /// Raw pasted text, as last set.
    pub input: String,
    /// Trimmed non-empty lines of the last submission; index is the
    /// correlation key for asynchronous outcomes and must stay stable for
    /// the duration of the batch.
    pub lines: Vec<String>,
    /// Resolved records, keyed by input index. Sparse: only settled
    /// successes are present.
    pub records: BTreeMap<usize, LinkRecord>,
    /// Failed lines, in arrival order.
    pub errors: Vec<ErrorEntry>,
    pub template: String,
    pub token: String,
}

/// A failed line together with the link that produced it.
#[derive(Debug)]
pub struct ErrorEntry {
    pub error: FetchError,
    pub original_link: String,
}

/// A discrete state transition.
#[derive(Debug)]
pub enum Msg {
    SetInput(String),
    Submit,
    ResponseArrived(Outcome),
    SetTemplate(String),
    SetToken(String),
}

/// The resolution of one dispatched request, tagged with the batch
/// generation and line index it answers.
#[derive(Debug)]
pub struct Outcome {
    pub generation: u64,
    pub index: usize,
    pub result: Result<IssueMeta, FetchError>,
}

/// The effect descriptor emitted by a `Submit`: everything the dispatcher
/// needs to fire one request per line.
#[derive(Clone, Debug)]
pub struct Batch {
    pub generation: u64,
    pub lines: Vec<String>,
    pub token: String,
    pub api_base: String,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The state-owning component: a single mutation entry point over
/// [`AppState`], plus the generation counter distinguishing successive
/// submissions.
#[derive(Debug)]
pub struct Store {
    state: AppState,
    generation: u64,
    api_base: String,
}

impl Store {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            state: AppState::default(),
            generation: 0,
            api_base: api_base.into(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one message. `Submit` returns the batch to dispatch; every
    /// other message returns `None`.
    pub fn update(&mut self, msg: Msg) -> Option<Batch> {
        match msg {
            Msg::SetInput(text) => {
                self.state.input = text;
                None
            }
            Msg::SetTemplate(template) => {
                self.state.template = template;
                None
            }
            Msg::SetToken(token) => {
                self.state.token = token;
                None
            }
            Msg::Submit => {
                self.generation += 1;
                self.state.lines = self
                    .state
                    .input
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
                self.state.records.clear();
                self.state.errors.clear();
                Some(Batch {
                    generation: self.generation,
                    lines: self.state.lines.clone(),
                    token: self.state.token.clone(),
                    api_base: self.api_base.clone(),
                })
            }
            Msg::ResponseArrived(outcome) => {
                if outcome.generation != self.generation {
                    log::debug!(
                        "discarding stale outcome for line {} of generation {}",
                        outcome.index,
                        outcome.generation,
                    );
                    return None;
                }
                let Some(line) = self.state.lines.get(outcome.index) else {
                    log::debug!("discarding outcome for unknown line {}", outcome.index);
                    return None;
                };
                match outcome.result {
                    Ok(meta) => {
                        let record = LinkRecord::new(meta, line);
                        log::debug!("resolved {line} as {record}");
                        self.state.records.insert(outcome.index, record);
                    }
                    Err(error) => {
                        log::debug!("failed {line}: {error}");
                        self.state.errors.push(ErrorEntry {
                            error,
                            original_link: line.clone(),
                        });
                    }
                }
                None
            }
        }
    }

    /// Markdown for all settled successes, in input order.
    pub fn rendered(&self) -> String {
        render(self.state.records.values(), &self.state.template)
    }
}
