//! The candidate filter pipeline.
//!
//! Resolution runs a fixed sequence of keep/drop stages over the candidate
//! list. Each stage owns the message surfaced when it eliminates the last
//! candidate. The compatibility stage computes that message from the
//! candidates it dropped, so the message is a typed variant rather than
//! always a plain string.

use ext_index::ReleaseDescriptor;
use tracing::debug;

use crate::error::{Error, Result};

/// Message to surface when a stage empties the candidate list.
pub(crate) enum EmptyMessage<'a> {
    /// Fixed text, known when the pipeline is assembled.
    Static(String),
    /// Computed from the candidates that entered the stage.
    Deferred(Box<dyn Fn(&[ReleaseDescriptor]) -> String + 'a>),
}

/// One keep/drop pass over the candidate list.
pub(crate) struct Stage<'a> {
    /// Stage name, for trace output only.
    pub name: &'static str,
    /// Keep-predicate applied to each candidate in order.
    pub keep: Box<dyn Fn(&ReleaseDescriptor) -> bool + 'a>,
    /// Message when no candidate survives this stage.
    pub on_empty: EmptyMessage<'a>,
}

/// Run `stages` in order over `candidates`.
///
/// Each stage sees a fresh list holding copies of the prior stage's
/// survivors, in unchanged order. The first stage to eliminate every
/// candidate stops the run with [`Error::NoCandidates`] carrying that
/// stage's message; later stages never run.
pub(crate) fn run_pipeline(
    stages: Vec<Stage<'_>>,
    candidates: Vec<ReleaseDescriptor>,
) -> Result<Vec<ReleaseDescriptor>> {
    let mut current = candidates;

    for stage in stages {
        let survivors: Vec<ReleaseDescriptor> = current
            .iter()
            .filter(|candidate| (stage.keep)(candidate))
            .cloned()
            .collect();
        debug!(
            stage = stage.name,
            before = current.len(),
            after = survivors.len(),
            "filter stage"
        );

        if survivors.is_empty() {
            let message = match stage.on_empty {
                EmptyMessage::Static(text) => text,
                EmptyMessage::Deferred(render) => render(&current),
            };
            return Err(Error::no_candidates(message));
        }

        current = survivors;
    }

    Ok(current)
}
