//! Playback contract between the engine and a presentation layer
//!
//! The consumer drains a run one event at a time, in sequence order, and
//! owns all pacing. Before the first event of a run the presenter is reset
//! to the unvisited baseline.

pub mod pacing;
pub mod state;

use crate::error::Result;
use crate::event::VisitationEvent;
use crate::graph::GraphModel;
use crate::traversal::{CancelExt, CancelToken};

pub use pacing::{pacer_for, FixedDelay, NoDelay, Pacer};
pub use state::PlaybackState;

/// Presentation collaborator: owns display state and applies events to it
pub trait Presenter {
    /// Return every vertex to the unvisited baseline
    fn reset(&mut self, graph: &GraphModel) -> Result<()>;

    /// Apply one event and advance the step counter
    fn apply(&mut self, event: &VisitationEvent) -> Result<()>;
}

/// How a playback ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackReport {
    /// Events applied
    pub steps: u64,
    /// Cancelled before the stream was exhausted
    pub interrupted: bool,
}

/// Drain `events` into `presenter`, pausing between successive events.
///
/// The presenter is reset first. Cancellation is checked before every
/// event and again after every pause; applied events stay applied.
pub fn play<I, P, C>(
    graph: &GraphModel,
    events: I,
    presenter: &mut P,
    pacer: &mut C,
    cancel: &CancelToken,
) -> Result<PlaybackReport>
where
    I: IntoIterator<Item = VisitationEvent>,
    P: Presenter + ?Sized,
    C: Pacer + ?Sized,
{
    presenter.reset(graph)?;

    let mut stream = events.into_iter().cancel_with(cancel.clone());
    let mut report = PlaybackReport::default();

    for event in stream.by_ref() {
        if report.steps > 0 {
            pacer.pause();
            if cancel.is_cancelled() {
                report.interrupted = true;
                break;
            }
        }

        presenter.apply(&event)?;
        report.steps += 1;
    }

    report.interrupted |= stream.interrupted();
    tracing::debug!(
        steps = report.steps,
        yielded = stream.yielded(),
        interrupted = report.interrupted,
        "playback finished"
    );
    Ok(report)
}
