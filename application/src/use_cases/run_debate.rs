//! Run Debate use case
//!
//! Orchestrates the full debate flow: topic collection, the round loop,
//! and final adjudication.

use crate::ports::event_sink::{DebateEvent, EventSink, NoEventSink};
use crate::ports::topic_source::{TopicError, TopicSource};
use debate_domain::{
    Debater, DebatePhase, DomainError, Judge, MemoryStore, Topic, TranscriptEntry, TurnOrder,
    Verdict,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Round count used when the caller does not override it
pub const DEFAULT_ROUNDS: u32 = 8;

/// Errors that can occur while running a debate
///
/// Everything here surfaces before round 1; once the round loop starts the
/// debate always runs to completion.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Invalid debate configuration: {0}")]
    Configuration(#[from] DomainError),

    #[error("Topic collection failed: {0}")]
    Topic(#[from] TopicError),
}

/// Input for the RunDebate use case
///
/// `first` opens the debate and speaks every odd round; `second` speaks the
/// even rounds.
#[derive(Debug)]
pub struct RunDebateInput {
    pub first: Debater,
    pub second: Debater,
    pub rounds: u32,
}

impl RunDebateInput {
    pub fn new(first: Debater, second: Debater) -> Self {
        Self {
            first,
            second,
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}

/// Everything a completed debate produced, for formatting and logging.
#[derive(Debug, Clone, Serialize)]
pub struct DebateOutcome {
    pub topic: Topic,
    pub transcript: Vec<TranscriptEntry>,
    pub verdict: Verdict,
}

/// Use case for running a debate
///
/// Walks the phases strictly forward: `AwaitingTopic` until the topic source
/// answers, one `Debating` state per round, then `Adjudicating`. Each round
/// derives a fresh contextual view for the speaker, lets the speaker produce
/// its line, and appends the result to the shared store before the next
/// round begins. There is no retry or rollback path.
pub struct RunDebateUseCase<T: TopicSource> {
    topic_source: T,
    judge: Judge,
}

impl<T: TopicSource> RunDebateUseCase<T> {
    pub fn new(topic_source: T, judge: Judge) -> Self {
        Self {
            topic_source,
            judge,
        }
    }

    /// Execute the use case without event recording
    pub fn execute(&self, input: RunDebateInput) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_sink(input, &NoEventSink)
    }

    /// Execute the use case, recording every observable state change
    pub fn execute_with_sink(
        &self,
        input: RunDebateInput,
        sink: &dyn EventSink,
    ) -> Result<DebateOutcome, RunDebateError> {
        let RunDebateInput {
            mut first,
            mut second,
            rounds,
        } = input;

        let order = TurnOrder::new(first.id().clone(), second.id().clone(), rounds)?;

        let mut phase = DebatePhase::AwaitingTopic;
        debug!("Phase: {}", phase);

        let topic = self.topic_source.collect()?;
        info!(
            "Starting debate between {} and {} ({} rounds)",
            first.label(),
            second.label(),
            rounds
        );
        sink.record(DebateEvent::TopicCollected {
            topic: topic.clone(),
        });

        let mut store = MemoryStore::new();

        for round in 1..=order.rounds() {
            phase = DebatePhase::Debating(round);
            debug!("Phase: {}", phase);

            let speaker = order.speaker_for(round).clone();
            let view = store.context_for(&speaker);
            sink.record(DebateEvent::MemoryView {
                role: speaker.clone(),
                own_history_count: view.own_history.len(),
                recent_summary: view.recent_summary.clone(),
            });

            let debater = if speaker == *first.id() {
                &mut first
            } else {
                &mut second
            };
            let text = debater.speak(round, &topic, &view);
            info!("[Round {}] {}: {}", round, debater.label(), text);
            sink.record(DebateEvent::Message {
                role: speaker.clone(),
                text: text.clone(),
            });
            sink.record(DebateEvent::SpokenRounds {
                role: speaker.clone(),
                rounds: debater.spoken_log().to_vec(),
            });

            store.append(speaker.clone(), text.clone(), round);
            sink.record(DebateEvent::MemoryAppend {
                entry: TranscriptEntry::new(speaker, text, round),
            });
        }

        phase = DebatePhase::Adjudicating;
        debug!("Phase: {}", phase);

        let transcript = store.full_transcript();
        let verdict = self.judge.evaluate(&transcript);
        info!("Winner: {} | Reason: {}", verdict.winner, verdict.reason);
        sink.record(DebateEvent::JudgeResult {
            verdict: verdict.clone(),
        });

        phase = DebatePhase::Done;
        debug!("Phase: {}", phase);

        Ok(DebateOutcome {
            topic,
            transcript,
            verdict,
        })
    }
}
