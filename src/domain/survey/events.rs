//! Survey session domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, StepKey, StepOrder, Timestamp};

/// Events recorded while a survey session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The respondent left the intro screen.
    Started {
        session_id: SessionId,
        occurred_at: Timestamp,
    },

    /// A step's answers passed validation and were merged.
    StepSubmitted {
        session_id: SessionId,
        step: StepOrder,
        step_key: StepKey,
        occurred_at: Timestamp,
    },

    /// The session moved onto a step's feedback passage.
    FeedbackEntered {
        session_id: SessionId,
        step: StepOrder,
        occurred_at: Timestamp,
    },

    /// A step came on screen and its form was seeded.
    StepEntered {
        session_id: SessionId,
        step: StepOrder,
        occurred_at: Timestamp,
    },

    /// The run reached the end screen.
    Completed {
        session_id: SessionId,
        occurred_at: Timestamp,
    },
}

impl SessionEvent {
    /// The session the event belongs to.
    pub fn session_id(&self) -> SessionId {
        match self {
            SessionEvent::Started { session_id, .. }
            | SessionEvent::StepSubmitted { session_id, .. }
            | SessionEvent::FeedbackEntered { session_id, .. }
            | SessionEvent::StepEntered { session_id, .. }
            | SessionEvent::Completed { session_id, .. } => *session_id,
        }
    }
}
