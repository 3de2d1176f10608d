use serde::{Deserialize, Serialize};

use crate::error::DetailError;
use crate::job::JobDetail;
use crate::message::ChatReply;

/// Completions reported by background requests.
/// Spawned futures push these onto the event bus; the UI drains them once per
/// frame and feeds them to the controllers that issued the requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClientEvent {
    /// A chat query finished (successfully or with a fallback reply)
    ChatReplied { turn_id: u64, reply: ChatReply },

    /// A job-detail fetch finished
    DetailResolved {
        seq: u64,
        outcome: Result<JobDetail, DetailError>,
    },

    /// Transcript stored by the history endpoint
    HistorySaved { id: String },

    HistoryFailed { message: String },

    /// Result of a backend health probe
    HealthChecked { online: bool },
}
