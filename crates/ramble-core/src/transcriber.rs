//! Source of the text a finished recording turns into.
//!
//! There is no audio pipeline. [`ScriptedTranscriber`] hands back fixed text
//! so the rest of the flow can be exercised end to end.

/// Title, summary, and transcript produced for one recording
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub summary: String,
    pub transcript: String,
}

impl Draft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            transcript: transcript.into(),
        }
    }
}

/// Turns a finished recording into a [`Draft`]
pub trait Transcriber {
    fn transcribe(&mut self) -> Draft;
}

const SCRIPTED_TITLE: &str = "Project Roadmap Meeting";
const SCRIPTED_SUMMARY: &str = "Had a productive meeting about the new project roadmap. \
Team is excited about upcoming features and identified key milestones for next quarter. \
Project is on track to deliver something special.";
const SCRIPTED_TRANSCRIPT: &str = "I had an amazing meeting today where we discussed the new \
project roadmap. The team is really excited about the upcoming features and we identified \
some key milestones for the next quarter. I think we're on track to deliver something \
really special.";

/// Always returns the same draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTranscriber {
    draft: Draft,
}

impl ScriptedTranscriber {
    /// Transcriber returning a caller-chosen draft
    #[must_use]
    pub const fn with_draft(draft: Draft) -> Self {
        Self { draft }
    }
}

impl Default for ScriptedTranscriber {
    fn default() -> Self {
        Self::with_draft(Draft::new(
            SCRIPTED_TITLE,
            SCRIPTED_SUMMARY,
            SCRIPTED_TRANSCRIPT,
        ))
    }
}

impl Transcriber for ScriptedTranscriber {
    fn transcribe(&mut self) -> Draft {
        self.draft.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_draft_is_complete() {
        let draft = ScriptedTranscriber::default().transcribe();
        assert_eq!(draft.title, "Project Roadmap Meeting");
        assert!(draft.summary.starts_with("Had a productive meeting"));
        assert!(draft.transcript.ends_with("really special."));
    }
}
