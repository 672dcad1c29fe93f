//! Draft state for the comment thread under a deal detail.

/// A finished draft taken out of the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Comment { text: String },
    Reply { comment_id: String, text: String },
}

/// Comment box and reply box drafts for the deal currently in detail.
///
/// Drafts are transient: sending one clears it, and the whole composer is
/// cleared whenever the detail overlay closes or switches deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentComposer {
    open: bool,
    comment_text: String,
    reply_target: Option<String>,
    reply_text: String,
}

impl CommentComposer {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn comment_text(&self) -> &str {
        &self.comment_text
    }

    #[must_use]
    pub fn reply_target(&self) -> Option<&str> {
        self.reply_target.as_deref()
    }

    #[must_use]
    pub fn reply_text(&self) -> &str {
        &self.reply_text
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn edit_comment(&mut self, text: &str) {
        self.open = true;
        text.clone_into(&mut self.comment_text);
    }

    /// Points the reply box at `comment_id`, discarding any other reply draft.
    pub fn start_reply(&mut self, comment_id: &str) {
        if self.reply_target.as_deref() != Some(comment_id) {
            self.reply_text.clear();
        }
        self.reply_target = Some(comment_id.to_string());
    }

    /// Updates the reply draft. Ignored while no reply target is set.
    pub fn edit_reply(&mut self, text: &str) -> bool {
        if self.reply_target.is_none() {
            return false;
        }
        text.clone_into(&mut self.reply_text);
        true
    }

    /// Takes the comment draft if it has non-blank text, closing the box.
    pub fn take_comment(&mut self) -> Option<Submission> {
        let text = self.comment_text.trim();
        if text.is_empty() {
            return None;
        }
        let submission = Submission::Comment {
            text: text.to_string(),
        };
        self.comment_text.clear();
        self.open = false;
        Some(submission)
    }

    /// Takes the reply draft if a target is set and the text is non-blank.
    pub fn take_reply(&mut self) -> Option<Submission> {
        let text = self.reply_text.trim();
        if text.is_empty() {
            return None;
        }
        let comment_id = self.reply_target.take()?;
        let submission = Submission::Reply {
            comment_id,
            text: text.to_string(),
        };
        self.reply_text.clear();
        Some(submission)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
