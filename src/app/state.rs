use crate::store::{JobId, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Jobs,
    Profile,
    JobDetail,
    UpdateStatus,
}

/// Which job list the Jobs view is showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JobTab {
    Assigned,
    Completed,
}

impl JobTab {
    pub fn title(&self) -> &'static str {
        match self {
            JobTab::Assigned => "Assigned",
            JobTab::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusField {
    Status,
    Notes,
}

/// State of the status-update form while the dialog is open.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFormState {
    pub job_id: JobId,
    pub status: JobStatus,
    pub notes: TextInput,
    pub focused_field: StatusField,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_boundary(self.cursor);
        self.value.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_around_multibyte_chars() {
        let mut input = TextInput::new();
        for c in "caf".chars() {
            input.insert(c);
        }
        input.insert('é');
        assert_eq!(input.value, "café");

        input.move_left();
        input.insert('x');
        assert_eq!(input.value, "cafxé");

        input.move_right();
        input.backspace();
        assert_eq!(input.value, "cafx");
    }
}
