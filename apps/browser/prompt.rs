use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub(crate) struct BrowserPrompt {
    filter: Option<String>,
}

impl BrowserPrompt {
    pub(crate) fn new(filter: Option<&str>) -> Self {
        Self { filter: filter.map(|v| v.to_string()) }
    }
}

impl Prompt for BrowserPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match self.filter.as_ref() {
            Some(filter) => format!("contacts[{}]$ ", filter).into(),
            None => "contacts$ ".into(),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}

/// Single-line prompt used for yes/no confirmations.
pub(crate) struct QuestionPrompt(pub(crate) String);

impl Prompt for QuestionPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        format!("{} [y/N] ", self.0).into()
    }

    fn render_prompt_right(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        "".into()
    }

    fn render_prompt_history_search_indicator(&self, _: PromptHistorySearch) -> Cow<str> {
        "".into()
    }
}
