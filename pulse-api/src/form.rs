//! Server-rendered survey page.
//!
//! The page is the whole UI: nine `<select>` questions and one `<textarea>`,
//! submitted together by a single button. Nothing is sent anywhere until the
//! respondent presses it.

use handlebars::{Handlebars, RenderError, TemplateError};
use pulse_types::{questions, QuestionKind, SentimentLabel};
use serde::Serialize;
use std::collections::HashMap;

pub const PAGE_TITLE: &str = "Team Morale & Feedback Survey";
pub const SUBMIT_LABEL: &str = "Submit Feedback";

const SURVEY_TEMPLATE_NAME: &str = "survey";
const SURVEY_TEMPLATE: &str = include_str!("../templates/survey.hbs");

/// Banner shown above the form after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Record accepted downstream
    Delivered { sentiment: SentimentLabel },
    /// Record was rejected or never arrived
    Failed { message: String },
    /// Submitted fields did not form a valid response
    Invalid { message: String },
}

#[derive(Serialize)]
struct PageContext {
    title: &'static str,
    submit_label: &'static str,
    notice: Option<NoticeContext>,
    questions: Vec<QuestionContext>,
}

#[derive(Serialize)]
struct NoticeContext {
    success: bool,
    message: String,
    sentiment: Option<SentimentLabel>,
}

#[derive(Serialize)]
struct QuestionContext {
    id: String,
    number: u8,
    prompt: String,
    free_text: bool,
    options: Vec<OptionContext>,
    text: String,
}

#[derive(Serialize)]
struct OptionContext {
    value: String,
    selected: bool,
}

impl From<&Notice> for NoticeContext {
    fn from(notice: &Notice) -> Self {
        match notice {
            Notice::Delivered { sentiment } => Self {
                success: true,
                message: "Feedback sent successfully!".to_string(),
                sentiment: Some(*sentiment),
            },
            Notice::Failed { message } | Notice::Invalid { message } => Self {
                success: false,
                message: message.clone(),
                sentiment: None,
            },
        }
    }
}

/// Handlebars registry holding the survey template, built once at start-up
pub struct SurveyPage {
    registry: Handlebars<'static>,
}

impl SurveyPage {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(SURVEY_TEMPLATE_NAME, SURVEY_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render the survey page.
    ///
    /// `values` pre-selects answers by record key; pass an empty map for a
    /// blank form.
    pub fn render(
        &self,
        notice: Option<&Notice>,
        values: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let context = PageContext {
            title: PAGE_TITLE,
            submit_label: SUBMIT_LABEL,
            notice: notice.map(NoticeContext::from),
            questions: questions()
                .into_iter()
                .map(|question| {
                    let value = values.get(&question.id).map(String::as_str);
                    let options = question.options.unwrap_or_default();
                    // Like a native selectbox, the first option is preselected on a blank form.
                    let selected = value
                        .filter(|value| options.iter().any(|o| o == value))
                        .or_else(|| options.first().map(String::as_str))
                        .map(str::to_string);

                    QuestionContext {
                        free_text: question.kind == QuestionKind::Text,
                        text: match question.kind {
                            QuestionKind::Text => value.unwrap_or_default().to_string(),
                            QuestionKind::SingleChoice => String::new(),
                        },
                        options: options
                            .iter()
                            .map(|option| OptionContext {
                                selected: selected.as_deref() == Some(option.as_str()),
                                value: option.clone(),
                            })
                            .collect(),
                        id: question.id,
                        number: question.number,
                        prompt: question.prompt,
                    }
                })
                .collect(),
        };

        self.registry.render(SURVEY_TEMPLATE_NAME, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(notice: Option<&Notice>, values: &HashMap<String, String>) -> String {
        SurveyPage::new().unwrap().render(notice, values).unwrap()
    }

    #[test]
    fn test_blank_page_lists_every_question() {
        let page = render(None, &HashMap::new());

        assert!(page.contains("Team Morale &amp; Feedback Survey"));
        assert_eq!(page.matches("<select").count(), 9);
        assert_eq!(page.matches("<textarea").count(), 1);
        assert!(page.contains("name=\"Q10_OpenEnded\""));
        assert!(page.contains("<option value=\"Not clear at all\">Not clear at all</option>"));
        assert!(!page.contains("class=\"notice"));
    }

    #[test]
    fn test_blank_page_preselects_first_option() {
        let page = render(None, &HashMap::new());
        assert!(page.contains("<option value=\"Excellent\" selected>Excellent</option>"));
        assert!(page.contains(
            "<textarea id=\"Q10_OpenEnded\" name=\"Q10_OpenEnded\" rows=\"5\"></textarea>"
        ));
    }

    #[test]
    fn test_prefilled_values_are_selected_and_escaped() {
        let values = HashMap::from([
            ("Q1_Morale".to_string(), "Fair".to_string()),
            ("Q10_OpenEnded".to_string(), "<script>alert(1)</script>".to_string()),
        ]);

        let page = render(None, &values);

        assert!(page.contains("<option value=\"Fair\" selected>Fair</option>"));
        assert!(page.contains("<option value=\"Excellent\">Excellent</option>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_unknown_prefill_falls_back_to_first_option() {
        let values = HashMap::from([("Q1_Morale".to_string(), "Ecstatic".to_string())]);
        let page = render(None, &values);

        assert!(page.contains("<option value=\"Excellent\" selected>Excellent</option>"));
        assert!(!page.contains("Ecstatic"));
    }

    #[test]
    fn test_delivered_notice_shows_sentiment() {
        let notice = Notice::Delivered {
            sentiment: SentimentLabel::Positive,
        };
        let page = render(Some(&notice), &HashMap::new());

        assert!(page.contains("notice success"));
        assert!(page.contains("Feedback sent successfully!"));
        assert!(page.contains("Sentiment detected: <strong>Positive</strong>"));
    }

    #[test]
    fn test_failed_notice_has_no_thank_you() {
        let notice = Notice::Failed {
            message: "Failed: 500\nInternal Error".to_string(),
        };
        let page = render(Some(&notice), &HashMap::new());

        assert!(page.contains("notice error"));
        assert!(page.contains("Failed: 500\nInternal Error"));
        assert!(!page.contains("Thank you"));
        assert!(!page.contains("notice success"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let notice = Notice::Invalid {
            message: "'Never' is not an option for Q3_Support".to_string(),
        };
        let page = render(Some(&notice), &HashMap::new());

        assert!(page.contains("&#x27;Never&#x27; is not an option for Q3_Support"));
    }
}
