// Survey questions and the answers collected for them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while turning raw form fields into a [`SurveyResponse`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: &'static str, value: String },

    #[error("No answer given for {field}")]
    MissingAnswer { field: &'static str },
}

/// A single-choice question whose answers form a fixed, ordered option list
pub trait Choice: Copy + FromStr<Err = SurveyError> + 'static {
    /// Record key the answer is stored under
    const FIELD: &'static str;

    /// Every option, in display order
    fn options() -> &'static [Self];

    /// Option text as shown to the respondent and sent downstream
    fn as_str(&self) -> &'static str;
}

macro_rules! survey_choice {
    (
        $(#[$meta:meta])*
        $name:ident => $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;

            fn options() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SurveyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(SurveyError::UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

survey_choice! {
    /// Overall morale and positivity within the team
    Morale => "Q1_Morale" {
        Excellent => "Excellent",
        Good => "Good",
        Fair => "Fair",
        NeedsImprovement => "Needs improvement",
    }
}

survey_choice! {
    /// Clarity of current goals and priorities
    GoalsClarity => "Q2_GoalsClarity" {
        VeryClear => "Very clear",
        SomewhatClear => "Somewhat clear",
        Neutral => "Neutral",
        NotVeryClear => "Not very clear",
        NotClearAtAll => "Not clear at all",
    }
}

survey_choice! {
    Support => "Q3_Support" {
        AlwaysSupported => "Always supported",
        UsuallySupported => "Usually supported",
        SometimesSupported => "Sometimes supported",
        RarelySupported => "Rarely supported",
    }
}

survey_choice! {
    Communication => "Q4_Communication" {
        VeryEffectively => "Very effectively",
        Effectively => "Effectively",
        SomewhatEffectively => "Somewhat effectively",
        Ineffectively => "Ineffectively",
    }
}

survey_choice! {
    Workload => "Q5_Workload" {
        VeryManageable => "Very manageable",
        Manageable => "Manageable",
        OccasionallyOverwhelming => "Occasionally overwhelming",
        OftenOverwhelming => "Often overwhelming",
    }
}

survey_choice! {
    /// How feedback and continuous improvement are handled
    FeedbackHandling => "Q6_FeedbackHandling" {
        VeryWell => "Very well",
        Well => "Well",
        NeedsImprovement => "Needs improvement",
        Poorly => "Poorly",
    }
}

survey_choice! {
    /// Satisfaction with professional growth opportunities
    Growth => "Q7_Growth" {
        VerySatisfied => "Very satisfied",
        Satisfied => "Satisfied",
        Neutral => "Neutral",
        Dissatisfied => "Dissatisfied",
    }
}

survey_choice! {
    /// Confidence in where projects are heading
    Confidence => "Q8_Confidence" {
        VeryConfident => "Very confident",
        SomewhatConfident => "Somewhat confident",
        Neutral => "Neutral",
        NotConfident => "Not confident",
    }
}

survey_choice! {
    Recognition => "Q9_Recognition" {
        VeryWell => "Very well",
        Well => "Well",
        NeedsImprovement => "Needs improvement",
        Poorly => "Poorly",
    }
}

/// Record key of the open-ended answer
pub const OPEN_ENDED_FIELD: &str = "Q10_OpenEnded";

/// One respondent's answers, frozen at submission time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    #[serde(rename = "Q1_Morale")]
    pub morale: Morale,
    #[serde(rename = "Q2_GoalsClarity")]
    pub goals_clarity: GoalsClarity,
    #[serde(rename = "Q3_Support")]
    pub support: Support,
    #[serde(rename = "Q4_Communication")]
    pub communication: Communication,
    #[serde(rename = "Q5_Workload")]
    pub workload: Workload,
    #[serde(rename = "Q6_FeedbackHandling")]
    pub feedback_handling: FeedbackHandling,
    #[serde(rename = "Q7_Growth")]
    pub growth: Growth,
    #[serde(rename = "Q8_Confidence")]
    pub confidence: Confidence,
    #[serde(rename = "Q9_Recognition")]
    pub recognition: Recognition,
    /// Free text, may be empty
    #[serde(rename = "Q10_OpenEnded", default)]
    pub open_ended: String,
}

impl SurveyResponse {
    /// Build a response from raw submitted fields keyed by record key.
    ///
    /// Every choice question must be answered with one of its options. A
    /// missing open-ended answer is treated as empty.
    pub fn from_fields<'a, F>(lookup: F) -> Result<Self, SurveyError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        Ok(Self {
            morale: parse_choice(&lookup)?,
            goals_clarity: parse_choice(&lookup)?,
            support: parse_choice(&lookup)?,
            communication: parse_choice(&lookup)?,
            workload: parse_choice(&lookup)?,
            feedback_handling: parse_choice(&lookup)?,
            growth: parse_choice(&lookup)?,
            confidence: parse_choice(&lookup)?,
            recognition: parse_choice(&lookup)?,
            open_ended: lookup(OPEN_ENDED_FIELD).unwrap_or_default().to_string(),
        })
    }
}

fn parse_choice<'a, T, F>(lookup: &F) -> Result<T, SurveyError>
where
    T: Choice,
    F: Fn(&str) -> Option<&'a str>,
{
    match lookup(T::FIELD) {
        Some(value) => value.parse(),
        None => Err(SurveyError::MissingAnswer { field: T::FIELD }),
    }
}

/// Kind of answer a question expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Exactly one entry from `options`
    SingleChoice,
    /// Unconstrained, optional text
    Text,
}

/// A question as presented to respondents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Record key the answer is stored under
    pub id: String,
    /// 1-based position in the survey
    pub number: u8,
    /// Prompt shown to the respondent
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Question {
    fn choice<T: Choice>(number: u8, prompt: &str) -> Self {
        Self {
            id: T::FIELD.to_string(),
            number,
            prompt: prompt.to_string(),
            kind: QuestionKind::SingleChoice,
            options: Some(T::options().iter().map(|o| o.as_str().to_string()).collect()),
        }
    }

    fn text(number: u8, id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            number,
            prompt: prompt.to_string(),
            kind: QuestionKind::Text,
            options: None,
        }
    }
}

/// The survey's questions in presentation order
pub fn questions() -> Vec<Question> {
    vec![
        Question::choice::<Morale>(
            1,
            "How would you describe the overall morale and positivity within our team?",
        ),
        Question::choice::<GoalsClarity>(
            2,
            "How clear are your current goals and priorities for ongoing projects?",
        ),
        Question::choice::<Support>(
            3,
            "How supported do you feel by the team when facing challenges?",
        ),
        Question::choice::<Communication>(
            4,
            "How effectively does our team share information and keep everyone informed?",
        ),
        Question::choice::<Workload>(
            5,
            "How would you rate our team's workload and time management?",
        ),
        Question::choice::<FeedbackHandling>(
            6,
            "How well do you think we handle feedback and continuous improvement?",
        ),
        Question::choice::<Growth>(
            7,
            "How satisfied are you with opportunities for professional growth and skill development?",
        ),
        Question::choice::<Confidence>(
            8,
            "How confident are you in the direction our projects are heading over the next few months?",
        ),
        Question::choice::<Recognition>(
            9,
            "How well do you think the team recognizes and celebrates achievements?",
        ),
        Question::text(
            10,
            OPEN_ENDED_FIELD,
            "What one change or improvement do you think would make the biggest positive difference for our team?",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn complete_fields() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("Q1_Morale", "Good"),
            ("Q2_GoalsClarity", "Not clear at all"),
            ("Q3_Support", "Usually supported"),
            ("Q4_Communication", "Effectively"),
            ("Q5_Workload", "Often overwhelming"),
            ("Q6_FeedbackHandling", "Needs improvement"),
            ("Q7_Growth", "Neutral"),
            ("Q8_Confidence", "Very confident"),
            ("Q9_Recognition", "Poorly"),
            ("Q10_OpenEnded", "More pairing sessions"),
        ])
    }

    #[test]
    fn test_option_sets_match_survey() {
        let labels = |opts: &[&str]| opts.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let qs = questions();
        assert_eq!(qs.len(), 10);
        assert_eq!(
            qs[0].options,
            Some(labels(&["Excellent", "Good", "Fair", "Needs improvement"]))
        );
        assert_eq!(
            qs[1].options,
            Some(labels(&[
                "Very clear",
                "Somewhat clear",
                "Neutral",
                "Not very clear",
                "Not clear at all"
            ]))
        );
        assert_eq!(
            qs[8].options,
            Some(labels(&["Very well", "Well", "Needs improvement", "Poorly"]))
        );
        assert_eq!(qs[9].kind, QuestionKind::Text);
        assert!(qs[9].options.is_none());
        for (i, q) in qs.iter().enumerate() {
            assert_eq!(q.number as usize, i + 1);
        }
    }

    #[test]
    fn test_from_fields_parses_every_answer() {
        let fields = complete_fields();
        let response = SurveyResponse::from_fields(|k| fields.get(k).copied()).unwrap();

        assert_eq!(response.morale, Morale::Good);
        assert_eq!(response.goals_clarity, GoalsClarity::NotClearAtAll);
        assert_eq!(response.growth, Growth::Neutral);
        assert_eq!(response.recognition, Recognition::Poorly);
        assert_eq!(response.open_ended, "More pairing sessions");
        assert_eq!(response.workload, Workload::OftenOverwhelming);
    }

    #[test]
    fn test_from_fields_allows_missing_open_ended() {
        let mut fields = complete_fields();
        fields.remove("Q10_OpenEnded");
        let response = SurveyResponse::from_fields(|k| fields.get(k).copied()).unwrap();
        assert_eq!(response.open_ended, "");
    }

    #[test]
    fn test_from_fields_rejects_unknown_option() {
        let mut fields = complete_fields();
        fields.insert("Q4_Communication", "Telepathically");
        let err = SurveyResponse::from_fields(|k| fields.get(k).copied()).unwrap_err();
        assert_eq!(
            err,
            SurveyError::UnknownOption {
                field: "Q4_Communication",
                value: "Telepathically".to_string()
            }
        );
    }

    #[test]
    fn test_from_fields_rejects_missing_choice() {
        let mut fields = complete_fields();
        fields.remove("Q1_Morale");
        let err = SurveyResponse::from_fields(|k| fields.get(k).copied()).unwrap_err();
        assert_eq!(err, SurveyError::MissingAnswer { field: "Q1_Morale" });
    }

    #[test]
    fn test_option_text_is_case_sensitive() {
        assert!("needs improvement".parse::<Morale>().is_err());
        assert_eq!(
            "Needs improvement".parse::<Morale>().unwrap(),
            Morale::NeedsImprovement
        );
    }

    #[test]
    fn test_response_json_uses_record_keys() {
        let fields = complete_fields();
        let response = SurveyResponse::from_fields(|k| fields.get(k).copied()).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["Q2_GoalsClarity"], "Not clear at all");
        assert_eq!(value["Q10_OpenEnded"], "More pairing sessions");
        assert_eq!(value.as_object().unwrap().len(), 10);
    }
}
