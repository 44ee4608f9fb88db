use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// The four form fields describing a hackathon project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub idea: String,
    pub time_frame: String,
    pub team_size: String,
    pub skill_set: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Idea,
    TimeFrame,
    TeamSize,
    SkillSet,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Idea,
        InputField::TimeFrame,
        InputField::TeamSize,
        InputField::SkillSet,
    ];
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::Idea => "idea",
            InputField::TimeFrame => "time frame",
            InputField::TeamSize => "team size",
            InputField::SkillSet => "skill set",
        };
        write!(f, "{label}")
    }
}

impl ProjectInput {
    pub fn new(
        idea: impl Into<String>,
        time_frame: impl Into<String>,
        team_size: impl Into<String>,
        skill_set: impl Into<String>,
    ) -> Self {
        Self {
            idea: idea.into(),
            time_frame: time_frame.into(),
            team_size: team_size.into(),
            skill_set: skill_set.into(),
        }
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Idea => &self.idea,
            InputField::TimeFrame => &self.time_frame,
            InputField::TeamSize => &self.team_size,
            InputField::SkillSet => &self.skill_set,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Idea => &mut self.idea,
            InputField::TimeFrame => &mut self.time_frame,
            InputField::TeamSize => &mut self.team_size,
            InputField::SkillSet => &mut self.skill_set,
        }
    }

    pub fn missing_fields(&self) -> Vec<InputField> {
        InputField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Rejects the input if any field is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        match self.missing_fields().first() {
            Some(field) => Err(AnalysisError::InvalidInput { field: *field }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub validation: Feasibility,
    pub roadmap: Vec<RoadmapPhase>,
    pub future_scope: FutureScope,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feasibility {
    pub is_feasible: bool,
    pub reasoning: String,
    pub score: f64,
}

impl Feasibility {
    pub fn verdict(&self) -> &'static str {
        if self.is_feasible {
            "Feasible"
        } else {
            "Not Feasible"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub phase: String,
    pub tasks: Vec<String>,
    pub estimated_time: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureScope {
    pub expansion: Vec<String>,
    pub monetization: Vec<String>,
}

/// A completed analysis together with the input it was produced from.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub input: ProjectInput,
    pub result: AnalysisResult,
}

/// Renders a score without a trailing `.0` when it is integral.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}
