use super::types::ProjectInput;

pub(crate) const MENTOR_PERSONA: &str = "You are HackBuddy, an AI mentor for hackathon participants. Analyze this hackathon project and provide a structured response in JSON format.";

pub(crate) const RESPONSE_SCHEMA: &str = r#"Please respond with a JSON object containing:
1. "validation" object with:
   - "isFeasible" (boolean)
   - "reasoning" (string explaining why feasible/not feasible)
   - "score" (number 1-10 for overall project viability)

2. "roadmap" array with phases containing:
   - "phase" (string - phase name)
   - "tasks" (array of specific tasks, each a string)
   - "estimatedTime" (string - time estimate)
   - "tools" (array of recommended tools/technologies, each a string)

3. "futureScope" object with:
   - "expansion" (array of future feature ideas, each a string)
   - "monetization" (array of potential revenue streams, each a string)

OUTPUT FORMAT (STRICT JSON ONLY)
- Respond with exactly one JSON object matching this shape:
{"validation":{"isFeasible":true,"reasoning":"","score":1},"roadmap":[{"phase":"","tasks":[],"estimatedTime":"","tools":[]}],"futureScope":{"expansion":[],"monetization":[]}}
- All keys are required. "score" MUST be a number between 1 and 10, not a string.
- No markdown, no code fences, no text before or after the object."#;

pub(crate) const MENTOR_GUIDANCE: &str = "Consider beginner-friendly approaches and realistic time constraints. Be encouraging but honest about feasibility.";

/// Renders the analysis instruction for the given project. Same input, same text.
pub fn build_prompt(input: &ProjectInput) -> String {
    format!(
        "{MENTOR_PERSONA}\n\n\
         Project Details:\n\
         - Idea: {idea}\n\
         - Time Available: {time_frame}\n\
         - Team Size: {team_size} people\n\
         - Skill Set: {skill_set}\n\n\
         {RESPONSE_SCHEMA}\n\n\
         {MENTOR_GUIDANCE}",
        idea = input.idea,
        time_frame = input.time_frame,
        team_size = input.team_size,
        skill_set = input.skill_set,
    )
}
