// Prompt constants for the text-generation collaborator.
// Templates use `{placeholder}` markers filled by `render` before sending.

/// Fills `{key}` markers in one pass. Inserted values are never rescanned, and
/// braces that do not name a known key are kept as written.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// System prompt for JSON-returning calls.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured career assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// System prompt for prose calls.
pub const WRITER_SYSTEM: &str = "You are an experienced career coach and professional resume writer. \
    Write in a confident, professional tone. Return only the requested text, \
    with no labels, preamble or formatting.";

/// Replace `{job_description}`.
pub const JOB_INSIGHTS_PROMPT_TEMPLATE: &str = r#"Analyze this job description and extract key information.

Job Description:
{job_description}

Return a JSON object with this structure:
{
  "keyRequirements": ["requirement1", "requirement2"],
  "preferredSkills": ["skill1", "skill2"],
  "experienceLevel": "Entry-Level | Mid-Level | Senior",
  "salaryRange": "estimated range if mentioned",
  "benefits": ["benefit1", "benefit2"]
}"#;

/// Replace `{title}`, `{company}`, `{job_description}`, `{applicant}`, `{summary}`,
/// `{experience}`, `{skills}`, `{missing_skills}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for the following job application.

Job Title: {title}
Company: {company}
Job Description: {job_description}

Applicant: {applicant}
Professional Summary: {summary}

Relevant Experience:
{experience}

Key Skills: {skills}
Skills the posting asks for that the applicant has not listed: {missing_skills}

Write 3-4 paragraphs in business letter format: a professional greeting, relevant
experience and skills, enthusiasm for the role, and a strong call to action.
Do not claim skills from the "not listed" line; frame them as areas of active growth."#;

/// Replace `{title}`, `{company}`, `{job_description}`.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate 8-10 relevant interview questions for this job position.

Job Title: {title}
Company: {company}
Job Description: {job_description}

Include behavioral, technical (if applicable), role-specific and company culture questions.
Return only the questions, one per line, no numbering."#;

/// Replace `{experience}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Generate a professional summary for a resume based on the following work experience.
Make it 2-3 sentences and highlight key achievements and skills. Focus on quantifiable results when possible.

Work Experience:
{experience}

Return only the summary text."#;
