//! Fixed keyword corpora shared by the analyzers. Hand-curated, never mutated.

/// Recognized skill terms, lower-case. Order is significant: matching and
/// missing skills are reported in this order.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Technical
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "typescript",
    "angular",
    "vue",
    "git",
    "aws",
    "docker",
    "kubernetes",
    // Business
    "project management",
    "agile",
    "scrum",
    "leadership",
    "team management",
    "strategic planning",
    "business development",
    "client relations",
    // Soft skills
    "communication",
    "problem solving",
    "critical thinking",
    "time management",
    "analytical skills",
    "collaboration",
    "adaptability",
];

/// Verb stems the ATS check looks for anywhere in the document (case-insensitive).
pub const ATS_VERBS: &[&str] = &[
    "lead",
    "manage",
    "develop",
    "implement",
    "improve",
    "achieve",
    "increase",
    "decrease",
];

/// Verbs a rewritten bullet may already start with.
pub const ACTION_VERBS: &[&str] = &[
    "Achieved",
    "Increased",
    "Decreased",
    "Improved",
    "Developed",
    "Implemented",
    "Managed",
    "Led",
    "Created",
    "Designed",
    "Optimized",
    "Streamlined",
    // Emitted by the rewriter itself
    "Reduced",
    "Accomplished",
];

/// Keyword triggers for verb selection, checked in order against the bullet text.
pub const VERB_TRIGGERS: &[(&[&str], &str)] = &[
    (&["team", "manage"], "Managed"),
    (&["create", "develop"], "Developed"),
    (&["improve", "optimize"], "Improved"),
    (&["increase", "growth"], "Increased"),
    (&["reduce", "cut"], "Reduced"),
    (&["lead"], "Led"),
    (&["design"], "Designed"),
    (&["implement"], "Implemented"),
];

/// Fallback verb triggers checked against the caller-supplied context.
pub const CONTEXT_VERB_TRIGGERS: &[(&str, &str)] = &[
    ("team", "Led"),
    ("project", "Managed"),
    ("development", "Developed"),
];

pub const FALLBACK_VERB: &str = "Accomplished";

/// Canned quantifiers substituted for vague amounts, keyed by what the bullet mentions.
pub const QUANTIFIERS: &[(&[&str], &str)] = &[
    (&["team"], "team of 5+ members"),
    (&["project"], "10+ projects"),
    (&["revenue", "sales"], "20%+"),
    (&["time", "efficiency"], "30%+"),
];

/// Technical skills expected for engineering roles. Matched case-sensitively.
pub const TECH_SKILLS: &[&str] = &["JavaScript", "Python", "Java", "React", "Node", "SQL", "Git"];

/// Skills expected for data and analyst roles. Matched case-sensitively.
pub const DATA_SKILLS: &[&str] = &["SQL", "Python", "Excel", "Analysis", "Reporting"];

/// Stems that signal leadership experience.
pub const LEADERSHIP_KEYWORDS: &[&str] = &["lead", "manage", "supervis", "direct", "team"];

/// Industry trigger in a job description → keywords expected in relevant experience.
pub const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("software", &["software", "development", "coding"]),
    ("marketing", &["marketing", "campaign", "brand"]),
    ("sales", &["sales", "revenue", "clients"]),
    ("finance", &["finance", "budget", "financial"]),
    ("education", &["education", "teaching", "students"]),
];

/// Job-description trigger substring → skills worth suggesting.
pub const SKILL_SUGGESTIONS: &[(&str, &[&str])] = &[
    // Technical
    ("javascript", &["JavaScript", "ES6+", "React", "Node.js"]),
    ("python", &["Python", "Django", "Flask", "Pandas"]),
    ("java", &["Java", "Spring", "Hibernate", "Maven"]),
    ("react", &["React", "Redux", "TypeScript", "JSX"]),
    ("sql", &["SQL", "Database Design", "MySQL", "PostgreSQL"]),
    ("html", &["HTML", "CSS", "Frontend Development"]),
    ("node", &["Node.js", "Express", "REST APIs", "Backend Development"]),
    ("aws", &["AWS", "Cloud Computing", "S3", "EC2"]),
    ("docker", &["Docker", "Containerization", "Kubernetes"]),
    // Business
    ("project manage", &["Project Management", "Agile", "Scrum", "Kanban"]),
    ("leadership", &["Leadership", "Team Management", "Mentoring"]),
    ("budget", &["Budget Management", "Financial Planning", "Cost Control"]),
    ("client", &["Client Relations", "Account Management", "Customer Success"]),
    ("sales", &["Sales", "Business Development", "Revenue Generation"]),
    ("market", &["Marketing", "SEO", "Digital Marketing", "Social Media"]),
    // Soft skills
    ("communicat", &["Communication", "Presentation", "Public Speaking"]),
    ("problem", &["Problem Solving", "Critical Thinking", "Analytical Skills"]),
    ("adapt", &["Adaptability", "Flexibility", "Change Management"]),
    ("collaborat", &["Collaboration", "Teamwork", "Cross-functional"]),
];

/// Capitalized technology names picked straight out of a job description.
pub const NAMED_TECHNOLOGIES: &[&str] = &[
    "React",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Angular",
    "Vue",
];

/// Work-history keyword → skill named in a generated summary. Table order.
pub const SUMMARY_SKILLS: &[(&str, &str)] = &[
    // Technical
    ("software", "Software Development"),
    ("code", "Programming"),
    ("program", "Software Engineering"),
    ("design", "UI/UX Design"),
    ("web", "Web Development"),
    ("app", "Application Development"),
    ("database", "Database Management"),
    ("sql", "SQL"),
    ("api", "API Development"),
    // Business
    ("manage", "Project Management"),
    ("team", "Team Leadership"),
    ("lead", "Leadership"),
    ("budget", "Budget Management"),
    ("strategy", "Strategic Planning"),
    ("sales", "Sales"),
    ("market", "Marketing"),
    ("client", "Client Relations"),
    ("business", "Business Development"),
    // Soft skills
    ("communicate", "Communication"),
    ("collaborate", "Collaboration"),
    ("adapt", "Adaptability"),
    ("problem", "Problem Solving"),
    ("analyze", "Analytical Thinking"),
    ("creative", "Creative Thinking"),
];

/// Added to summary skills when any entry mentions an engineer or developer.
pub const ENGINEERING_SUMMARY_SKILLS: &[&str] = &["Full-Stack Development", "Version Control (Git)"];

/// Industry label → terms, checked in order. First industry with a hit wins.
pub const INDUSTRY_TERMS: &[(&str, &[&str])] = &[
    (
        "tech",
        &["software", "technology", "tech", "it", "computer", "programming", "developer", "engineer"],
    ),
    (
        "finance",
        &["finance", "financial", "banking", "investment", "accounting", "trading"],
    ),
    (
        "healthcare",
        &["health", "medical", "hospital", "clinic", "pharmacy", "patient care"],
    ),
    (
        "retail",
        &["retail", "sales", "store", "merchandise", "customer service"],
    ),
    (
        "education",
        &["education", "school", "teaching", "university", "college", "student"],
    ),
    (
        "manufacturing",
        &["manufacturing", "production", "factory", "assembly", "industrial"],
    ),
];

/// Description stems that, with quantified achievements, mark high impact.
pub const IMPACT_LEADERSHIP_TERMS: &[&str] =
    &["manage", "lead", "supervis", "direct", "coordinate", "oversee"];

pub const LEADERSHIP_DESCRIPTION_TERMS: &[&str] =
    &["manage", "lead", "supervis", "direct", "head", "chief", "executive"];

pub const LEADERSHIP_POSITION_TERMS: &[&str] =
    &["manager", "director", "lead", "supervisor", "head", "chief", "executive"];

/// Derives the experience-relevance keywords for a lower-cased job description.
/// Table order, deduplicated.
pub fn domain_keywords_for(job_lower: &str) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = Vec::new();
    for (trigger, words) in DOMAIN_KEYWORDS {
        if job_lower.contains(trigger) {
            for word in *words {
                if !keywords.contains(word) {
                    keywords.push(*word);
                }
            }
        }
    }
    keywords
}
