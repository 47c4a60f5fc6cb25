//! Board mock paper: prompt text and response parsing

use std::fmt;

/// Marks the boundary between exam pages in generated text
pub const PAGE_BREAK: &str = "--- PAGE BREAK ---";
/// Marks the start of the answer key in generated text
pub const SOLUTION_START: &str = "--- SOLUTION START ---";
/// Shown when the model returned no answer key
pub const MISSING_SOLUTION: &str = "Solution not provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Mathematics,
    Science,
    English,
    SocialStudies,
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    pub const ALL: [Subject; 7] = [
        Subject::Mathematics,
        Subject::Science,
        Subject::English,
        Subject::SocialStudies,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::SocialStudies => "Social Studies",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.as_str() == s)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board exam year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Tenth,
    Twelfth,
}

impl Grade {
    pub fn number(&self) -> u8 {
        match self {
            Grade::Tenth => 10,
            Grade::Twelfth => 12,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            10 => Some(Grade::Tenth),
            12 => Some(Grade::Twelfth),
            _ => None,
        }
    }
}

/// A parsed mock exam
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPaper {
    pub title: String,
    pub pages: Vec<String>,
    pub solution: String,
}

impl BoardPaper {
    /// Split generated text into trimmed pages and an answer key.
    ///
    /// Only the text between the first and second solution marker counts as
    /// the answer key.
    pub fn parse(subject: Subject, grade: Grade, text: &str) -> Self {
        let mut parts = text.split(SOLUTION_START);
        let main = parts.next().unwrap_or_default();
        let solution = match parts.next() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => MISSING_SOLUTION.to_string(),
        };
        let pages = main.split(PAGE_BREAK).map(|p| p.trim().to_string()).collect();

        Self {
            title: format!("{} - Class {} Board Mock", subject, grade.number()),
            pages,
            solution,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Instructions sent to the text model
pub fn build_prompt(subject: Subject, grade: Grade) -> String {
    format!(
        "Act as an expert Board Exam Paper Setter for Class {class}. Generate a highly predictable Board Mock Exam for {subject}.
The paper must strictly follow this structure:
1. Section A: Objective (Multiple Choice & One Word)
2. Section B: Short Answers
3. Section C: Long Answers

CRITICAL FORMATTING RULES:
- Use clean text. AVOID symbols like $, *, /, @.
- Use \"{PAGE_BREAK}\" as a marker to separate the content into 3-4 distinct logical pages.
- Include \"{SOLUTION_START}\" at the very end for a detailed solved answer key.
- Questions must be \"High Yield\" based on actual Board trends.",
        class = grade.number(),
        subject = subject,
    )
}
