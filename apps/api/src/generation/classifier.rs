//! Prompt classifier — maps free text to a topic category.
//!
//! Rules live in one ordered table. The first rule whose predicate holds wins,
//! so a prompt mentioning both coding and a small business is always `Coding`.
//! Anything unmatched (including the empty string) falls back to `General`.

use std::fmt;

use tracing::debug;

/// Topic bucket used to key the response bank. Never exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Coding,
    CoverLetter,
    Travel,
    PublicSpeaking,
    AiExplanation,
    Interview,
    LanguageLearning,
    Routine,
    Stress,
    Business,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Coding => "coding",
            Category::CoverLetter => "cover-letter",
            Category::Travel => "travel",
            Category::PublicSpeaking => "public-speaking",
            Category::AiExplanation => "ai-explanation",
            Category::Interview => "interview",
            Category::LanguageLearning => "language-learning",
            Category::Routine => "routine",
            Category::Stress => "stress",
            Category::Business => "business",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring test over an already-lowercased prompt.
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// Matches when any keyword is present.
    AnyOf(&'static [&'static str]),
    /// Matches only when every keyword is present.
    AllOf(&'static [&'static str]),
}

impl Predicate {
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::AnyOf(keywords) => keywords.iter().any(|kw| lowered.contains(kw)),
            Predicate::AllOf(keywords) => keywords.iter().all(|kw| lowered.contains(kw)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub predicate: Predicate,
}

/// Classification rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Coding,
        predicate: Predicate::AnyOf(&["start learning to code", "learn to code"]),
    },
    Rule {
        category: Category::CoverLetter,
        predicate: Predicate::AllOf(&["cover letter", "tech"]),
    },
    Rule {
        category: Category::Travel,
        predicate: Predicate::AnyOf(&["trip to paris", "weekend trip"]),
    },
    Rule {
        category: Category::PublicSpeaking,
        predicate: Predicate::AnyOf(&["public speaking", "improve my public speaking"]),
    },
    Rule {
        category: Category::AiExplanation,
        predicate: Predicate::AnyOf(&[
            "artificial intelligence",
            "explain artificial intelligence",
        ]),
    },
    Rule {
        category: Category::Interview,
        predicate: Predicate::AnyOf(&["job interview", "prepare for a job interview"]),
    },
    Rule {
        category: Category::LanguageLearning,
        predicate: Predicate::AnyOf(&[
            "learn a new language",
            "best way to learn a new language",
        ]),
    },
    Rule {
        category: Category::Routine,
        predicate: Predicate::AnyOf(&["morning routine", "build a morning routine"]),
    },
    Rule {
        category: Category::Stress,
        predicate: Predicate::AnyOf(&["managing stress", "stress in college"]),
    },
    Rule {
        category: Category::Business,
        predicate: Predicate::AnyOf(&["start a small business", "small business"]),
    },
];

/// Classifies a prompt against [`RULES`]. Total over all strings.
pub fn classify(prompt: &str) -> Category {
    classify_with(RULES, prompt)
}

/// Evaluates `rules` in order against the lowercased prompt.
pub fn classify_with(rules: &[Rule], prompt: &str) -> Category {
    let lowered = prompt.to_lowercase();

    let category = rules
        .iter()
        .find(|rule| rule.predicate.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::General);

    debug!("Matched category: {category}");
    category
}
