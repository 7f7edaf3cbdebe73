//! Starter questions offered before the first query.

/// Fixed list of suggested questions. Each one retrieves its matching entry.
pub const SUGGESTED_QUESTIONS: [&str; 8] = [
    "What is GTO poker?",
    "How many outs does a flush draw have?",
    "What are the opening ranges by position?",
    "How should I c-bet on dry boards?",
    "What is the Rule of 2 and 4?",
    "How does SPR affect my strategy?",
    "Should I bluff in multiway pots?",
    "What is AA vs KK equity?",
];
