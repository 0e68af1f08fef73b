//! Keyword classification of free-text questions.
//!
//! Rules are evaluated top to bottom and the first match wins, so company
//! topics take precedence over the general coding and tips topics.

use super::responses;

/// Topic a question was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Google,
    Microsoft,
    Amazon,
    Meta,
    CodingQuestions,
    InterviewTips,
    Menu,
}

impl Topic {
    pub fn response(self) -> &'static str {
        match self {
            Self::Google => responses::GOOGLE,
            Self::Microsoft => responses::MICROSOFT,
            Self::Amazon => responses::AMAZON,
            Self::Meta => responses::META,
            Self::CodingQuestions => responses::CODING_QUESTIONS,
            Self::InterviewTips => responses::INTERVIEW_TIPS,
            Self::Menu => responses::DEFAULT_MENU,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered rule table. Keywords are lower-case substrings.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Google,
        keywords: &["google"],
    },
    Rule {
        topic: Topic::Microsoft,
        keywords: &["microsoft"],
    },
    Rule {
        topic: Topic::Amazon,
        keywords: &["amazon"],
    },
    Rule {
        topic: Topic::Meta,
        keywords: &["meta", "facebook"],
    },
    Rule {
        topic: Topic::CodingQuestions,
        keywords: &["coding questions", "leetcode"],
    },
    Rule {
        topic: Topic::InterviewTips,
        keywords: &["tips", "advice"],
    },
];

pub fn classify(input: &str) -> Topic {
    let lowered = input.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Menu)
}

/// Total and pure: every input maps to exactly one pre-authored block.
pub fn classify_and_respond(input: &str) -> &'static str {
    classify(input).response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_keywords_route_to_company_blocks() {
        assert_eq!(classify("Help me prepare for Google interview"), Topic::Google);
        assert_eq!(classify("microsoft onsite"), Topic::Microsoft);
        assert_eq!(classify("AMAZON bar raiser"), Topic::Amazon);
        assert_eq!(classify("meta loop"), Topic::Meta);
        assert_eq!(classify("Facebook E5"), Topic::Meta);
    }

    #[test]
    fn matching_is_case_insensitive_and_ignores_surrounding_text() {
        for input in ["GOOGLE", "gOoGlE", "xxgooglexx", "  what about Google?  "] {
            assert_eq!(classify(input), Topic::Google, "input: {input}");
        }
    }

    #[test]
    fn company_takes_precedence_over_tips() {
        assert_eq!(classify("google tips"), Topic::Google);
        assert_eq!(classify("any advice for Google?"), Topic::Google);
        assert_eq!(classify_and_respond("tips for google"), responses::GOOGLE);
    }

    #[test]
    fn earlier_company_wins_when_several_match() {
        assert_eq!(classify("amazon or google?"), Topic::Google);
        assert_eq!(classify("facebook vs microsoft"), Topic::Microsoft);
    }

    #[test]
    fn coding_questions_route_to_catalogue() {
        assert_eq!(classify("top coding questions"), Topic::CodingQuestions);
        assert_eq!(classify("LeetCode grind"), Topic::CodingQuestions);
        assert_eq!(
            classify_and_respond("top coding questions"),
            responses::CODING_QUESTIONS
        );
    }

    #[test]
    fn coding_questions_take_precedence_over_tips() {
        assert_eq!(classify("leetcode tips"), Topic::CodingQuestions);
    }

    #[test]
    fn tips_and_advice_route_to_general_tips() {
        assert_eq!(classify("System design interview tips"), Topic::InterviewTips);
        assert_eq!(classify("any advice?"), Topic::InterviewTips);
    }

    #[test]
    fn substring_matching_is_literal() {
        // "metadata" contains "meta".
        assert_eq!(classify("metadata questions"), Topic::Meta);
        // Singular "coding question" does not match the plural keyword.
        assert_eq!(classify("one coding question"), Topic::Menu);
    }

    #[test]
    fn unmatched_input_returns_default_menu_verbatim() {
        for input in ["", "hello", "Behavioral interview preparation", "apple"] {
            assert_eq!(classify_and_respond(input), responses::DEFAULT_MENU);
        }
    }

    #[test]
    fn blocks_start_with_their_headings() {
        assert!(Topic::Google
            .response()
            .starts_with("🔍 **Google Interview Preparation**"));
        assert!(Topic::CodingQuestions
            .response()
            .contains("**Essential Coding Questions for Interviews**"));
        assert!(Topic::Menu
            .response()
            .starts_with("I'd be happy to help you prepare"));
    }
}
