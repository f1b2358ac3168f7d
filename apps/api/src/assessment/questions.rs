//! Static question bank, grouped into ordered stages.

use crate::assessment::models::{AssessmentQuestion, QuestionType};

struct QuestionDef {
    id: &'static str,
    stage: i32,
    text: &'static str,
    question_type: QuestionType,
    options: &'static [&'static str],
    help_text: Option<&'static str>,
}

const YES_NO: &[&str] = &["yes", "no", "unsure"];

const QUESTION_BANK: &[QuestionDef] = &[
    // Stage 1: business context
    QuestionDef {
        id: "biz_employees",
        stage: 1,
        text: "How many employees does your organization have?",
        question_type: QuestionType::MultipleChoice,
        options: &["1-10", "11-50", "51-250", "251-1000", "1000+"],
        help_text: None,
    },
    QuestionDef {
        id: "biz_regions",
        stage: 1,
        text: "Do you operate in multiple countries or just domestically?",
        question_type: QuestionType::MultipleChoice,
        options: &["domestic", "eu", "multi_region"],
        help_text: None,
    },
    QuestionDef {
        id: "biz_offering",
        stage: 1,
        text: "What are your main products or services?",
        question_type: QuestionType::FreeText,
        options: &[],
        help_text: None,
    },
    // Stage 2: compliance discovery
    QuestionDef {
        id: "comp_frameworks",
        stage: 2,
        text: "Do you currently follow any compliance frameworks (like ISO, SOC 2, GDPR)?",
        question_type: QuestionType::YesNo,
        options: YES_NO,
        help_text: Some("Include frameworks you are working towards but not yet certified for."),
    },
    QuestionDef {
        id: "comp_audits",
        stage: 2,
        text: "Have you had any compliance audits in the past year?",
        question_type: QuestionType::YesNo,
        options: YES_NO,
        help_text: None,
    },
    QuestionDef {
        id: "comp_sensitive_data",
        stage: 2,
        text: "Do you handle sensitive customer data like payment information or health records?",
        question_type: QuestionType::YesNo,
        options: YES_NO,
        help_text: None,
    },
    // Stage 3: risk assessment
    QuestionDef {
        id: "risk_incidents",
        stage: 3,
        text: "Have you experienced any security incidents or data breaches?",
        question_type: QuestionType::YesNo,
        options: YES_NO,
        help_text: None,
    },
    QuestionDef {
        id: "risk_access",
        stage: 3,
        text: "How do you currently manage access to sensitive systems?",
        question_type: QuestionType::FreeText,
        options: &[],
        help_text: Some("For example: SSO, shared passwords, role-based access."),
    },
    QuestionDef {
        id: "risk_response_plan",
        stage: 3,
        text: "Do you have a documented incident response plan?",
        question_type: QuestionType::YesNo,
        options: YES_NO,
        help_text: None,
    },
];

/// Number of stages in the bank.
pub fn total_stages() -> i32 {
    QUESTION_BANK.iter().map(|q| q.stage).max().unwrap_or(0)
}

/// Questions for `stage` in bank order. Unknown stages yield an empty list.
pub fn questions_for_stage(stage: i32) -> Vec<AssessmentQuestion> {
    QUESTION_BANK
        .iter()
        .filter(|q| q.stage == stage)
        .map(|q| AssessmentQuestion {
            id: q.id,
            stage: q.stage,
            text: q.text,
            question_type: q.question_type,
            options: q.options.to_vec(),
            help_text: q.help_text,
        })
        .collect()
}

/// Stage a question id belongs to, if it is in the bank.
pub fn stage_of(question_id: &str) -> Option<i32> {
    QUESTION_BANK
        .iter()
        .find(|q| q.id == question_id)
        .map(|q| q.stage)
}
