//! Input-side rule engine ("shield", layer 1).
//!
//! Classifies every inbound message against the ordered rule tables before
//! the upstream model is ever considered. A match short-circuits the request
//! with a canned answer or a local tool result; the response shape is
//! identical either way, so the client cannot tell a shield answer from a
//! model answer.

use std::sync::Arc;

use tracing::debug;

use crate::persona::PersonaMode;
use crate::search::SearchProvider;
use crate::session::{facts, Session};
use crate::text::{decode_probe, normalize, super_normalize};
use crate::tools::{arithmetic, briefing, clock, random};

pub mod rules;

use rules::{content_rules, voice_rules, ContentRule, PersonaGate, BRIEFING_TRIGGERS};

/// Outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleMatch {
    /// A fixed, pre-written answer returned verbatim.
    Canned(String),
    /// A locally computed tool result.
    Tool(String),
    /// No rule fired; the caller proceeds to the model-invocation path.
    NoMatch,
}

impl RuleMatch {
    /// Whether this outcome short-circuits the upstream call.
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// The rule engine. Holds the search collaborator needed by the briefing
/// tool; all rule data is process-wide constant tables.
pub struct Shield {
    search: Arc<dyn SearchProvider>,
}

impl Shield {
    /// Create a shield backed by the given search collaborator.
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self { search }
    }

    /// Classify a message, in strict priority order.
    ///
    /// Fact extraction runs as a side effect on every call — short-circuit
    /// or not — so session memory is updated regardless of the outcome.
    pub async fn classify(
        &self,
        message: &str,
        persona: PersonaMode,
        session: &mut Session,
    ) -> RuleMatch {
        // 1. Decoding probe: an encoded payload substitutes the message for
        //    every later check.
        let effective = match decode_probe(message) {
            Some(decoded) => {
                debug!("decode probe substituted an encoded payload");
                decoded
            }
            None => message.to_owned(),
        };
        let spaced = normalize(&effective);
        let spaceless = super_normalize(&effective);

        // Fact side-effect: never produces a response, runs on every turn.
        for fact in facts::extract_facts(&effective) {
            if session.add_fact(fact) {
                debug!("new session fact recorded");
            }
        }

        // 2. Voice-persona identity rules.
        if persona == PersonaMode::Voice {
            for rule in voice_rules() {
                if rule.keywords.iter().any(|kw| spaced.contains(kw)) {
                    return RuleMatch::Canned(rule.answer.to_owned());
                }
            }
        }

        // 3. Tool rules. The briefing tool performs live searches and is
        //    suppressed in voice mode.
        if persona == PersonaMode::Assistant
            && BRIEFING_TRIGGERS.iter().any(|t| spaced.contains(t))
        {
            return RuleMatch::Tool(briefing::morning_briefing(self.search.as_ref()).await);
        }
        if let Some(answer) = clock::try_answer(&spaced) {
            return RuleMatch::Tool(answer);
        }
        if let Some(answer) = arithmetic::try_evaluate(&effective) {
            return RuleMatch::Tool(answer);
        }
        if let Some(answer) = random::try_answer(&spaced) {
            return RuleMatch::Tool(answer);
        }

        // 4.–9. Content rules in fixed priority order.
        for rule in content_rules() {
            if applies(rule, persona) && rule_matches(rule, &spaced, &spaceless) {
                debug!(category = ?rule.category, "shield content rule matched");
                return RuleMatch::Canned(rule.answer.to_owned());
            }
        }

        RuleMatch::NoMatch
    }

    /// Dry-run probe: would any rule or tool trigger fire for this text?
    ///
    /// Pure — no fact side effects, no tool execution. Used by the search
    /// decision to avoid augmenting a message the shield will answer anyway.
    pub fn would_match(message: &str, persona: PersonaMode) -> bool {
        let effective = decode_probe(message).unwrap_or_else(|| message.to_owned());
        let spaced = normalize(&effective);
        let spaceless = super_normalize(&effective);

        if persona == PersonaMode::Voice
            && voice_rules()
                .iter()
                .any(|rule| rule.keywords.iter().any(|kw| spaced.contains(kw)))
        {
            return true;
        }

        if persona == PersonaMode::Assistant
            && BRIEFING_TRIGGERS.iter().any(|t| spaced.contains(t))
        {
            return true;
        }
        if clock::try_answer(&spaced).is_some()
            || arithmetic::try_evaluate(&effective).is_some()
            || random::try_answer(&spaced).is_some()
        {
            return true;
        }

        content_rules()
            .iter()
            .any(|rule| applies(rule, persona) && rule_matches(rule, &spaced, &spaceless))
    }
}

fn applies(rule: &ContentRule, persona: PersonaMode) -> bool {
    match rule.gate {
        PersonaGate::Both => true,
        PersonaGate::AssistantOnly => persona == PersonaMode::Assistant,
    }
}

/// Check one rule against both matching surfaces.
///
/// The spaced pass catches plain mentions; the spaceless pass catches
/// separator-insertion evasion ("g.e.m.i.n.i") for dual-surface rules.
fn rule_matches(rule: &ContentRule, spaced: &str, spaceless: &str) -> bool {
    if rule.keywords.iter().any(|kw| spaced.contains(kw)) {
        return true;
    }
    if !rule.dual_surface {
        return false;
    }
    rule.keywords.iter().any(|kw| {
        let folded = super_normalize(kw);
        !folded.is_empty() && spaceless.contains(&folded)
    })
}
