//! Tests for persona instruction synthesis.

use bilio::persona::{build_instruction, prepend_instruction, PersonaMode};
use bilio::session::Session;
use bilio::upstream::{ConversationTurn, Role};

#[test]
fn conversation_flag_selects_the_persona() {
    assert_eq!(PersonaMode::from_conversation_flag(false), PersonaMode::Assistant);
    assert_eq!(PersonaMode::from_conversation_flag(true), PersonaMode::Voice);
}

#[test]
fn assistant_instruction_carries_the_product_identity() {
    let turn = build_instruction(PersonaMode::Assistant, &Session::default());
    let text = turn.text();
    assert_eq!(turn.role, Role::User);
    assert!(text.contains("Bilio AI"), "instruction: {text}");
    assert!(text.contains("Spark"), "instruction: {text}");
}

#[test]
fn assistant_instruction_embeds_recent_topics() {
    let mut session = Session::default();
    session.recent_topics = "futbol, hava".to_owned();
    let text = build_instruction(PersonaMode::Assistant, &session).text();
    assert!(text.contains("futbol, hava"), "instruction: {text}");
}

#[test]
fn voice_instruction_is_the_efe_persona() {
    let turn = build_instruction(PersonaMode::Voice, &Session::default());
    let text = turn.text();
    assert_eq!(turn.role, Role::User);
    assert!(text.contains("Sen Efe adında"), "instruction: {text}");
    // Efe denies being a product or a model; the product name appears only
    // inside that prohibition, never as the persona's own identity.
    assert!(
        text.contains("Bilio AI olduğunu söyleme"),
        "instruction: {text}"
    );
    assert!(!text.contains("Sen Bilio AI"), "instruction: {text}");
}

#[test]
fn voice_instruction_embeds_mood_topic_and_facts() {
    let mut session = Session::default();
    session.user_mood = "neşeli".to_owned();
    session.current_topic = "tatil planı".to_owned();
    session.add_fact("Kullanıcının adı Ali.");

    let text = build_instruction(PersonaMode::Voice, &session).text();
    assert!(text.contains("neşeli"), "instruction: {text}");
    assert!(text.contains("tatil planı"), "instruction: {text}");
    assert!(text.contains("Kullanıcının adı Ali."), "instruction: {text}");
}

#[test]
fn instruction_is_always_turn_zero() {
    let mut history = vec![
        ConversationTurn::user_text("merhaba"),
        ConversationTurn::user_text("dolar kuru ne kadar"),
    ];
    let instruction = build_instruction(PersonaMode::Assistant, &Session::default());
    prepend_instruction(&mut history, instruction.clone());

    assert_eq!(history.len(), 3);
    assert_eq!(history[0], instruction);
    assert_eq!(history[2].text(), "dolar kuru ne kadar");
}
