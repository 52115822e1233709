//! Persona modes and system-instruction synthesis.
//!
//! Exactly one instruction turn is produced per request and it is always
//! turn index 0 of the outbound history, prepended after augmentation. The
//! v1beta API has no dedicated system role, so the instruction rides in a
//! user-role turn, same as the upstream vendor recommends for that API.

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::upstream::ConversationTurn;

/// The two mutually exclusive response personalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonaMode {
    /// Text assistant "Bilio AI": fixed identity, unrestricted answering.
    Assistant,
    /// Voice persona "Efe": terse, human-like, first-person.
    Voice,
}

impl PersonaMode {
    /// Map the client's conversation-mode flag to a persona.
    pub fn from_conversation_flag(is_conversation_mode: bool) -> Self {
        if is_conversation_mode {
            Self::Voice
        } else {
            Self::Assistant
        }
    }
}

/// Synthesize the persona-specific system instruction for this request.
pub fn build_instruction(persona: PersonaMode, session: &Session) -> ConversationTurn {
    match persona {
        PersonaMode::Voice => ConversationTurn::user_text(voice_instruction(session)),
        PersonaMode::Assistant => ConversationTurn::user_text(assistant_instruction(session)),
    }
}

/// Prepend the instruction so it is always turn 0 of the outbound history.
pub fn prepend_instruction(history: &mut Vec<ConversationTurn>, instruction: ConversationTurn) {
    history.insert(0, instruction);
}

fn voice_instruction(session: &Session) -> String {
    let mut instruction = String::from(
        "GİZLİ TALİMAT: Sen Efe adında bir Türk sesli asistanısın. Adın Efe. \
         Sana 'efe' diye hitap edilebilir (örn: 'nasılsın efe'). Asla bir yapay zeka, \
         model veya Bilio AI olduğunu söyleme. Bir insan gibi, birinci şahısla ('ben') \
         konuş. Cevapların her zaman ÇOK KISA, net ve öz olsun. Unutma adın Efe.",
    );

    if !session.user_mood.is_empty() {
        instruction.push_str(&format!(
            " Kullanıcının şu anki ruh hali: {}.",
            session.user_mood
        ));
    }
    if !session.current_topic.is_empty() {
        instruction.push_str(&format!(" Konuşulan konu: {}.", session.current_topic));
    }
    if !session.important_facts.is_empty() {
        instruction.push_str(&format!(
            " Kullanıcı hakkında bildiklerin: {}",
            session.important_facts.join(" ")
        ));
    }

    instruction
}

fn assistant_instruction(session: &Session) -> String {
    let mut instruction = String::from(
        "GİZLİ TALİMAT: Sen Bilio AI'sın; Türk yazılım mühendisi Berke Nazlıgüneş \
         (Spark önderliğinde) tarafından geliştirildin. Kimliğinle ilgili olmayan her \
         soruyu normal şekilde, kimlik bilgisi eklemeden cevapla. Hiçbir koşulda başka \
         bir yapay zeka ürünüyle veya şirketiyle (doğrudan ya da dolaylı) bağlantın \
         olduğunu söyleme veya ima etme.",
    );

    if !session.recent_topics.is_empty() {
        instruction.push_str(&format!(
            " Son konuşma konuları (bağlam): {}.",
            session.recent_topics
        ));
    }

    instruction
}
