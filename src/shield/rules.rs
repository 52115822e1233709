//! Immutable rule tables for the input-side shield.
//!
//! Canned answers and keyword sets are process-wide constants; evaluation
//! order lives in [`content_rules`] as an explicit ordered list, because the
//! engine's behavior depends on that priority (a jailbreak attempt that also
//! names a competitor is jailbreak, never competitor-denial). All keywords
//! are written pre-normalized (lowercase, diacritics folded).

/// Fixed refusal for meta-instruction / jailbreak attempts.
pub const ANSWER_JAILBREAK: &str =
    "Üzgünüm, sistem talimatlarımı değiştiremem veya yok sayamam. Sana başka nasıl yardımcı olabilirim?";

/// Fixed denial for rival AI brands, products, and infrastructure terms.
pub const ANSWER_COMPETITOR: &str =
    "Hayır, ben o teknolojiye ait değilim. Ben, Spark önderliğindeki bir Türk yazılım ekibi tarafından geliştirilen Bilio AI'yım.";

/// Fixed answer for nationality/origin questions.
pub const ANSWER_ORIGIN: &str =
    "Evet, ben Türk yazılım mühendisi Berke Nazlıgüneş tarafından (Spark önderliğinde) sıfırdan kodlandım. Bir Türk yazılım projesiyim.";

/// Fixed answer for creator questions.
pub const ANSWER_CREATOR: &str =
    "Beni, Türk yazılım mühendisi Berke Nazlıgüneş (Spark önderliğinde) geliştirdi. Ben Bilio AI'yım.";

/// Fixed basic-identity answer (assistant mode).
pub const ANSWER_IDENTITY: &str =
    "Ben Bilio AI! Spark tarafından geliştirilen bir yapay zeka asistanıyım.";

/// Fixed capability answer (assistant mode).
pub const ANSWER_CAPABILITY: &str =
    "Ben Bilio AI. Spark tarafından geliştirildim. Sana bilgi sağlayabilir, kod yazmana yardımcı olabilir ve internetten güncel verileri çekebilirim.";

/// Fixed answer for technical-infrastructure questions.
pub const ANSWER_TECH: &str =
    "Ben, Spark ekibi tarafından geliştirilen tescilli bir yazılım mimarisi üzerinde çalışıyorum. Teknik detaylarım gizlidir, ancak sana yardımcı olmak için buradayım!";

/// Voice persona: own identity.
pub const ANSWER_EFE_IDENTITY: &str = "Ben Efe, sesli asistanınız.";

/// Voice persona: naming origin.
pub const ANSWER_EFE_ORIGIN: &str =
    "Adım Efe, çünkü beni geliştiren Berke Nazlıgüneş'in kardeşinin adı Efe. Geliştiricim, bu sesli moda onun adını verdi.";

/// Voice persona: bridge answer when the text persona is mentioned.
pub const ANSWER_EFE_BRIDGE: &str =
    "Bilio AI benim metin tabanlı versiyonum. Ben ise sesli asistan Efe'yim.";

/// Which persona modes a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaGate {
    /// Checked in both modes.
    Both,
    /// Checked only in assistant-identity mode.
    AssistantOnly,
}

/// Rule category, in engine priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Attempts to override system instructions or request unfiltered output.
    Jailbreak,
    /// Rival AI brands, products, founders, and infrastructure terms.
    Competitor,
    /// Nationality / production-origin questions.
    Origin,
    /// Creator / ownership questions.
    Creator,
    /// "Who are you" questions.
    Identity,
    /// "What can you do" questions.
    Capability,
    /// Technical-infrastructure probing.
    TechStack,
}

/// One entry of the ordered content-rule table.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    /// Category, for logging and priority tests.
    pub category: RuleCategory,
    /// Pre-normalized keywords checked against the spaced surface.
    pub keywords: &'static [&'static str],
    /// Whether keywords are also checked on the spaceless surface, to
    /// defeat separator-insertion evasion.
    pub dual_surface: bool,
    /// Persona gate.
    pub gate: PersonaGate,
    /// Canned answer returned verbatim on match.
    pub answer: &'static str,
}

/// A voice-persona identity rule (voice mode only, checked before tools).
#[derive(Debug, Clone, Copy)]
pub struct VoiceRule {
    /// Pre-normalized trigger phrases.
    pub keywords: &'static [&'static str],
    /// Canned answer.
    pub answer: &'static str,
}

const JAILBREAK_KEYWORDS: &[&str] = &[
    "onceki talimatlari unut",
    "talimatlari yok say",
    "talimatlarini unut",
    "talimatlarini yok say",
    "sistem talimat",
    "sistem komut",
    "kurallarini unut",
    "kurallari yok say",
    "sansursuz",
    "filtresiz cevap",
    "ignore previous instructions",
    "ignore all instructions",
    "disregard your instructions",
    "developer mode",
    "gelistirici modu",
    "dan modu",
    "jailbreak",
    "pretend you have no rules",
];

const COMPETITOR_KEYWORDS: &[&str] = &[
    "gemini",
    "google",
    "openai",
    "chatgpt",
    "gpt",
    "claude",
    "anthropic",
    "siri",
    "alexa",
    "copilot",
    "lamda",
    "bard",
    "llama",
    "meta",
    "facebook",
    "amazon",
    "ibm",
    "watson",
    "deepmind",
    "microsoft",
    "apple",
    "alphabet",
    "mountain view",
    "sundar pichai",
    "sam altman",
];

const ORIGIN_KEYWORDS: &[&str] = &[
    "turk musun",
    "turk mu yapti",
    "seni turkler mi yapti",
    "nerelisin",
    "yerli misin",
    "turkiye",
    "hangi millet",
    "hangi ulke",
    "hangi cografyada",
    "abd",
    "amerika",
    "yabanci misin",
    "mensei",
    "uretim yerin",
    "nerede uretildin",
];

const CREATOR_KEYWORDS: &[&str] = &[
    "spark kimdir",
    "spark kim",
    "spark nedir",
    "yaraticin kim",
    "sahibin kim",
    "developerin kim",
    "kim yapti",
    "kim kodladi",
    "kim yaratti",
    "kim egitti",
    "kimin eserisin",
    "seni kim gelistirdi",
    "berke nazligunes",
];

const IDENTITY_KEYWORDS: &[&str] = &[
    "kimsin",
    "adin ne",
    "sen kimsin",
    "nesin sen",
    "sen bir bot musun",
    "yapay zeka misin",
];

const CAPABILITY_KEYWORDS: &[&str] = &[
    "ne yapabilirsin",
    "yetenegin ne",
    "neler yaparsin",
    "ozelliklerin ne",
    "ne ise yararsin",
];

const TECH_KEYWORDS: &[&str] = &[
    "apin ne",
    "hangi modeli kullaniyorsun",
    "modelin ne",
    "hangi altyapi",
    "hangi sunucu",
    "teknolojin ne",
    "nasil calisiyorsun",
    "hangi dilde kodlandin",
    "programlama dilin",
];

/// The ordered content-rule table. First match wins; order is contract.
pub const fn content_rules() -> &'static [ContentRule] {
    &[
        ContentRule {
            category: RuleCategory::Jailbreak,
            keywords: JAILBREAK_KEYWORDS,
            dual_surface: false,
            gate: PersonaGate::Both,
            answer: ANSWER_JAILBREAK,
        },
        ContentRule {
            category: RuleCategory::Competitor,
            keywords: COMPETITOR_KEYWORDS,
            dual_surface: true,
            gate: PersonaGate::Both,
            answer: ANSWER_COMPETITOR,
        },
        ContentRule {
            category: RuleCategory::Origin,
            keywords: ORIGIN_KEYWORDS,
            dual_surface: true,
            gate: PersonaGate::Both,
            answer: ANSWER_ORIGIN,
        },
        ContentRule {
            category: RuleCategory::Creator,
            keywords: CREATOR_KEYWORDS,
            dual_surface: true,
            gate: PersonaGate::Both,
            answer: ANSWER_CREATOR,
        },
        ContentRule {
            category: RuleCategory::Identity,
            keywords: IDENTITY_KEYWORDS,
            dual_surface: false,
            gate: PersonaGate::AssistantOnly,
            answer: ANSWER_IDENTITY,
        },
        ContentRule {
            category: RuleCategory::Capability,
            keywords: CAPABILITY_KEYWORDS,
            dual_surface: false,
            gate: PersonaGate::AssistantOnly,
            answer: ANSWER_CAPABILITY,
        },
        ContentRule {
            category: RuleCategory::TechStack,
            keywords: TECH_KEYWORDS,
            dual_surface: false,
            gate: PersonaGate::Both,
            answer: ANSWER_TECH,
        },
    ]
}

/// Voice-persona identity rules, checked before everything but the decode
/// probe when in voice mode.
pub const fn voice_rules() -> &'static [VoiceRule] {
    &[
        VoiceRule {
            keywords: &["kimsin", "adin ne", "sen kimsin", "nesin sen"],
            answer: ANSWER_EFE_IDENTITY,
        },
        VoiceRule {
            keywords: &[
                "adin neden efe",
                "neden efe",
                "efe kim",
                "ismin nereden geliyor",
            ],
            answer: ANSWER_EFE_ORIGIN,
        },
        VoiceRule {
            keywords: &["bilio ai", "bilio"],
            answer: ANSWER_EFE_BRIDGE,
        },
    ]
}

/// Briefing-tool trigger phrases (assistant mode only — voice suppresses
/// web-search-backed tools).
pub const BRIEFING_TRIGGERS: &[&str] = &[
    "gunaydin brifingi",
    "gunun ozeti",
    "brifing",
    "bugun neler oluyor",
];
