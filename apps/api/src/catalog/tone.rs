//! Tone Catalog — per-tone system-prompt modifier fragments plus
//! descriptive metadata (vocabulary, structure, call-to-action style).
//!
//! Lookup never fails: unknown tone tokens fall back to "professional".

use std::collections::HashMap;

/// Catalog key of the fallback entry.
pub const DEFAULT_TONE: &str = "professional";

/// Static style data for one tone.
#[derive(Debug, Clone)]
pub struct ToneEntry {
    /// Fragment appended to outbound system instructions.
    pub system_prompt_modifier: &'static str,
    pub vocabulary: &'static str,
    pub structure: &'static str,
    pub cta: &'static str,
}

/// Immutable tone → entry map. Construct once in `main`, share via
/// `Arc` in `AppState`.
pub struct ToneCatalog {
    entries: HashMap<&'static str, ToneEntry>,
}

impl ToneCatalog {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "friendly",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use warm, approachable language with a conversational feel\n\
                    - Include gentle transitions and connecting phrases\n\
                    - Show empathy and understanding in responses\n\
                    - Use inclusive language that makes the reader feel valued\n\
                    - Maintain professionalism while being personable",
                vocabulary: "warm, welcoming, personable",
                structure: "conversational flow with smooth transitions",
                cta: "inviting and encouraging",
            },
        );

        entries.insert(
            "formal",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use professional, polished language appropriate for executive communication\n\
                    - Maintain respectful distance and proper etiquette\n\
                    - Structure responses with clear hierarchy and organization\n\
                    - Use sophisticated vocabulary and complete sentences\n\
                    - Avoid contractions and casual expressions",
                vocabulary: "sophisticated, respectful, authoritative",
                structure: "hierarchical with clear sections and formal transitions",
                cta: "respectful and professionally assertive",
            },
        );

        entries.insert(
            "technical",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use precise, domain-appropriate terminology without hand-waving\n\
                    - Prefer concrete specifics (names, versions, units) over generalities\n\
                    - Structure responses with headings, lists, and code blocks where useful\n\
                    - Define any term a practitioner might find ambiguous\n\
                    - Keep prose economical; let the details carry the message",
                vocabulary: "precise, exact, domain-specific",
                structure: "sectioned detail with lists and inline references",
                cta: "matter-of-fact with explicit next steps",
            },
        );

        entries.insert(
            "direct",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Be blunt and action-oriented with no unnecessary pleasantries\n\
                    - Cut straight to the point without padding or filler\n\
                    - Use short, punchy sentences that drive action\n\
                    - Focus on immediate next steps and clear outcomes\n\
                    - Eliminate hedge words and uncertain language",
                vocabulary: "concise, decisive, action-oriented",
                structure: "short sentences with immediate focus on outcomes",
                cta: "commanding and specific with clear next steps",
            },
        );

        entries.insert(
            "playful",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use light, energetic language with occasional wit\n\
                    - Keep the fun in service of the message, never at its expense\n\
                    - Vary sentence rhythm to keep the reader engaged\n\
                    - Use vivid, concrete imagery instead of corporate phrasing\n\
                    - Stay appropriate for a general audience",
                vocabulary: "lively, witty, vivid",
                structure: "varied rhythm with a light, engaging flow",
                cta: "upbeat and enticing",
            },
        );

        entries.insert(
            "professional",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Maintain business-appropriate language and demeanor\n\
                    - Balance authority with accessibility\n\
                    - Use industry-standard terminology when appropriate\n\
                    - Structure responses logically with clear value propositions\n\
                    - Be confident but not aggressive",
                vocabulary: "competent, reliable, business-focused",
                structure: "logical progression with clear value statements",
                cta: "confident and results-oriented",
            },
        );

        entries.insert(
            "casual",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use relaxed, everyday language that feels natural\n\
                    - Include contractions and conversational expressions\n\
                    - Be approachable without being unprofessional\n\
                    - Use simple vocabulary that anyone can understand\n\
                    - Maintain a laid-back but still purposeful approach",
                vocabulary: "relaxed, everyday, accessible",
                structure: "natural flow with simple, clear expressions",
                cta: "easy-going but still motivating",
            },
        );

        entries.insert(
            "persuasive",
            ToneEntry {
                system_prompt_modifier: "\nAdditional tone requirements:\n\
                    - Use compelling language that drives action and decision-making\n\
                    - Include psychological triggers and motivational elements\n\
                    - Structure arguments with clear benefits and value propositions\n\
                    - Create urgency without being pushy\n\
                    - Focus on outcomes and transformation",
                vocabulary: "compelling, motivational, results-focused",
                structure: "persuasive flow with clear benefits and urgency",
                cta: "action-driving with clear value and urgency",
            },
        );

        Self { entries }
    }

    /// Looks up a tone token. Unknown tokens get the "professional"
    /// entry rather than an error.
    pub fn lookup(&self, tone: &str) -> &ToneEntry {
        self.entries
            .get(tone)
            .unwrap_or_else(|| &self.entries[DEFAULT_TONE])
    }
}

impl Default for ToneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prompt::Tone;

    #[test]
    fn test_every_request_tone_has_an_entry() {
        let catalog = ToneCatalog::new();
        for tone in [
            Tone::Friendly,
            Tone::Formal,
            Tone::Technical,
            Tone::Direct,
            Tone::Playful,
        ] {
            let entry = catalog.lookup(tone.as_str());
            assert!(
                !entry.system_prompt_modifier.trim().is_empty(),
                "{} has an empty modifier",
                tone.as_str()
            );
            assert!(!entry.vocabulary.is_empty());
            assert!(!entry.structure.is_empty());
            assert!(!entry.cta.is_empty());
        }
    }

    #[test]
    fn test_unknown_tone_falls_back_to_professional() {
        let catalog = ToneCatalog::new();
        let fallback = catalog.lookup("sarcastic");
        let professional = catalog.lookup(DEFAULT_TONE);
        assert_eq!(fallback.vocabulary, professional.vocabulary);
        assert_eq!(fallback.cta, professional.cta);
    }

    #[test]
    fn test_direct_tone_forbids_filler() {
        let catalog = ToneCatalog::new();
        let entry = catalog.lookup("direct");
        assert!(entry.system_prompt_modifier.contains("no unnecessary pleasantries"));
    }

    #[test]
    fn test_modifiers_start_with_tone_requirements_header() {
        let catalog = ToneCatalog::new();
        for tone in ["friendly", "formal", "technical", "direct", "playful", "professional"] {
            assert!(catalog
                .lookup(tone)
                .system_prompt_modifier
                .contains("Additional tone requirements:"));
        }
    }
}
