//! Text generator port
//!
//! The generative language model is an external collaborator with a single
//! capability: turn a prompt into text. The core never retries; whether a
//! [`GenerationError::Transient`] is worth another attempt is the caller's
//! decision.
//!
//! # Example
//!
//! ```
//! use aidoc_core::{Author, GenerationError};
//! use aidoc_model::DocumentType;
//!
//! let generator = |_prompt: &str| -> Result<String, GenerationError> {
//!     Ok("  • Point one\n• Point two  ".to_string())
//! };
//! let author = Author::new(generator);
//! let content = author.draft_section("Rust", "Safety", DocumentType::Slide)?;
//! assert_eq!(content, "• Point one\n• Point two");
//! # Ok::<(), aidoc_core::CoreError>(())
//! ```

use aidoc_model::{DocumentType, Section};
use log::debug;
use thiserror::Error;

use crate::error::Result;
use crate::outline::{clean_outline, outline_sections};
use crate::prompts::{outline_prompt, refine_prompt, section_prompt};

/// Failure reported by a text generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// May succeed if attempted again (rate limit, timeout)
    #[error("transient generator failure: {0}")]
    Transient(String),

    /// Will not succeed for this prompt (bad credentials, refused)
    #[error("permanent generator failure: {0}")]
    Permanent(String),
}

impl GenerationError {
    /// Whether a retry could help
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Something that turns a prompt into natural-language text.
///
/// The output has no guaranteed structure, length, or absence of filler.
pub trait TextGenerator {
    /// Generate text for a prompt
    fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> std::result::Result<String, GenerationError>,
{
    fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        self(prompt)
    }
}

/// Drafts, refines and outlines content through a [`TextGenerator`]
pub struct Author<G> {
    generator: G,
}

impl<G: TextGenerator> Author<G> {
    /// Create an author backed by `generator`
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        let text = self.generator.generate(prompt)?;
        Ok(text.trim().to_string())
    }

    /// Generate content for one section
    pub fn draft_section(
        &self,
        topic: &str,
        section_title: &str,
        doc_type: DocumentType,
    ) -> Result<String> {
        debug!("Drafting section '{}' ({})", section_title, doc_type);
        self.ask(&section_prompt(topic, section_title, doc_type))
    }

    /// Rewrite existing content following an instruction
    pub fn refine_section(&self, current_content: &str, instruction: &str) -> Result<String> {
        debug!("Refining content: {}", instruction);
        self.ask(&refine_prompt(current_content, instruction))
    }

    /// Suggest `count` empty sections for a topic
    pub fn suggest_outline(
        &self,
        topic: &str,
        count: usize,
        doc_type: DocumentType,
    ) -> Result<Vec<Section>> {
        let raw = self.ask(&outline_prompt(topic, count, doc_type))?;
        let titles = clean_outline(&raw, count, doc_type);
        Ok(outline_sections(&titles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    type PromptLog = Rc<RefCell<Vec<String>>>;

    /// Records prompts into a shared log and replies with a fixed answer
    struct ScriptedGenerator {
        reply: std::result::Result<String, GenerationError>,
        prompts: PromptLog,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> (Self, PromptLog) {
            Self::with_reply(Ok(reply.to_string()))
        }

        fn failing(err: GenerationError) -> (Self, PromptLog) {
            Self::with_reply(Err(err))
        }

        fn with_reply(reply: std::result::Result<String, GenerationError>) -> (Self, PromptLog) {
            let prompts = PromptLog::default();
            let generator = Self {
                reply,
                prompts: Rc::clone(&prompts),
            };
            (generator, prompts)
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_draft_section_trims_and_uses_prompt() {
        let (generator, prompts) = ScriptedGenerator::replying("\n  Body text \n");
        let author = Author::new(generator);
        let text = author
            .draft_section("Solar", "Costs", DocumentType::Word)
            .unwrap();
        assert_eq!(text, "Body text");

        let prompts = prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Section Title: Costs"));
    }

    #[test]
    fn test_refine_section() {
        let (generator, prompts) = ScriptedGenerator::replying("Shorter.");
        let author = Author::new(generator);
        let text = author.refine_section("Long text", "shorten").unwrap();
        assert_eq!(text, "Shorter.");
        assert!(prompts.borrow()[0].contains("Long text"));
    }

    #[test]
    fn test_suggest_outline() {
        let (generator, _) =
            ScriptedGenerator::replying("Here are the titles:\n1. Intro\n2. Costs");
        let author = Author::new(generator);
        let sections = author
            .suggest_outline("Solar", 3, DocumentType::Slide)
            .unwrap();
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Costs", "Slide 3"]);
        assert_eq!(sections[2].id, 3);
    }

    #[test]
    fn test_errors_are_not_retried() {
        let (generator, prompts) =
            ScriptedGenerator::failing(GenerationError::Transient("rate limited".to_string()));
        let author = Author::new(generator);
        let err = author
            .draft_section("Solar", "Costs", DocumentType::Slide)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Generation(GenerationError::Transient(_))
        ));
        assert_eq!(prompts.borrow().len(), 1);
    }

    #[test]
    fn test_closure_generator() {
        let generator =
            |_: &str| -> std::result::Result<String, GenerationError> { Ok("ok".to_string()) };
        let author = Author::new(generator);
        assert_eq!(author.refine_section("a", "b").unwrap(), "ok");
    }

    #[test]
    fn test_is_transient() {
        assert!(GenerationError::Transient("x".into()).is_transient());
        assert!(!GenerationError::Permanent("x".into()).is_transient());
    }
}
