//! Lexical stress resolution for English words and lines of verse
//!
//! Stress comes from a pronouncing dictionary, except for a small table of
//! noun/verb heteronyms ("record", "present", "object", ...) whose stress
//! depends on how the word is used. For those, a part-of-speech hint or the
//! surrounding line decides which pattern applies.
//!
//! # Architecture
//!
//! - **dictionary**: the [`PronouncingDictionary`] capability and the
//!   CMUdict-format [`CmuDict`]
//! - **pos**: ordered regex families that label a word as noun or verb
//! - **rules**: data-driven rule sets (patterns plus overrides) loaded from TOML
//! - **resolver**: the resolution policy combining all of the above
//!
//! # Example
//!
//! ```rust
//! use scansion_core::{PosLabel, StressResolver};
//!
//! let resolver = StressResolver::english().unwrap();
//!
//! let noun = resolver.resolve_word("record", "the record shows", None).unwrap();
//! assert_eq!(noun.digits(), vec![0, 1]);
//!
//! let verb = resolver
//!     .resolve_word("record", "", Some(PosLabel::Verb))
//!     .unwrap();
//! assert_eq!(verb.digits(), vec![1, 0]);
//!
//! let line = resolver.resolve_line("hello asdkfjhasd");
//! assert!(line[1].is_unresolved());
//! ```

pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod pos;
pub mod resolver;
pub mod rules;
pub mod types;

pub use dictionary::{lookup_stress, CmuDict, PronouncingDictionary};
pub use error::{CoreError, Result};
pub use normalize::{normalize_word, tokenize_line};
pub use pos::{PosDisambiguator, WordMatcher};
pub use resolver::StressResolver;
pub use rules::{get_rules, list_available_rules, PosOverride, PosOverrideTable, StressRules};
pub use types::{PosLabel, Stress, StressPattern, WordStress, UNRESOLVED_WORD};
