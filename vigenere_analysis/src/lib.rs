//! # Vigenère Analysis Library
//!
//! Ciphertext-only cryptanalysis of repeating-key (Vigenère) ciphers over the
//! 26-letter Latin alphabet.
//!
//! ## Pipeline
//!
//! 1. **Normalize** - lowercase the ciphertext and keep only a-z ([`normalize`])
//! 2. **Key length** - the first candidate whose average Index of Coincidence
//!    clears a threshold ([`KeyLengthEstimator`])
//! 3. **Columns** - one Caesar stream per key position ([`split_columns`])
//! 4. **Key** - the Chi-squared best shift of each column ([`recover_key`])
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::find_key;
//!
//! let ciphertext = "alp gwcsepul gtavaf, nlv prgpbpsu mb h jcpbyvdlq, ipltga rv glniypfa we ekl 16xs \
//!     nsjhlcb. px td o lccjdstslpahzn fptspf xstlxzi te iosj ezv sc xcns ttsoic lzlvrmhaw ez sjqijsa \
//!     xsp rwhr. tq vxspf sciov, alp wsphvcv pr ess rwxpqlvp nwlvvc dyi dswbhvo ef htqtafvyw hqzfbpg, \
//!     ezutewwm zcep xzmyr o scio ry tscoos rd woi pyqnmgelvr vpm . qbctnl xsp akbflowllmspwt nlwlpcg, \
//!     lccjdstslpahzn fptspfo oip qvx dfgysgelipp ec bfvbxlrnj ojocjvpw, ld akfv ekhr zys hskehy my \
//!     eva dclluxpih yoe mh yiacsoseehk fj l gebxwh sieesn we ekl iynfudktru. xsp yam zd woi qwoc.";
//!
//! let key = find_key(ciphertext)?;
//! assert_eq!(key.as_str(), "helloworld");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```
//!
//! Tuning goes through [`AnalysisConfig`]:
//!
//! ```rust
//! use vigenere_analysis::{AnalysisConfig, Analyzer, Language, SearchStrategy};
//!
//! let config = AnalysisConfig::builder()
//!     .max_key_length(20)
//!     .ioc_threshold(0.065)
//!     .language(Language::German)
//!     .strategy(SearchStrategy::BestInRange)
//!     .build()?;
//! let analyzer = Analyzer::new(config);
//! # Ok::<(), vigenere_analysis::ConfigError>(())
//! ```

// Public modules
pub mod analyzer;
pub mod columns;
pub mod config;
pub mod error;
pub mod frequency;
pub mod ioc;
pub mod key_length;
pub mod key_recovery;
pub mod text;
pub mod utils;

// Re-exports for easy access
pub use analyzer::{Analysis, Analyzer, find_key};
pub use columns::{CaesarStream, split_columns};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigFile, SearchStrategy};
pub use error::{AnalysisError, ConfigError, Result};
pub use frequency::{FrequencyTable, Language};
pub use ioc::{average_ioc, index_of_coincidence};
pub use key_length::{KeyLengthCandidate, KeyLengthEstimator, estimate_key_length};
pub use key_recovery::{RecoveredKey, ShiftScore, chi_squared, recover_key, recover_shift, score_shifts};
pub use text::{NormalizedText, normalize};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
