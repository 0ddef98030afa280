//! Signed binary vote containers for a fixed-format poll reader.
//!
//! Each run produces one file per country: a big-endian container holding
//! the live questions, the results of closed polls, and a localized country
//! directory. The container is measured as it is assembled, written in a
//! single pass, stamped with its size and CRC32, then LZ11-compressed and
//! signed with RSA over SHA-1.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌────────────┐
//! │   source    │────▶│   tables     │────▶│   binary     │────▶│  signing   │
//! │ (questions, │     │ (questions,  │     │ (Container,  │     │ (lz11 +    │
//! │  vote rows) │     │  national,   │     │  finalize,   │     │  RSA/SHA1) │
//! └─────────────┘     │  worldwide,  │     │  seal)       │     └────────────┘
//!                     │  countries)  │     └──────────────┘           │
//!                     └──────────────┘                                ▼
//!        reference ─────────┘                              build (one file per
//!    (countries, languages)                                 country, in parallel)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use votebin::build::{run_build, BuildOptions};
//! use votebin::signing::Signer;
//! use votebin::source::JsonDataset;
//!
//! let source = JsonDataset::load(Path::new("dataset.json"), 50)?;
//! let signer = Signer::from_pem_file(Path::new("Private.pem"))?;
//! let report = run_build(&source, Some(&signer), &options)?;
//! ```

// Module declarations
pub mod binary;
pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod first_data;
pub mod lz11;
pub mod reference;
pub mod signing;
pub mod source;
pub mod tables;
pub mod testing;
pub mod util;

// Re-exports for public API
pub use binary::{format_tally, Container, Finalized, Section, VoteHeader};
pub use build::{run_build, run_first_data, BuildOptions, BuildReport};
pub use config::{FileType, GeneratorConfig, Locality, PruneStrategy};
pub use error::{Error, Result};
pub use signing::{verify, Signer};
pub use source::{DataSource, JsonDataset, Session};
pub use tables::{assemble, generate, TargetContext, TargetData};
