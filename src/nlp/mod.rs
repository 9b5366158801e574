//! Natural Language Processing components
//!
//! This module provides normalization and whitespace tokenization.

pub mod tokenizer;
