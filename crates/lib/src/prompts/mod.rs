//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used by the summarization
//! pipeline, separated from the code that sends them.

pub mod summary;
