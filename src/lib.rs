//! vtags - ctags-style tags for Vue single-file components
//!
//! Walks source trees for `.vue` files, classifies each line against a small
//! table of patterns (`export default {`, `props`, `data() {`, methods,
//! `created() {`, `computed: {`) and emits a flat tags listing that editors
//! can use to jump to those lines.

pub mod domain;
pub mod source;
pub mod cli;

pub use domain::{classify_line, Kind, Report, Tag, TagEngine};
pub use source::{ExcludeSet, SourceCollector, SourceError, WalkCollector};
