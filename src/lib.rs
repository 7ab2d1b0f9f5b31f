//! treedeck: hierarchical slide decks from sectioned documents.
//!
//! A document is parsed into top-level blocks ([`input`], [`formats`]), grouped into a section
//! hierarchy ([`outline`]) and built into a forest of slide trees ([`builder`], [`node`]), one
//! tree per presentation. Navigation is a set of pure transitions over an immutable forest
//! ([`traversal`], [`nav`], [`presentation`]), addressed from outside through location
//! fragments ([`fragment`]) and projected for the minimap and exporters ([`export`]). The
//! terminal presenter ([`app_state`], [`ui`]) is a thin shell over those pieces.

pub mod app_state;
pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod fragment;
pub mod input;
pub mod logging;
pub mod nav;
pub mod node;
pub mod outline;
pub mod presentation;
pub mod section;
pub mod traversal;
pub mod ui;

#[cfg(test)]
#[path = "tests/support.rs"]
mod tests_support;
