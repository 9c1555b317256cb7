//! HTTP request handlers.

pub(crate) mod components;
pub(crate) mod pages;
