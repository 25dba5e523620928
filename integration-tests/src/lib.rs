//! Cross-crate scenario tests for the rootfind workspace live in the
//! `tests` directory; this crate exists only to host them.
