//! Edge case tests for bogl-lex
