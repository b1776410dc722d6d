//! Edge case tests for garnetc-lex
