//! Integration test suite for the adp binary and library.

mod helpers;

mod cli_test;
mod playback_test;
mod script_test;
