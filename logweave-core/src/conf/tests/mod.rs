mod discover_tests;
mod loader_tests;
