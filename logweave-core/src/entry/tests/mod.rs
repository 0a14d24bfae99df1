mod log_entry_tests;
