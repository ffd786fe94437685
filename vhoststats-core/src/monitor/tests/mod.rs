mod run_tests;
