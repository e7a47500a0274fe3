mod analyzer_tests;
mod edge_cases;
mod test_helpers;
