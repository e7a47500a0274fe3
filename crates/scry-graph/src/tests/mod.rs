mod property_tests;
mod smoke_tests;
