mod lifecycle_tests;
mod setter_tests;
