mod event_tests;
mod health_tests;
mod space_tests;
