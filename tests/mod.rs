mod smoke_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - sync_endpoint_mock: Exercising the /sync endpoint against mock providers
// - sync_workflow_mock: Running the sync pipeline against mock providers
