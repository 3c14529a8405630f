mod bind_async_tests;
