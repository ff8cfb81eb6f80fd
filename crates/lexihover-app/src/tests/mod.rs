mod page_tests;
