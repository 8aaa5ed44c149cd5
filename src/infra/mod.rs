pub mod mock_analyzer;
