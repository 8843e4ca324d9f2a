pub mod journal_client;
