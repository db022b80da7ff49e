pub mod search_server;
