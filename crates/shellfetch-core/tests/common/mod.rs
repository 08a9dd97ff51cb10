pub mod release_server;
