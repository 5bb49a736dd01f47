pub mod game;
pub mod health_check;
pub mod hello;
pub mod score;
pub mod table;
pub mod torrent;
