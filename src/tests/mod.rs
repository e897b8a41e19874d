mod config;
mod frame;
mod header;
