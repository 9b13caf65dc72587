mod config;
mod list;
mod render;
