mod audit;
mod config;
