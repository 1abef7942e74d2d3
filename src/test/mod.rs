mod config;
mod cost_basis;
