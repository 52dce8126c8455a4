pub mod config;
pub mod dashboard;
pub mod document;
pub mod fallback;
pub mod fetch;
pub mod leaderboard;
pub mod login;
pub mod model;
pub mod persist;
pub mod provider;
pub mod route;
pub mod state;
pub mod theme;
