mod client;
mod payload;

pub use client::HttpNumberSource;
