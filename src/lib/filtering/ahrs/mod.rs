pub mod ahrs_filter;
pub mod config;
pub mod madgwick;
pub mod samples;
pub mod tracker;
