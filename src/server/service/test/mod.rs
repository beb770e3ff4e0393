mod billing;
mod flock;
mod sale;
mod user;
