mod geo;
mod helpers;
mod login;
mod protect;
mod register;
