//! Storage layer - database entities and repositories

pub mod cascade;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
