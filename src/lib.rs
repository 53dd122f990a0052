//! Fúcsia Lead Intake Library
//!
//! This library provides the landing page service for the Fúcsia agency: the
//! contact form endpoint that captures leads, the WhatsApp deep link used by the
//! page's call-to-action buttons, and the server-rendered page itself.
//!
//! # Modules
//!
//! - `api`: API-layer components.
//! - `core`: Domain types, link building and lead sinks.
//! - `config`: Configuration management.
//! - `contact_link`: WhatsApp deep link builder.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `landing`: Server-rendered landing page.
//! - `models`: Lead form and lead record models.
//! - `routes`: Router and middleware assembly.
//! - `sink`: Lead sinks (tracing, in-memory).

pub mod api;
pub mod core;

pub mod config;
pub mod contact_link;
pub mod errors;
pub mod handlers;
pub mod landing;
pub mod models;
pub mod routes;
pub mod sink;
