//! Risk Quiz - Adaptive Credit-Risk Questionnaire Service
//!
//! This crate drives an adaptive questionnaire that estimates a credit-risk
//! profile, one LLM-authored question at a time.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
