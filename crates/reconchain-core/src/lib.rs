//! Reconchain Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the reconchain
//! recon pipeline, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         reconchain-cli (CLI)            │
//! │   (terminal prompt, config, logging)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Intake, Discovery, PortScan, FanOut,  │
//! │   Screenshot, PipelineService)          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, ProcessRunner, Prompt)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    reconchain-adapters (Infrastructure) │
//! │ (LocalFilesystem, SystemProcessRunner)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │    (Tool, Project, gnmap, HostPort)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reconchain_core::application::{PipelineService, Toolchain};
//!
//! // Adapters come from `reconchain-adapters` (or your own implementations).
//! let service = PipelineService::new(filesystem, runner, Toolchain::default());
//! let summary = service.run(&prompt).unwrap();
//! println!("{} open ports", summary.open_port_count);
//! ```

pub mod domain;

pub mod application;

pub mod error;
