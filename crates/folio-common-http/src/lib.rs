// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Folio.
//!
//! Every outbound request made by Folio goes through a client built here so
//! the bibliographic API sees one consistent `User-Agent`.

mod client;

pub use client::{new_client, new_client_with_timeout, user_agent};
