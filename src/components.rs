//! Reusable HTML components for the issues page
//!
//! This module provides the Maud component functions the page generator
//! composes: the document wrapper, header, sidebar, label chips and issue
//! cards.

pub mod header;
pub mod issue_card;
pub mod labels;
pub mod layout;
pub mod sidebar;
